//! Configuration module for scengen
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SCENGEN_*)
//! 3. Explicit `--config` file, else project config (./scengen.toml)
//! 4. User config (~/.config/scengen/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{GeneratorConfig, CLEAN_PLACEHOLDER, DIRTY_PLACEHOLDER};
