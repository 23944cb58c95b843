//! Command handlers for the scengen CLI

pub mod diff;
pub mod generate;

use anyhow::{Context, Result};

use scengen::{ConfigWarning, GeneratorConfig};

use crate::cli::RunArgs;
use crate::ui::console::format_warnings;
use crate::ui::context::UiContext;

/// Build the effective config: file (or defaults), then SCENGEN_* env, then
/// CLI flags.
pub fn resolve_config(run: &RunArgs) -> Result<(GeneratorConfig, Vec<ConfigWarning>)> {
    let (config, mut warnings) = match &run.config {
        Some(path) => GeneratorConfig::load_with_warnings(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir()?;
            GeneratorConfig::load_or_default(Some(cwd.as_path()))?
        }
    };

    let (config, env_warnings) = config.with_env_overrides();
    warnings.extend(env_warnings);

    Ok((apply_run_args(config, run), warnings))
}

fn apply_run_args(mut config: GeneratorConfig, run: &RunArgs) -> GeneratorConfig {
    if let Some(dir) = &run.templates_dir {
        config.templates_dir = dir.clone();
    }
    if let Some(dir) = &run.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(count) = run.count {
        config.scenario_count = count;
    }
    config
}

/// Report config warnings without interrupting the run
pub fn print_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if ui.json {
        for w in warnings {
            println!("{}", warning_json(w));
        }
    } else {
        for line in format_warnings(warnings, ui) {
            eprintln!("{}", line);
        }
    }
}

fn warning_json(warning: &ConfigWarning) -> serde_json::Value {
    match warning {
        ConfigWarning::UnknownKey {
            key,
            file,
            line,
            suggestion,
        } => serde_json::json!({
            "event": "config_warning",
            "kind": "unknown_key",
            "key": key,
            "file": file.display().to_string(),
            "line": line,
            "suggestion": suggestion,
        }),
        ConfigWarning::InvalidEnv { var, value, .. } => serde_json::json!({
            "event": "config_warning",
            "kind": "invalid_env",
            "var": var,
            "value": value,
            "message": warning.to_string(),
        }),
    }
}
