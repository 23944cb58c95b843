//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ScengenError, ScengenResult};

use super::types::GeneratorConfig;

/// Config file looked up in the project directory
pub const PROJECT_CONFIG_FILE: &str = "scengen.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Key in a config file that no setting reads
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// `SCENGEN_*` variable whose value could not be used
    InvalidEnv {
        var: String,
        value: String,
        expected: &'static str,
    },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::InvalidEnv {
                var,
                value,
                expected,
            } => write!(f, "ignoring {}='{}': expected {}", var, value, expected),
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ScengenResult<(GeneratorConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: GeneratorConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ScengenError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults.
///
/// A config file that exists but fails to parse is an error; absent files
/// fall through to the next candidate.
pub fn load_or_default(
    project_root: Option<&Path>,
) -> ScengenResult<(GeneratorConfig, Vec<ConfigWarning>)> {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            return load_with_warnings(&project_config);
        }
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            return load_with_warnings(&user_config);
        }
    }

    Ok((GeneratorConfig::default(), Vec::new()))
}

/// `~/.config/scengen/config.toml` (platform config dir)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scengen").join("config.toml"))
}

/// Apply environment variable overrides (SCENGEN_* prefix).
///
/// Empty values are ignored; a count that does not parse is reported.
pub fn with_env_overrides<E>(
    mut config: GeneratorConfig,
    get_env: E,
) -> (GeneratorConfig, Vec<ConfigWarning>)
where
    E: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    if let Some(dir) = get_env("SCENGEN_TEMPLATES_DIR").filter(|d| !d.is_empty()) {
        config.templates_dir = PathBuf::from(dir);
    }

    if let Some(dir) = get_env("SCENGEN_OUTPUT_DIR").filter(|d| !d.is_empty()) {
        config.output_dir = PathBuf::from(dir);
    }

    if let Some(count) = get_env("SCENGEN_SCENARIO_COUNT").filter(|c| !c.is_empty()) {
        match count.trim().parse::<u32>() {
            Ok(count) => config.scenario_count = count,
            Err(_) => warnings.push(ConfigWarning::InvalidEnv {
                var: "SCENGEN_SCENARIO_COUNT".to_string(),
                value: count,
                expected: "a non-negative integer",
            }),
        }
    }

    (config, warnings)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "templates_dir",
        "output_dir",
        "scenario_count",
        "id_prefix",
        "id_width",
        "extension",
        "on_missing",
        "templates",
        "suffix",
        "file",
        "substitutions",
        "pattern",
        "replacement",
        "kind",
        "source",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
