//! Configuration type definitions

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ScengenError, ScengenResult};
use crate::models::{
    ConditionSuffix, MissingTemplatePolicy, ScenarioId, Substitution, SubstitutionKind,
    TemplateEntry, MAX_ID_WIDTH,
};

use super::loader::{self, ConfigWarning};

/// Dirty placeholder: `SCN` followed by two HEBREW POINT HOLAM marks.
pub const DIRTY_PLACEHOLDER: &str = "SCN\u{05B9}\u{05B9}_001";

/// Clean placeholder as it appears in well-formed templates.
pub const CLEAN_PLACEHOLDER: &str = "SCN_001";

/// Generator configuration
///
/// Every field has a built-in default, so an empty TOML file is a valid
/// config reproducing the stock 30 × H/R/S batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory the template files are read from
    pub templates_dir: PathBuf,

    /// Directory generated files are written to
    pub output_dir: PathBuf,

    /// Scenario indices run from 1 to this value inclusive
    pub scenario_count: u32,

    pub id_prefix: String,

    /// Zero-pad width of the numeric part of the scenario id
    pub id_width: usize,

    /// Output file extension, without the dot
    pub extension: String,

    pub on_missing: MissingTemplatePolicy,

    /// Template registry, processed in this order
    pub templates: Vec<TemplateEntry>,

    /// Applied in order, each on the previous result
    pub substitutions: Vec<Substitution>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("."),
            output_dir: Path::new("..").join("public").join("scenarios"),
            scenario_count: 30,
            id_prefix: "SCN_".to_string(),
            id_width: 3,
            extension: "html".to_string(),
            on_missing: MissingTemplatePolicy::default(),
            templates: default_templates(),
            substitutions: vec![
                Substitution::scenario_id(DIRTY_PLACEHOLDER),
                Substitution::scenario_id(CLEAN_PLACEHOLDER),
            ],
        }
    }
}

fn default_templates() -> Vec<TemplateEntry> {
    ConditionSuffix::ALL
        .iter()
        .map(|suffix| TemplateEntry::new(*suffix, format!("{DIRTY_PLACEHOLDER}_{suffix}.html")))
        .collect()
}

impl GeneratorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ScengenResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ScengenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> ScengenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (SCENGEN_* prefix); values that
    /// cannot be used come back as warnings
    pub fn with_env_overrides(self) -> (Self, Vec<ConfigWarning>) {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Scenario id for a 1-based index
    pub fn scenario_id(&self, index: u32) -> ScenarioId {
        ScenarioId::new(&self.id_prefix, self.id_width, index)
    }

    /// All scenario ids of a run, in order
    pub fn scenario_ids(&self) -> impl Iterator<Item = ScenarioId> + '_ {
        (1..=self.scenario_count).map(|i| self.scenario_id(i))
    }

    /// Path of a registered template
    pub fn template_path(&self, entry: &TemplateEntry) -> PathBuf {
        self.templates_dir.join(&entry.file)
    }

    /// Path a scenario/condition pair is written to
    pub fn output_path(&self, id: &ScenarioId, suffix: ConditionSuffix) -> PathBuf {
        self.output_dir.join(id.file_name(suffix, &self.extension))
    }

    /// Upper bound on the number of files one run writes
    pub fn expected_file_count(&self) -> usize {
        self.scenario_count as usize * self.templates.len()
    }

    /// Reject configurations the generator cannot run
    pub fn validate(&self) -> ScengenResult<()> {
        if self.templates.is_empty() {
            return Err(ScengenError::Validation {
                message: "no templates registered".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for entry in &self.templates {
            if !seen.insert(entry.suffix) {
                return Err(ScengenError::Validation {
                    message: format!("duplicate condition suffix '{}'", entry.suffix),
                });
            }
        }

        if self.id_width > MAX_ID_WIDTH {
            return Err(ScengenError::Validation {
                message: format!(
                    "id_width {} exceeds the maximum of {}",
                    self.id_width, MAX_ID_WIDTH
                ),
            });
        }

        for (pos, sub) in self.substitutions.iter().enumerate() {
            match sub.kind {
                SubstitutionKind::Literal if sub.pattern.is_empty() => {
                    return Err(ScengenError::Validation {
                        message: format!("substitution #{} has an empty pattern", pos + 1),
                    });
                }
                SubstitutionKind::Data if sub.source.as_deref().unwrap_or("").is_empty() => {
                    return Err(ScengenError::Validation {
                        message: format!("data substitution #{} needs a source", pos + 1),
                    });
                }
                _ => {}
            }
        }

        let data_count = self
            .substitutions
            .iter()
            .filter(|s| s.kind == SubstitutionKind::Data)
            .count();
        if data_count > 1 {
            return Err(ScengenError::Validation {
                message: "at most one data substitution is allowed".to_string(),
            });
        }

        Ok(())
    }
}
