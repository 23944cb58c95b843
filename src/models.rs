//! Core data models for scengen
//!
//! Defines the value types the generator works with:
//! - `ConditionSuffix`: which template variant a file belongs to
//! - `ScenarioId`: the `SCN_007`-style identifier of one scenario group
//! - `Substitution`: one ordered placeholder replacement (literal, title or
//!   data injection)
//! - `TemplateEntry`: one row of the template registry

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Token inside a substitution's replacement that expands to the scenario id
pub const SCENARIO_ID_TOKEN: &str = "{scenario_id}";

/// Token inside a data substitution's replacement that expands to the JSON payload
pub const DATA_TOKEN: &str = "{data}";

/// Anchor a data substitution replaces when no pattern is configured
pub const DATA_ANCHOR: &str = "/* DATA_INJECTION_POINT */";

/// Widest zero-pad `ScenarioId` honors; a `u32` index never needs more digits
pub const MAX_ID_WIDTH: usize = 10;

/// Condition variant of a scenario page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConditionSuffix {
    #[serde(alias = "h")]
    H,
    #[serde(alias = "r")]
    R,
    #[serde(alias = "s")]
    S,
}

impl ConditionSuffix {
    /// All suffixes in registry order
    pub const ALL: [ConditionSuffix; 3] = [ConditionSuffix::H, ConditionSuffix::R, ConditionSuffix::S];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionSuffix::H => "H",
            ConditionSuffix::R => "R",
            ConditionSuffix::S => "S",
        }
    }
}

impl std::fmt::Display for ConditionSuffix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of one generated scenario group, e.g. `SCN_007`.
///
/// The numeric part is zero-padded to `width` digits (at most
/// [`MAX_ID_WIDTH`]). Indices that need more digits than `width` are written
/// in full.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ScenarioId {
    index: u32,
    value: String,
}

impl ScenarioId {
    pub fn new(prefix: &str, width: usize, index: u32) -> Self {
        let width = width.min(MAX_ID_WIDTH);
        Self {
            index,
            value: format!("{prefix}{index:0width$}"),
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Output file name for this scenario and condition (`SCN_007_H.html`)
    pub fn file_name(&self, suffix: ConditionSuffix, extension: &str) -> String {
        if extension.is_empty() {
            format!("{}_{}", self.value, suffix)
        } else {
            format!("{}_{}.{}", self.value, suffix, extension)
        }
    }
}

impl std::fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// How a substitution finds the text it replaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubstitutionKind {
    /// Every occurrence of `pattern`
    #[default]
    Literal,
    /// The inner text of the first single-line `<title>…</title>`
    Title,
    /// The first occurrence of `pattern` (default [`DATA_ANCHOR`]), replaced
    /// with the scenario's JSON payload
    Data,
}

/// One ordered substitution step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    #[serde(default)]
    pub kind: SubstitutionKind,

    /// Literal text to find; unused by `title`
    #[serde(default)]
    pub pattern: String,

    /// May contain `{scenario_id}`, and `{data}` for data substitutions.
    /// Defaults depend on the kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,

    /// JSON file with the scenario data, relative to the templates
    /// directory; may contain `{scenario_id}`. Required by `data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Substitution {
    /// Substitution that replaces `pattern` with the scenario id
    pub fn scenario_id(pattern: impl Into<String>) -> Self {
        Self {
            kind: SubstitutionKind::Literal,
            pattern: pattern.into(),
            replacement: None,
            source: None,
        }
    }

    /// Literal substitution with an explicit replacement
    pub fn literal(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            replacement: Some(replacement.into()),
            ..Self::scenario_id(pattern)
        }
    }

    /// Rewrites the page title to the scenario id
    pub fn title() -> Self {
        Self {
            kind: SubstitutionKind::Title,
            ..Self::scenario_id("")
        }
    }

    /// Injects `const DATA = {data};` at [`DATA_ANCHOR`]
    pub fn data(source: impl Into<String>) -> Self {
        Self {
            kind: SubstitutionKind::Data,
            source: Some(source.into()),
            ..Self::scenario_id("")
        }
    }

    /// Text searched for; `None` for title rewrites
    pub fn search_text(&self) -> Option<&str> {
        match self.kind {
            SubstitutionKind::Literal => Some(&self.pattern),
            SubstitutionKind::Title => None,
            SubstitutionKind::Data if self.pattern.is_empty() => Some(DATA_ANCHOR),
            SubstitutionKind::Data => Some(&self.pattern),
        }
    }

    /// Replacement template before token expansion
    pub fn replacement_template(&self) -> &str {
        match (&self.replacement, self.kind) {
            (Some(r), _) => r,
            (None, SubstitutionKind::Data) => "const DATA = {data};",
            (None, _) => SCENARIO_ID_TOKEN,
        }
    }

    /// Replacement text with the scenario id token expanded
    pub fn replacement_for(&self, id: &ScenarioId) -> String {
        self.replacement_template().replace(SCENARIO_ID_TOKEN, id.as_str())
    }

    /// Data file path for a scenario, relative to the templates directory
    pub fn source_for(&self, id: &ScenarioId) -> Option<PathBuf> {
        self.source
            .as_ref()
            .map(|s| PathBuf::from(s.replace(SCENARIO_ID_TOKEN, id.as_str())))
    }
}

/// One template registry row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub suffix: ConditionSuffix,

    /// File name, relative to the templates directory
    pub file: PathBuf,
}

impl TemplateEntry {
    pub fn new(suffix: ConditionSuffix, file: impl Into<PathBuf>) -> Self {
        Self {
            suffix,
            file: file.into(),
        }
    }
}

/// What the generator does when a template cannot be opened
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum MissingTemplatePolicy {
    /// Stop processing the current scenario index; later indices still run
    #[default]
    SkipScenario,
    /// Skip only the missing template and continue with the next suffix
    SkipTemplate,
}
