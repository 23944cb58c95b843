//! Per-scenario JSON data for `data` substitutions

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{ScengenError, ScengenResult};
use crate::fs::FileSystem;
use crate::models::{ConditionSuffix, ScenarioId};

/// A scenario's data file, parsed
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioData {
    file_name: String,
    fields: Map<String, Value>,
}

impl ScenarioData {
    /// Read and parse the data file at `path`
    pub fn load<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> ScengenResult<Self> {
        let text = fs.read_to_string(path).map_err(|e| match e {
            ScengenError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                ScengenError::InvalidData {
                    path: path.to_path_buf(),
                    message: "file not found".to_string(),
                }
            }
            other => other,
        })?;
        Self::parse(path, &text)
    }

    /// Parse data file content; the top level must be a JSON object
    pub fn parse(path: &Path, text: &str) -> ScengenResult<Self> {
        let invalid = |message: String| ScengenError::InvalidData {
            path: path.to_path_buf(),
            message,
        };

        match serde_json::from_str::<Value>(text).map_err(|e| invalid(e.to_string()))? {
            Value::Object(fields) => Ok(Self {
                file_name: file_name_of(path),
                fields,
            }),
            _ => Err(invalid("expected a JSON object".to_string())),
        }
    }

    /// Payload injected into one page: the file's fields plus
    /// `scenarioName`, `vizType` and `originalFileName`
    pub fn payload(&self, id: &ScenarioId, suffix: ConditionSuffix) -> Value {
        let mut fields = self.fields.clone();
        fields.insert("scenarioName".to_string(), Value::from(id.as_str()));
        fields.insert("vizType".to_string(), Value::from(suffix.as_str()));
        fields.insert(
            "originalFileName".to_string(),
            Value::from(self.file_name.as_str()),
        );
        Value::Object(fields)
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
