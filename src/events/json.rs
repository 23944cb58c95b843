//! JSON Event Sink
//!
//! Outputs generate events as NDJSON for CI/automation consumption.

use super::{GenerateEvent, GenerateEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON object for one event
pub fn event_to_json(event: &GenerateEvent) -> serde_json::Value {
    match event {
        GenerateEvent::Started {
            output_dir,
            scenario_count,
            template_count,
            dry_run,
        } => {
            serde_json::json!({
                "event": "start",
                "command": "generate",
                "output_dir": output_dir.display().to_string(),
                "scenario_count": scenario_count,
                "template_count": template_count,
                "dry_run": dry_run,
            })
        }

        GenerateEvent::DirectoryCreated { path } => {
            serde_json::json!({
                "event": "directory_created",
                "command": "generate",
                "path": path.display().to_string(),
            })
        }

        GenerateEvent::FileWritten {
            scenario,
            suffix,
            path,
        } => {
            serde_json::json!({
                "event": "item_written",
                "command": "generate",
                "scenario": scenario.as_str(),
                "suffix": suffix.as_str(),
                "path": path.display().to_string(),
            })
        }

        GenerateEvent::TemplateMissing {
            scenario,
            suffix,
            template,
        } => {
            serde_json::json!({
                "event": "item_error",
                "command": "generate",
                "scenario": scenario.as_str(),
                "suffix": suffix.as_str(),
                "error": "template_missing",
                "template": template.display().to_string(),
            })
        }

        GenerateEvent::Completed {
            written_count,
            missing_count,
            missing_files,
        } => {
            let status = if *missing_count == 0 {
                "success"
            } else {
                "partial"
            };
            serde_json::json!({
                "event": "complete",
                "command": "generate",
                "status": status,
                "written": written_count,
                "errors": missing_count,
                "missing_templates": missing_files,
            })
        }
    }
}

impl GenerateEventSink for JsonEventSink {
    fn on_event(&self, event: GenerateEvent) {
        self.write_event(event_to_json(&event));
    }
}
