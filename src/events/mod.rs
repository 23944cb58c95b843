//! Generator events
//!
//! The generator reports progress through a `GenerateEventSink` instead of
//! printing, so the CLI can render text or NDJSON and tests can record.

mod json;

pub use json::JsonEventSink;

use std::path::PathBuf;

use crate::models::{ConditionSuffix, ScenarioId};

/// Event emitted during a generate run
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateEvent {
    /// Run started
    Started {
        output_dir: PathBuf,
        scenario_count: u32,
        template_count: usize,
        dry_run: bool,
    },

    /// Output directory did not exist and was created
    DirectoryCreated { path: PathBuf },

    /// Output file was written (or would be, in a dry run)
    FileWritten {
        scenario: ScenarioId,
        suffix: ConditionSuffix,
        path: PathBuf,
    },

    /// Template could not be opened; the rest of this scenario is skipped
    /// under the default policy
    TemplateMissing {
        scenario: ScenarioId,
        suffix: ConditionSuffix,
        template: PathBuf,
    },

    /// Run finished
    Completed {
        written_count: usize,
        /// Missing-template encounters
        missing_count: usize,
        /// Distinct template files behind those encounters
        missing_files: usize,
    },
}

/// Trait for receiving generate events
///
/// Implementations:
/// - `ConsoleEventSink` (CLI): human-readable progress
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait GenerateEventSink {
    /// Handle a generate event
    fn on_event(&self, event: GenerateEvent);
}

/// Sink that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl GenerateEventSink for NoopEventSink {
    fn on_event(&self, _event: GenerateEvent) {}
}

/// Sink that keeps every event in memory
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: std::sync::Mutex<Vec<GenerateEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GenerateEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Number of recorded `TemplateMissing` events
    pub fn missing_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, GenerateEvent::TemplateMissing { .. }))
            .count()
    }
}

impl GenerateEventSink for RecordingEventSink {
    fn on_event(&self, event: GenerateEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
