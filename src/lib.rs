//! scengen - scenario page generator
//!
//! Expands a small registry of HTML templates into a numbered batch of
//! scenario pages (`SCN_001_H.html` ... `SCN_030_S.html`) by replacing the
//! placeholder scenario id in each template, optionally rewriting the page
//! title and injecting per-scenario JSON data.

pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod fs;
pub mod generator;
pub mod models;
pub mod render;

// Re-exports for convenience
pub use config::{ConfigWarning, GeneratorConfig};
pub use data::ScenarioData;
pub use error::{ScengenError, ScengenResult};
pub use events::{GenerateEvent, GenerateEventSink, JsonEventSink, NoopEventSink, RecordingEventSink};
pub use fs::{FileSystem, LocalFs};
pub use generator::{
    diff, generate, ChangeKind, DiffEntry, DiffReport, GenerateOptions, GenerateReport,
    GeneratedFile, MissingTemplate,
};
pub use models::{
    ConditionSuffix, MissingTemplatePolicy, ScenarioId, Substitution, SubstitutionKind,
    TemplateEntry,
};
pub use render::{render, render_page};
