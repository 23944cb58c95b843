//! Scenario file generator
//!
//! Expands every registered template once per scenario index:
//!
//! ```text
//! for i in 1..=scenario_count
//!     for (suffix, template) in registry
//!         read -> substitute -> write {output_dir}/SCN_{i:03}_{suffix}.html
//! ```
//!
//! A missing template is reported and, under the default
//! `MissingTemplatePolicy::SkipScenario`, ends the inner loop for that
//! scenario index only. Any other failure aborts the run, including an
//! unreadable template, bad scenario data, or a template without the data
//! anchor.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::data::ScenarioData;
use crate::error::{ScengenError, ScengenResult};
use crate::events::{GenerateEvent, GenerateEventSink};
use crate::fs::{content_hash, FileSystem};
use crate::models::{
    ConditionSuffix, MissingTemplatePolicy, ScenarioId, SubstitutionKind, TemplateEntry,
};
use crate::render::render_page;

/// Options for a generate run
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Render and report, but write nothing
    pub dry_run: bool,
}

/// One output file produced by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub scenario: ScenarioId,
    pub suffix: ConditionSuffix,
    pub path: PathBuf,
    /// `sha256:` hash of the written content
    pub hash: String,
}

/// One missing-template encounter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTemplate {
    pub scenario: ScenarioId,
    pub suffix: ConditionSuffix,
    pub template: PathBuf,
}

/// Outcome of a generate run
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub written: Vec<GeneratedFile>,
    /// One entry per encounter, so a template missing for the whole run
    /// appears once per scenario index it was attempted for
    pub missing: Vec<MissingTemplate>,
    pub output_dir_created: bool,
}

impl GenerateReport {
    /// True when no template was missing
    pub fn is_success(&self) -> bool {
        self.missing.is_empty()
    }

    /// Distinct template paths that were missing
    pub fn missing_templates(&self) -> BTreeSet<PathBuf> {
        self.missing.iter().map(|m| m.template.clone()).collect()
    }
}

/// How an existing output file compares to what a run would write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    New,
    Modified,
    Unchanged,
}

/// One planned output file in a diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    pub scenario: ScenarioId,
    pub suffix: ConditionSuffix,
    pub path: PathBuf,
    pub kind: ChangeKind,
}

/// Preview of a generate run against the current output directory
#[derive(Debug, Clone, Default)]
pub struct DiffReport {
    pub entries: Vec<DiffEntry>,
    /// Missing template paths, each listed once
    pub missing_templates: BTreeSet<PathBuf>,
}

impl DiffReport {
    pub fn count(&self, kind: ChangeKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    pub fn paths(&self, kind: ChangeKind) -> impl Iterator<Item = &PathBuf> {
        self.entries
            .iter()
            .filter(move |e| e.kind == kind)
            .map(|e| &e.path)
    }

    /// True when a run would write nothing new
    pub fn is_up_to_date(&self) -> bool {
        self.entries.iter().all(|e| e.kind == ChangeKind::Unchanged)
    }
}

enum Step {
    Rendered {
        scenario: ScenarioId,
        suffix: ConditionSuffix,
        path: PathBuf,
        content: String,
    },
    Missing(MissingTemplate),
}

/// Generate every scenario file described by `config`.
pub fn generate<F: FileSystem + ?Sized>(
    config: &GeneratorConfig,
    options: GenerateOptions,
    fs: &F,
    sink: &dyn GenerateEventSink,
) -> ScengenResult<GenerateReport> {
    config.validate()?;

    sink.on_event(GenerateEvent::Started {
        output_dir: config.output_dir.clone(),
        scenario_count: config.scenario_count,
        template_count: config.templates.len(),
        dry_run: options.dry_run,
    });

    let mut report = GenerateReport::default();

    if !options.dry_run && !fs.exists(&config.output_dir) {
        fs.create_dir_all(&config.output_dir)?;
        report.output_dir_created = true;
        sink.on_event(GenerateEvent::DirectoryCreated {
            path: config.output_dir.clone(),
        });
    }

    walk(config, fs, |step| {
        match step {
            Step::Rendered {
                scenario,
                suffix,
                path,
                content,
            } => {
                if !options.dry_run {
                    fs.write_atomic(&path, &content)?;
                }
                sink.on_event(GenerateEvent::FileWritten {
                    scenario: scenario.clone(),
                    suffix,
                    path: path.clone(),
                });
                report.written.push(GeneratedFile {
                    scenario,
                    suffix,
                    path,
                    hash: content_hash(&content),
                });
            }
            Step::Missing(missing) => {
                sink.on_event(GenerateEvent::TemplateMissing {
                    scenario: missing.scenario.clone(),
                    suffix: missing.suffix,
                    template: missing.template.clone(),
                });
                report.missing.push(missing);
            }
        }
        Ok(())
    })?;

    sink.on_event(GenerateEvent::Completed {
        written_count: report.written.len(),
        missing_count: report.missing.len(),
        missing_files: report.missing_templates().len(),
    });

    Ok(report)
}

/// Compare what a run would write against the output directory.
pub fn diff<F: FileSystem + ?Sized>(config: &GeneratorConfig, fs: &F) -> ScengenResult<DiffReport> {
    config.validate()?;

    let mut report = DiffReport::default();

    walk(config, fs, |step| {
        match step {
            Step::Rendered {
                scenario,
                suffix,
                path,
                content,
            } => {
                let kind = if !fs.exists(&path) {
                    ChangeKind::New
                } else {
                    match fs.read_to_string(&path) {
                        Ok(existing) if existing == content => ChangeKind::Unchanged,
                        _ => ChangeKind::Modified,
                    }
                };
                report.entries.push(DiffEntry {
                    scenario,
                    suffix,
                    path,
                    kind,
                });
            }
            Step::Missing(missing) => {
                report.missing_templates.insert(missing.template);
            }
        }
        Ok(())
    })?;

    Ok(report)
}

/// Drive the scenario × template loop, handing each rendered file or
/// missing template to `visit` in order.
fn walk<F, V>(config: &GeneratorConfig, fs: &F, mut visit: V) -> ScengenResult<()>
where
    F: FileSystem + ?Sized,
    V: FnMut(Step) -> ScengenResult<()>,
{
    let data_sub = config
        .substitutions
        .iter()
        .find(|s| s.kind == SubstitutionKind::Data);

    for scenario in config.scenario_ids() {
        let data = match data_sub.and_then(|sub| sub.source_for(&scenario)) {
            Some(source) => Some(ScenarioData::load(fs, &config.templates_dir.join(source))?),
            None => None,
        };

        for entry in &config.templates {
            let template = match read_template(config, fs, entry) {
                Ok(template) => template,
                Err(ScengenError::MissingTemplate { suffix, path }) => {
                    visit(Step::Missing(MissingTemplate {
                        scenario: scenario.clone(),
                        suffix,
                        template: path,
                    }))?;
                    match config.on_missing {
                        MissingTemplatePolicy::SkipScenario => break,
                        MissingTemplatePolicy::SkipTemplate => continue,
                    }
                }
                Err(e) => return Err(e),
            };

            if let Some(anchor) = data_sub.and_then(|sub| sub.search_text()) {
                if !template.contains(anchor) {
                    return Err(ScengenError::MissingAnchor {
                        path: config.template_path(entry),
                        anchor: anchor.to_string(),
                    });
                }
            }

            let payload = data.as_ref().map(|d| d.payload(&scenario, entry.suffix));
            let content = render_page(&template, &config.substitutions, &scenario, payload.as_ref());
            visit(Step::Rendered {
                path: config.output_path(&scenario, entry.suffix),
                scenario: scenario.clone(),
                suffix: entry.suffix,
                content,
            })?;
        }
    }

    Ok(())
}

fn read_template<F: FileSystem + ?Sized>(
    config: &GeneratorConfig,
    fs: &F,
    entry: &TemplateEntry,
) -> ScengenResult<String> {
    let path = config.template_path(entry);
    fs.read_to_string(&path).map_err(|e| match e {
        ScengenError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            ScengenError::MissingTemplate {
                suffix: entry.suffix,
                path,
            }
        }
        other => other,
    })
}
