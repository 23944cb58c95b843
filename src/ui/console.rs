//! Human-readable rendering of generate events and diff reports.

use std::io::{self, Write};
use std::sync::Mutex;

use scengen::{ChangeKind, ConfigWarning, DiffReport, GenerateEvent, GenerateEventSink};

use crate::ui::context::UiContext;
use crate::ui::icon::Icon;

/// Event sink that prints progress lines; errors go to stderr
pub struct ConsoleEventSink {
    ui: UiContext,
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self::with_writers(ui, io::stdout(), io::stderr())
    }

    pub fn with_writers<O, E>(ui: UiContext, out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            ui,
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
        }
    }

    fn print(&self, line: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", line);
        }
    }

    fn eprint(&self, line: &str) {
        if let Ok(mut err) = self.err.lock() {
            let _ = writeln!(err, "{}", line);
        }
    }
}

impl GenerateEventSink for ConsoleEventSink {
    fn on_event(&self, event: GenerateEvent) {
        let is_error = matches!(event, GenerateEvent::TemplateMissing { .. });
        if let Some(line) = format_event(&event, &self.ui) {
            if is_error {
                self.eprint(&line);
            } else {
                self.print(&line);
            }
        }
    }
}

/// One console line for `event`, or `None` when it is not shown at this
/// verbosity
pub fn format_event(event: &GenerateEvent, ui: &UiContext) -> Option<String> {
    let icon = |i: Icon| i.colored(ui.color, ui.unicode);

    match event {
        GenerateEvent::Started {
            output_dir,
            scenario_count,
            template_count,
            dry_run,
        } => {
            let total = *scenario_count as usize * template_count;
            let mode = if *dry_run { " (dry run)" } else { "" };
            Some(format!(
                "{} Generating {} files into: {}{}",
                icon(Icon::Generate),
                total,
                output_dir.display(),
                mode
            ))
        }
        GenerateEvent::DirectoryCreated { path } => Some(format!(
            "{} Created directory: {}",
            icon(Icon::Success),
            path.display()
        )),
        GenerateEvent::FileWritten { path, .. } => {
            if ui.verbose == 0 {
                return None;
            }
            Some(format!("  {} {}", icon(Icon::Arrow), path.display()))
        }
        GenerateEvent::TemplateMissing {
            scenario,
            suffix,
            template,
        } => Some(format!(
            "{} Error: template file '{}' not found ({} {})",
            icon(Icon::Error),
            template.display(),
            scenario,
            suffix
        )),
        GenerateEvent::Completed {
            written_count,
            missing_count,
            missing_files,
        } => {
            if *missing_count == 0 {
                Some(format!(
                    "{} Done! {} files written.",
                    icon(Icon::Success),
                    written_count
                ))
            } else {
                let noun = if *missing_files == 1 { "file" } else { "files" };
                Some(format!(
                    "{} Done with errors: {} files written, {} missing-template errors ({} template {} missing).",
                    icon(Icon::Warning),
                    written_count,
                    missing_count,
                    missing_files,
                    noun
                ))
            }
        }
    }
}

/// Config warnings, one line each
pub fn format_warnings(warnings: &[ConfigWarning], ui: &UiContext) -> Vec<String> {
    warnings
        .iter()
        .map(|w| format!("{} {}", Icon::Warning.colored(ui.color, ui.unicode), w))
        .collect()
}

/// Human summary of a diff report
pub fn format_diff(report: &DiffReport, ui: &UiContext) -> Vec<String> {
    let icon = |i: Icon| i.colored(ui.color, ui.unicode);
    let mut lines = Vec::new();

    let new = report.count(ChangeKind::New);
    if new > 0 {
        lines.push(format!("New files ({}):", new));
        for path in report.paths(ChangeKind::New) {
            lines.push(format!("  {} {}", icon(Icon::New), path.display()));
        }
    }

    let modified = report.count(ChangeKind::Modified);
    if modified > 0 {
        lines.push(format!("Modified files ({}):", modified));
        for path in report.paths(ChangeKind::Modified) {
            lines.push(format!("  {} {}", icon(Icon::Modified), path.display()));
        }
    }

    for template in &report.missing_templates {
        lines.push(format!(
            "{} Missing template: {}",
            icon(Icon::Error),
            template.display()
        ));
    }

    lines.push(format!(
        "Summary: {} new, {} modified, {} unchanged",
        new,
        modified,
        report.count(ChangeKind::Unchanged)
    ));
    lines
}
