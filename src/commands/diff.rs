//! Diff command handler

use anyhow::Result;

use scengen::{diff, ChangeKind, LocalFs};

use crate::cli::RunArgs;
use crate::ui::console::format_diff;
use crate::ui::context::UiContext;
use crate::ui::icon::Icon;

use super::{print_warnings, resolve_config};

/// Execute the diff command
pub fn cmd_diff(run: &RunArgs, json: bool, verbose: u8) -> Result<()> {
    let ui = UiContext::new(json, verbose);

    let (config, warnings) = resolve_config(run)?;
    print_warnings(&warnings, &ui);

    if !json {
        println!(
            "{} scengen diff: {}",
            Icon::Diff.colored(ui.color, ui.unicode),
            config.output_dir.display()
        );
    }

    let report = diff(&config, &LocalFs::new())?;

    if json {
        let output = serde_json::json!({
            "event": "diff",
            "new": report.count(ChangeKind::New),
            "modified": report.count(ChangeKind::Modified),
            "unchanged": report.count(ChangeKind::Unchanged),
            "missing_templates": report
                .missing_templates
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        for line in format_diff(&report, &ui) {
            println!("{}", line);
        }
    }

    Ok(())
}
