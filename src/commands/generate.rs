//! Generate command handler

use anyhow::Result;

use scengen::{generate, GenerateEventSink, GenerateOptions, JsonEventSink, LocalFs, MissingTemplatePolicy};

use crate::cli::RunArgs;
use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;

use super::{print_warnings, resolve_config};

/// Execute the generate command
pub fn cmd_generate(
    run: &RunArgs,
    on_missing: Option<MissingTemplatePolicy>,
    dry_run: bool,
    strict: bool,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let ui = UiContext::new(json, verbose);

    let (mut config, warnings) = resolve_config(run)?;
    if let Some(policy) = on_missing {
        config.on_missing = policy;
    }
    print_warnings(&warnings, &ui);

    let sink: Box<dyn GenerateEventSink> = if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::new(ui))
    };

    let report = generate(&config, GenerateOptions { dry_run }, &LocalFs::new(), sink.as_ref())?;

    if strict && !report.is_success() {
        let missing: Vec<String> = report
            .missing_templates()
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        anyhow::bail!("missing templates: {}", missing.join(", "));
    }

    Ok(())
}
