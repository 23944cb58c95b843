//! Test fixtures - reusable template content for tests.

/// Dirty placeholder as produced by the template editor (`SCN` + two HOLAM marks)
pub const DIRTY: &str = "SCN\u{05B9}\u{05B9}_001";

/// Clean placeholder
pub const CLEAN: &str = "SCN_001";

/// Default template file name for a suffix, dirty characters included
pub fn default_template_name(suffix: &str) -> String {
    format!("{DIRTY}_{suffix}.html")
}

/// A template mixing both placeholder spellings
pub fn mixed_template(suffix: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>{DIRTY} - {suffix}</title></head>
<body data-scenario="{CLEAN}">
  <h1>Scenario {CLEAN}</h1>
  <script>window.SCENARIO_ID = "{DIRTY}";</script>
</body>
</html>
"#
    )
}

/// A template containing only the clean placeholder
pub const CLEAN_TEMPLATE: &str = r#"<div id="SCN_001" class="scenario">SCN_001</div>
"#;

/// A template with no placeholder at all
pub const STATIC_TEMPLATE: &str = "<p>static page</p>\n";
