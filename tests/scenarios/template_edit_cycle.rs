//! Scenario: Editing a template and regenerating
//!
//! Journey: An author edits the hint (H) template and regenerates the batch.
//!
//! Steps:
//! 1. First run generates all 90 pages
//! 2. `diff` shows everything up to date
//! 3. Author edits the H template
//! 4. `diff` lists the 30 H pages as modified
//! 5. Regenerating brings the batch back in sync

use crate::common::*;

/// SCENARIO: Edit one template, preview, regenerate
#[test]
fn scenario_edit_template_then_regenerate() {
    let env = TestEnv::builder().with_default_templates().build();

    // Step 1
    let first = env.run(&[]);
    assert!(first.is_success(), "{}", first.combined_output());
    assert_eq!(env.output_count(), 90);

    // Step 2
    let clean = env.run(&["diff"]);
    assert!(clean.stdout.contains("Summary: 0 new, 0 modified, 90 unchanged"));

    // Step 3
    std::fs::write(
        env.scripts_dir().join(default_template_name("H")),
        format!("<h2>Hint for {DIRTY}</h2>\n"),
    )
    .unwrap();

    // Step 4
    let changed = env.run(&["diff"]);
    assert!(
        changed.stdout.contains("Summary: 0 new, 30 modified, 60 unchanged"),
        "{}",
        changed.stdout
    );

    // Step 5
    assert!(env.run(&["generate"]).is_success());
    assert_eq!(env.read_output("SCN_021_H.html"), "<h2>Hint for SCN_021</h2>\n");
    let after = env.run(&["diff"]);
    assert!(after.stdout.contains("90 unchanged"));
}
