//! Scenario: Recovering from a missing template
//!
//! Journey: The S template was not checked in. The first run reports it and
//! still produces the H and R pages; once restored, a rerun fills the gap.

use crate::common::*;

/// SCENARIO: Missing template reported, then restored
#[test]
fn scenario_restore_missing_template() {
    let env = TestEnv::builder().with_default_templates().build();
    env.remove_template(&default_template_name("S"));

    let partial = env.run(&["generate"]);
    assert!(partial.is_success());
    assert_eq!(env.output_count(), 60);
    assert!(partial.stderr.contains("not found (SCN_001 S)"), "{}", partial.stderr);

    // CI gate catches it
    assert!(!env.run(&["generate", "--strict"]).is_success());

    std::fs::write(
        env.scripts_dir().join(default_template_name("S")),
        mixed_template("S"),
    )
    .unwrap();

    let full = env.run(&["generate", "--strict"]);
    assert!(full.is_success(), "{}", full.combined_output());
    assert_eq!(env.output_count(), 90);
    assert!(!full.stderr.contains("Error"));
}
