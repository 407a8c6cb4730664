//! Regression tests for the text reporting layer.
//!
//! The report consumes read-only engine output, so these double as an
//! end-to-end check that the demo solve keeps producing the reference
//! placements.

use pcb_placer::{report, solve, Problem};

#[test]
fn test_demo_placement_summary_snapshot() {
    let outcome = solve(&Problem::demo()).unwrap();
    let summary = report::placement_summary(&outcome.placer);
    insta::assert_snapshot!(summary, @r###"
    USB_CONNECTOR: (0, 0) to (5, 5)
    MIKROBUS_CONNECTOR_1: (5, 0) to (10, 5)
    MIKROBUS_CONNECTOR_2: (0, 45) to (5, 50)
    MICROCONTROLLER: (10, 0) to (15, 5)
    CRYSTAL: (15, 0) to (20, 5)
    "###);
}

#[test]
fn test_demo_verification_passes() {
    let outcome = solve(&Problem::demo()).unwrap();
    let verification = report::verify(&outcome);
    assert!(verification.all_valid);
    assert!(verification
        .text
        .contains("MIKROBUS_CONNECTOR_1 / MIKROBUS_CONNECTOR_2: ok"));
}

#[test]
fn test_failed_solve_is_reported() {
    let source = r#"
[board]
width = 10
height = 10

[[components]]
name = "big"
width = 10
height = 10

[[components]]
name = "late"
width = 2
height = 2

[[phases]]
place = "big"

[[phases]]
place = "late"
"#;
    let outcome = pcb_placer::solve_str(source).unwrap();
    let summary = report::phase_summary(&outcome);
    assert!(summary.contains("phase 1: place big .. ok"));
    assert!(summary.contains("phase 2: place late .. FAILED"));
}
