use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn prompt_preview_prints_prompt_without_key_or_output() {
    let ctx = TestContext::new();
    ctx.write_default_gpx();

    ctx.cli()
        .args(["--prompt-preview", "--tone", "poetic", "--length", "short"])
        .assert()
        .success()
        .stdout(predicate::str::contains("short journal entry with a poetic tone"))
        .stdout(predicate::str::contains("Lat: 45.43025807431552"))
        .stdout(predicate::str::contains("Time: 2025-04-11T10:30:00Z"));

    assert!(!ctx.outputs_dir().exists());
}

#[test]
fn prompt_preview_still_validates_input() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--prompt-preview", "--gpx", "missing.gpx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.gpx"))
        .stderr(predicate::str::contains("input stage"));
}
