use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn rejects_tone_outside_the_set() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--tone", "sarcastic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sarcastic"));
}

#[test]
fn rejects_gpx_together_with_points() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--gpx", "walk.gpx", "--point", "45.0,-75.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn rejects_point_outside_coordinate_ranges() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--mock", "--point", "999,-75"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("latitude 999 is outside"));

    ctx.cli()
        .args(["--mock", "--point", "NaN,inf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NaN"));

    assert!(!ctx.outputs_dir().exists());
}

#[test]
fn rejects_malformed_config_file() {
    let ctx = TestContext::new();
    ctx.write_default_gpx();
    ctx.write_file("stroll.toml", "[gemini]\nunknown_key = 1\n");

    ctx.cli()
        .arg("--mock")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("configuration stage"));

    assert!(!ctx.outputs_dir().exists());
}
