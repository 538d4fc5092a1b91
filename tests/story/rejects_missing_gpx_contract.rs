use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn rejects_missing_default_gpx() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--mock")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("inputs/ottawa.gpx"));

    assert!(!ctx.outputs_dir().exists());
}

#[test]
fn rejects_gpx_with_bad_coordinates() {
    let ctx = TestContext::new();
    ctx.write_file(
        "bad.gpx",
        r#"<gpx><trk><trkseg><trkpt lat="north" lon="-75.7"/></trkseg></trk></gpx>"#,
    );

    ctx.cli()
        .args(["--mock", "--gpx", "bad.gpx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("north"));

    assert!(!ctx.outputs_dir().exists());
}

#[test]
fn rejects_gpx_without_track_points() {
    let ctx = TestContext::new();
    ctx.write_file("empty.gpx", r#"<gpx><wpt lat="45.0" lon="-75.0"/></gpx>"#);

    ctx.cli()
        .args(["--mock", "--gpx", "empty.gpx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no track points"));
}
