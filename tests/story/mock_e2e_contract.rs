use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn mock_run_writes_one_page_with_narrative_before_map() {
    let ctx = TestContext::new();
    ctx.write_default_gpx();

    ctx.cli()
        .arg("--mock")
        .assert()
        .success()
        .stdout(predicate::str::contains("Output saved to"));

    let files = ctx.files_in(&ctx.outputs_dir());
    assert_eq!(files.len(), 1, "expected exactly one page, found {:?}", files);

    let name = files[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("trip_") && name.ends_with(".html"), "unexpected name {name}");

    let html = fs::read_to_string(&files[0]).unwrap();
    let narrative = html.find("A Stroll Through Town").expect("narrative missing");
    let map = html.find("<div id=\"map\">").expect("map container missing");
    assert!(narrative < map);
    assert_eq!(html.matches("<body>").count(), 1);
    assert_eq!(html.matches("\"Point\"").count(), 6);
    assert_eq!(html.matches("\"LineString\"").count(), 1);
    assert!(!html.contains("<img"));
}

#[test]
fn mock_run_accepts_inline_points_and_output_dir() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "--mock",
            "--point",
            "45.4302,-75.7086,2025-04-11 10:00:00",
            "--point",
            "45.4290,-75.7003,2025-04-11 10:05:00",
            "--output-dir",
            "pages",
        ])
        .assert()
        .success();

    assert!(!ctx.outputs_dir().exists());
    let files = ctx.files_in(&ctx.work_dir().join("pages"));
    assert_eq!(files.len(), 1);
    let html = fs::read_to_string(&files[0]).unwrap();
    assert_eq!(html.matches("\"Point\"").count(), 2);
}

#[test]
fn configured_output_dir_is_used() {
    let ctx = TestContext::new();
    ctx.write_default_gpx();
    ctx.write_file("stroll.toml", "[output]\ndir = \"journal\"\n");

    ctx.cli().arg("--mock").assert().success();

    assert_eq!(ctx.files_in(&ctx.work_dir().join("journal")).len(), 1);
}

#[test]
fn each_run_writes_a_new_page() {
    let ctx = TestContext::new();
    ctx.write_default_gpx();

    ctx.cli().arg("--mock").assert().success();
    ctx.cli().arg("--mock").assert().success();

    assert_eq!(ctx.files_in(&ctx.outputs_dir()).len(), 2);
}
