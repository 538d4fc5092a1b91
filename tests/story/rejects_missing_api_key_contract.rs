use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn rejects_run_without_api_key() {
    let ctx = TestContext::new();
    ctx.write_default_gpx();

    ctx.cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"))
        .stderr(predicate::str::contains("configuration stage"));

    assert!(ctx.files_in(&ctx.outputs_dir()).is_empty());
}

#[test]
fn rejects_blank_api_key() {
    let ctx = TestContext::new();
    ctx.write_default_gpx();

    ctx.cli()
        .env("GEMINI_API_KEY", "   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));

    assert!(ctx.files_in(&ctx.outputs_dir()).is_empty());
}
