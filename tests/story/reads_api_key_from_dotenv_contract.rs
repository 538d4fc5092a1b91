use crate::harness::TestContext;
use predicates::prelude::*;

// The key comes from `.env`; the API URL points at a closed local port so the
// run gets past credential loading and fails in generation instead.
#[test]
fn api_key_is_read_from_dotenv_file() {
    let ctx = TestContext::new();
    ctx.write_default_gpx();
    ctx.write_file(".env", "GEMINI_API_KEY=from-dotenv\n");
    ctx.write_file(
        "stroll.toml",
        "[gemini]\napi_url = \"http://127.0.0.1:9\"\ntimeout_secs = 2\nmax_retries = 1\n",
    );

    ctx.cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("generation stage"))
        .stderr(predicate::str::contains("GEMINI_API_KEY").not());

    assert!(ctx.files_in(&ctx.outputs_dir()).is_empty());
}
