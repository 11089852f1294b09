use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn invoke_requires_serverless_config() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("SLS_RESOLVER_TEST_RUNNER", "true")
        .args(["invoke", "test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Service configuration not found"));
}
