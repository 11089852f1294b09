use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn create_requires_resolver_manifest() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["create", "function", "--name", "getPost", "--type", "query"])
        .args(["--unit-name", "Post"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Resolver manifest not found"));

    assert!(!ctx.exists("query"));
}
