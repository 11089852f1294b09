use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn create_rejects_duplicate_field() {
    let ctx = TestContext::with_service();

    ctx.cli()
        .args(["create", "function", "--name", "getPost", "--type", "query"])
        .args(["--unit-name", "Post"])
        .assert()
        .success();
    let manifest = ctx.read("resolvers.yml");

    ctx.cli()
        .args(["create", "function", "--name", "getPost", "--type", "mutation"])
        .args(["--unit-name", "Post"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Resolver \"getPost\" already exists"));

    assert_eq!(ctx.read("resolvers.yml"), manifest);
    assert!(!ctx.exists("mutation/getPost.js"));
}
