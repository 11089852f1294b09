use crate::harness::{EMPTY_MANIFEST, TestContext};
use predicates::prelude::*;

#[test]
fn existing_handler_aborts_before_manifest_is_written() {
    let ctx = TestContext::with_service();
    ctx.write("query/getPost.js", "// hand written\n");

    ctx.cli()
        .args(["create", "function", "--name", "getPost", "--type", "query"])
        .args(["--unit-name", "Post"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists. Cannot create function."));

    assert_eq!(ctx.read("query/getPost.js"), "// hand written\n");
    assert_eq!(ctx.read("resolvers.yml"), EMPTY_MANIFEST);
    assert!(!ctx.exists("mapping-templates"));
}
