use crate::harness::{EMPTY_MANIFEST, TestContext};
use predicates::prelude::*;

#[test]
fn existing_test_file_aborts_before_anything_is_written() {
    let ctx = TestContext::with_service();
    ctx.write("__tests__/query-listPosts.test.js", "// keep\n");

    ctx.cli()
        .args(["create", "function", "--name", "listPosts", "--type", "query"])
        .args(["--unit-name", "Post"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("__tests__/query-listPosts.test.js already exists"));

    assert_eq!(ctx.read("__tests__/query-listPosts.test.js"), "// keep\n");
    assert_eq!(ctx.read("resolvers.yml"), EMPTY_MANIFEST);
    assert!(!ctx.exists("query/listPosts.js"));
    assert!(!ctx.exists("mapping-templates"));
    assert!(!ctx.exists("schema"));
}

#[test]
fn resolver_can_be_created_once_the_conflict_is_resolved() {
    let ctx = TestContext::with_service();
    ctx.write("__tests__/query-listPosts.test.js", "// keep\n");

    ctx.cli()
        .args(["create", "function", "--name", "listPosts", "--type", "query"])
        .args(["--unit-name", "Post"])
        .assert()
        .failure();

    std::fs::remove_file(ctx.service_dir().join("__tests__/query-listPosts.test.js")).unwrap();

    ctx.cli()
        .args(["create", "function", "--name", "listPosts", "--type", "query"])
        .args(["--unit-name", "Post"])
        .assert()
        .success();

    assert!(ctx.exists("query/listPosts.js"));
    assert!(ctx.read("__tests__/query-listPosts.test.js").contains("describe('listPosts'"));
}

#[test]
fn escaping_test_path_aborts_before_anything_is_written() {
    let ctx = TestContext::with_service();

    ctx.cli()
        .args(["create", "function", "--name", "listPosts", "--type", "query"])
        .args(["--unit-name", "Post", "--path", "../outside"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("escapes the service root"));

    assert_eq!(ctx.read("resolvers.yml"), EMPTY_MANIFEST);
    assert!(!ctx.exists("query"));
    assert!(!ctx.scratch().join("outside").exists());
}
