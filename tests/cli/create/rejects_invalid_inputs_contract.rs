use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn unknown_type_is_rejected() {
    let ctx = TestContext::with_service();

    ctx.cli()
        .args(["create", "function", "--name", "onPost", "--type", "subscription"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid resolver type 'subscription'"));
}

#[test]
fn path_like_names_are_rejected() {
    let ctx = TestContext::with_service();

    ctx.cli()
        .args(["create", "function", "--name", "../escape", "--type", "query"])
        .args(["--unit-name", "Post"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a plain field name"));

    assert_eq!(ctx.read("resolvers.yml"), crate::harness::EMPTY_MANIFEST);
}

#[test]
fn missing_inputs_without_terminal_fail_instead_of_prompting() {
    let ctx = TestContext::with_service();

    ctx.cli()
        .args(["create", "appsync", "--type", "query"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires an interactive terminal"));
}

#[test]
fn schema_resolvers_require_a_unit_name() {
    let ctx = TestContext::with_service();

    ctx.cli()
        .args(["create", "function", "--name", "listPosts", "--type", "query"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unit name (singular GraphQL type"));

    assert_eq!(ctx.read("resolvers.yml"), crate::harness::EMPTY_MANIFEST);
    assert!(!ctx.exists("schema"));
}
