use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn create_function_writes_artifacts_and_registers_resolver() {
    let ctx = TestContext::with_service();

    ctx.cli()
        .args(["create", "function", "--name", "createPost", "--type", "mutation"])
        .args(["--unit-name", "Post"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Created test file __tests__/mutation-createPost.test.js"));

    assert!(ctx.exists("mutation/createPost.js"));
    assert!(ctx.exists("mapping-templates/Mutation-createPost-request.vtl"));

    let schema = ctx.read("schema/mutation-createPost.graphql");
    assert!(schema.contains("input PostInput"));
    assert!(schema.contains("createPost(input: PostInput!): Post"));

    let manifest = ctx.read("resolvers.yml");
    assert!(manifest.contains("type: Mutation"));
    assert!(manifest.contains("field: createPost"));
    assert!(manifest.contains("dataSource: Lambda"));
    assert!(manifest.contains("request: Mutation-createPost-request.vtl"));
    assert!(manifest.contains("response: common-response.vtl"));

    let test = ctx.read("__tests__/mutation-createPost.test.js");
    assert!(test.contains("require('../mutation/createPost')"));
}

#[test]
fn service_path_flag_targets_another_directory() {
    let ctx = TestContext::with_service();

    ctx.cli()
        .current_dir(ctx.scratch())
        .arg("--service-path")
        .arg(ctx.service_dir())
        .args(["create", "function", "-n", "listPosts", "-t", "query", "-d", "PostsTable"])
        .args(["--unit-name", "Post"])
        .assert()
        .success();

    assert!(ctx.exists("query/listPosts.js"));
    assert!(ctx.read("resolvers.yml").contains("dataSource: PostsTable"));
}
