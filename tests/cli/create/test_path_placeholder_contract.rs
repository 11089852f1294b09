use crate::harness::TestContext;

#[test]
fn function_placeholder_places_test_beside_handler() {
    let ctx = TestContext::with_service();

    ctx.cli()
        .args(["create", "function", "--name", "listPosts", "--type", "query"])
        .args(["--unit-name", "Post"])
        .args(["--path", "{function}/__tests__"])
        .assert()
        .success();

    let test = ctx.read("query/__tests__/query-listPosts.test.js");
    assert!(test.contains("require('../listPosts')"));
}

#[test]
fn project_template_override_is_rendered() {
    let ctx = TestContext::with_service();
    ctx.write(
        "serverless.yml",
        "service: blog-api\ncustom:\n  serverless-jest-plugin:\n    functionTemplate: templates/handler.js\n",
    );
    ctx.write("templates/handler.js", "// custom handler\n");

    ctx.cli()
        .args(["create", "function", "--name", "getPost", "--type", "query"])
        .args(["--unit-name", "Post"])
        .assert()
        .success();

    assert_eq!(ctx.read("query/getPost.js"), "// custom handler\n");
}
