use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn passing_runner_reports_success() {
    let ctx = TestContext::with_service();

    ctx.cli()
        .env("SLS_RESOLVER_TEST_RUNNER", "true")
        .args(["invoke", "test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Tests passed"));
}

#[cfg(unix)]
#[test]
fn runner_receives_config_markers_and_function_environment() {
    let ctx = TestContext::with_service();
    let capture = ctx.scratch().join("capture.txt");
    let runner = ctx.script(
        "runner.sh",
        &format!(
            r#"{{
  printf '%s\n' "NODE_ENV=$NODE_ENV"
  printf '%s\n' "ROOT=$SERVERLESS_TEST_ROOT"
  printf '%s\n' "POSTS_TABLE=$POSTS_TABLE"
  printf '%s\n' "STAGE=$STAGE"
  for arg in "$@"; do printf '%s\n' "ARG=$arg"; done
}} > "{}""#,
            capture.display()
        ),
    );

    ctx.cli()
        .env("SLS_RESOLVER_TEST_RUNNER", &runner)
        .args(["invoke", "test", "--function", "query-listPosts", "--reporter", "default"])
        .args(["--reporter-options", "verbose=true"])
        .assert()
        .success();

    let captured = fs::read_to_string(capture).unwrap();
    assert!(captured.contains("NODE_ENV=test"), "{captured}");
    let root = ctx.service_dir().canonicalize().unwrap();
    assert!(captured.contains(&format!("ROOT={}", root.display())), "{captured}");
    assert!(captured.contains("POSTS_TABLE=posts"), "{captured}");
    assert!(captured.contains("STAGE=test"), "{captured}");
    assert!(captured.contains("ARG=--config"), "{captured}");
    assert!(captured.contains(r#""testRegex":"query-listPosts\\.test\\.js$""#), "{captured}");
    assert!(captured.contains(r#""testEnvironment":"node""#), "{captured}");
    assert!(captured.contains(r#""reporters":[["default",{"verbose":"true"}]]"#), "{captured}");
    assert!(captured.contains(r#""verbose":true"#), "{captured}");
}
