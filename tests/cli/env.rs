//! Tests for `ccienv env` against a mock CircleCI API.

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::*;

async fn mount_listing(server: &MockServer, vars: &[(&str, &str)], next_page_token: Option<&str>) {
    Mock::given(method("GET"))
        .and(path(ENVVAR_PATH))
        .and(header("Circle-Token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(vars, next_page_token)))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_create(server: &MockServer, name: &str, value: &str) {
    Mock::given(method("POST"))
        .and(path(ENVVAR_PATH))
        .and(body_json(variable(name, value)))
        .respond_with(ResponseTemplate::new(201).set_body_json(variable(name, "xxxx")))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_delete(server: &MockServer, name: &str, status: u16) {
    let message = if status == 200 {
        "Environment variable deleted."
    } else {
        "server error"
    };
    Mock::given(method("DELETE"))
        .and(path(format!("{}/{}", ENVVAR_PATH, name)))
        .respond_with(
            ResponseTemplate::new(status).set_body_json(serde_json::json!({ "message": message })),
        )
        .expect(1)
        .mount(server)
        .await;
}

// --- ls ---

#[tokio::test(flavor = "multi_thread")]
async fn test_ls_prints_aligned_rows() {
    let server = MockServer::start().await;
    mount_listing(&server, REMOTE_VARS, None).await;
    let t = Test::with_server(&server);

    let output = run(t.env_cmd(&["ls"])).await;

    assert_success(&output);
    assert_stdout_contains(&output, "FOO   xxxx_foo");
    assert_stdout_contains(&output, "TEST0 xxxxtest");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ls_json() {
    let server = MockServer::start().await;
    mount_listing(&server, REMOTE_VARS, None).await;
    let t = Test::with_server(&server);

    let output = run(t.env_cmd(&["ls", "--json"])).await;

    assert_success(&output);
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 3);
    assert_eq!(parsed[0]["name"], "FOO");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ls_warns_when_more_pages_exist() {
    let server = MockServer::start().await;
    mount_listing(&server, REMOTE_VARS, Some("page-2")).await;
    let t = Test::with_server(&server);

    let output = run(t.env_cmd(&["ls"])).await;

    assert_success(&output);
    assert_stderr_contains(&output, "not all variables are listed");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ls_empty_project() {
    let server = MockServer::start().await;
    mount_listing(&server, &[], None).await;
    let t = Test::with_server(&server);

    let output = run(t.env_cmd(&["ls"])).await;

    assert_success(&output);
    assert_stdout_contains(&output, "no variables");
}

// --- add ---

#[tokio::test(flavor = "multi_thread")]
async fn test_add_new_variable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/test1", ENVVAR_PATH)))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Environment variable not found."
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_create(&server, "test1", "xxxxEnv1").await;
    let t = Test::with_server(&server);

    let output = run(t.env_cmd(&["add", "test1", "xxxxEnv1"])).await;

    assert_success(&output);
    assert_eq!(reported(&output, "Created"), vec!["test1"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_existing_with_yes_overwrites() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/test2", ENVVAR_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_json(variable("test2", "xxxxold2")))
        .expect(1)
        .mount(&server)
        .await;
    mount_create(&server, "test2", "xxxxEnv2").await;
    let t = Test::with_server(&server);

    let output = run(t.env_cmd(&["add", "test2", "xxxxEnv2", "--yes"])).await;

    assert_success(&output);
    assert_stdout_contains(&output, "test2 xxxxold2");
    assert_eq!(reported(&output, "Created"), vec!["test2"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_existing_without_terminal_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/test2", ENVVAR_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_json(variable("test2", "xxxxold2")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let t = Test::with_server(&server);

    let output = run(t.env_cmd(&["add", "test2", "xxxxEnv2"])).await;

    assert_failure(&output);
    assert_stderr_contains(&output, "--yes");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_value_from_stdin() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/TOKEN", ENVVAR_PATH)))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    mount_create(&server, "TOKEN", "from-stdin").await;
    let t = Test::with_server(&server);

    let mut cmd = t.env_cmd(&["add", "TOKEN"]);
    cmd.write_stdin("from-stdin\n");
    let output = run(cmd).await;

    assert_success(&output);
    assert_eq!(reported(&output, "Created"), vec!["TOKEN"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_empty_stdin_is_rejected() {
    let server = MockServer::start().await;
    let t = Test::with_server(&server);

    for input in ["", "\n"] {
        let mut cmd = t.env_cmd(&["add", "TOKEN"]);
        cmd.write_stdin(input);
        let output = run(cmd).await;

        assert_failure(&output);
        assert_stderr_contains(&output, "Value for TOKEN: no value provided");
    }
    assert_no_requests(&server).await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_create_failure_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({"message": "Invalid name"})),
        )
        .mount(&server)
        .await;
    let t = Test::with_server(&server);

    let output = run(t.env_cmd(&["add", "KEY", "v"])).await;

    assert_failure(&output);
    assert_stderr_contains(&output, "create variable: 400: Invalid name");
}

// --- import ---

#[tokio::test(flavor = "multi_thread")]
async fn test_import_json_confirmed_writes_all() {
    let server = MockServer::start().await;
    mount_listing(&server, &[("A", "xxxxold")], None).await;
    mount_create(&server, "A", "new").await;
    mount_create(&server, "B", "v").await;
    let t = Test::with_server(&server);
    let file = t.dir.path().join("vars.json");
    std::fs::write(
        &file,
        r#"[{"name":"A","value":"new"},{"name":"B","value":"v"}]"#,
    )
    .unwrap();

    let output = run(t.env_cmd(&[
        "import",
        file.to_str().unwrap(),
        "--format",
        "json",
        "--yes",
    ]))
    .await;

    assert_success(&output);
    assert_stdout_contains(&output, "These variables already exist.");
    assert_stdout_contains(&output, "A xxxxold");
    assert_eq!(reported(&output, "Created"), vec!["A", "B"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_import_dotenv_from_stdin() {
    let server = MockServer::start().await;
    mount_listing(&server, REMOTE_VARS, None).await;
    mount_create(&server, "KEY1", "value1").await;
    mount_create(&server, "KEY2", "value two").await;
    let t = Test::with_server(&server);

    let mut cmd = t.env_cmd(&["import"]);
    cmd.write_stdin(SAMPLE_ENV);
    let output = run(cmd).await;

    assert_success(&output);
    let mut created = reported(&output, "Created");
    created.sort();
    assert_eq!(created, vec!["KEY1", "KEY2"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_import_dotenv_keeps_dollar_signs() {
    let server = MockServer::start().await;
    mount_listing(&server, &[], None).await;
    mount_create(&server, "PASS", "p@$word1").await;
    mount_create(&server, "PIN", "ab$$cd").await;
    let t = Test::with_server(&server);

    let mut cmd = t.env_cmd(&["import"]);
    cmd.write_stdin("PASS=\"p@$word1\"\nPIN=ab$$cd\n");
    let output = run(cmd).await;

    assert_success(&output);
    assert_eq!(reported(&output, "Created"), vec!["PASS", "PIN"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_import_unsupported_format_makes_no_calls() {
    let server = MockServer::start().await;
    let t = Test::with_server(&server);

    let mut cmd = t.env_cmd(&["import", "--format", "yaml"]);
    cmd.write_stdin("A=1\n");
    let output = run(cmd).await;

    assert_failure(&output);
    assert_stderr_contains(&output, "unsupported format: yaml");
    assert_no_requests(&server).await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_import_malformed_dotenv_makes_no_calls() {
    let server = MockServer::start().await;
    let t = Test::with_server(&server);

    let mut cmd = t.env_cmd(&["import"]);
    cmd.write_stdin("GOOD=1\nnot a valid line\n");
    let output = run(cmd).await;

    assert_failure(&output);
    assert_stderr_contains(&output, "invalid dotenv input");
    assert_no_requests(&server).await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_import_continues_after_failed_write() {
    let server = MockServer::start().await;
    mount_listing(&server, &[], None).await;
    Mock::given(method("POST"))
        .and(body_json(variable("BAD", "1")))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({"message": "boom"})))
        .expect(1)
        .mount(&server)
        .await;
    mount_create(&server, "GOOD", "2").await;
    let t = Test::with_server(&server);

    let mut cmd = t.env_cmd(&["import", "--format", "json"]);
    cmd.write_stdin(r#"[{"name":"BAD","value":"1"},{"name":"GOOD","value":"2"}]"#);
    let output = run(cmd).await;

    assert_success(&output);
    assert_eq!(reported(&output, "Created"), vec!["GOOD"]);
    assert_stderr_contains(&output, "BAD: create variable: 500: boom");
    assert_eq!(stderr(&output).matches("boom").count(), 1);
    assert_stdout_contains(&output, "1 of 2 variables failed");
}

// --- rm ---

#[tokio::test(flavor = "multi_thread")]
async fn test_rm_deletes_found_and_reports_missing() {
    let server = MockServer::start().await;
    mount_listing(&server, REMOTE_VARS, None).await;
    mount_delete(&server, "BAR", 200).await;
    let t = Test::with_server(&server);

    let output = run(t.env_cmd(&["rm", "NOPE", "BAR", "--yes"])).await;

    assert_success(&output);
    assert_stdout_contains(&output, "These variables are not found.");
    assert_stdout_contains(&output, "NOPE");
    assert_eq!(reported(&output, "Deleted"), vec!["BAR"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rm_nothing_found() {
    let server = MockServer::start().await;
    mount_listing(&server, REMOTE_VARS, None).await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let t = Test::with_server(&server);

    let output = run(t.env_cmd(&["rm", "NOPE"])).await;

    assert_success(&output);
    assert_stdout_contains(&output, "nothing to delete");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rm_failure_does_not_stop_others() {
    let server = MockServer::start().await;
    mount_listing(&server, REMOTE_VARS, None).await;
    mount_delete(&server, "FOO", 500).await;
    mount_delete(&server, "TEST0", 200).await;
    let t = Test::with_server(&server);

    let output = run(t.env_cmd(&["rm", "FOO", "TEST0", "--yes"])).await;

    assert_success(&output);
    assert_eq!(reported(&output, "Deleted"), vec!["TEST0"]);
    assert_stderr_contains(&output, "FOO: delete variable: 500: server error");
    assert_eq!(stderr(&output).matches("server error").count(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rm_without_names_is_rejected_before_network() {
    let server = MockServer::start().await;
    let t = Test::with_server(&server);

    let output = run(t.env_cmd(&["rm"])).await;

    assert_failure(&output);
    assert_stderr_contains(&output, "no variables specified");
    assert_no_requests(&server).await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_listing_failure_aborts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ENVVAR_PATH))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({"message": "Invalid token provided."})),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let t = Test::with_server(&server);

    let output = run(t.env_cmd(&["rm", "FOO", "--yes"])).await;

    assert_failure(&output);
    assert_stderr_contains(&output, "list variables: 401: Invalid token provided.");
    assert_stderr_contains(&output, "check the API token");
}
