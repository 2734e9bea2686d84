//! Integration tests that run the CLI binary.

use std::process::Output;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn bin() -> std::process::Command {
    // CARGO_BIN_EXE_<name> uses the binary target name; hyphens require concat! for env!()
    let bin = env!(concat!("CARGO_BIN_EXE_text", "-", "analyzer"));
    let mut cmd = std::process::Command::new(bin);
    cmd.env_remove("API_BASE_URL");
    cmd.env_remove("TEXT_ANALYZER_MODEL");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run the binary from a temp dir so dotenv() won't load .env from the project root.
fn run_in_tempdir(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    bin()
        .args(args)
        .envs(envs.iter().copied())
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first")
}

/// Same as `run_in_tempdir`, off the async test thread.
async fn run_blocking(args: Vec<String>, envs: Vec<(String, String)>) -> Output {
    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let envs: Vec<(&str, &str)> = envs
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        run_in_tempdir(&args, &envs)
    })
    .await
    .expect("blocking task")
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = bin()
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("text-analyzer") && stdout.contains("--text"),
        "expected usage text in output"
    );
}

#[test]
fn cli_version_succeeds() {
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("text-analyzer"));
}

#[test]
fn cli_invalid_base_url_exits_with_error() {
    let output = run_in_tempdir(&["config"], &[("API_BASE_URL", "not a url")]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("API_BASE_URL"),
        "expected config error message, got: {}",
        stderr
    );
}

#[test]
fn cli_config_shows_defaults() {
    let output = run_in_tempdir(&["config"], &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("http://localhost:8000"));
    assert!(stdout.contains("qwen2.5-coder:0.5b"));
}

#[test]
fn cli_empty_text_is_rejected_before_any_request() {
    // Port 9 (discard) is never contacted: -m skips the models fetch, validation stops the submit.
    let output = run_in_tempdir(
        &["-m", "x", "-t", "   "],
        &[("API_BASE_URL", "http://127.0.0.1:9")],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Please enter some text to analyze"),
        "got: {}",
        stderr
    );
}

#[test]
fn cli_completions_generate_script() {
    let output = run_in_tempdir(&["completions", "bash"], &[]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("text-analyzer"));
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_text_mode_prints_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/models"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"models": ["a", "b"], "default": "b"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "word_count": 5,
            "character_count": 20,
            "model_used": "b",
            "summary": "Short and sweet.",
            "sentiment": "Positive",
            "success": true
        })))
        .mount(&server)
        .await;

    let output = run_blocking(
        vec!["-t".into(), "I love this product".into()],
        vec![("API_BASE_URL".into(), server.uri())],
    )
    .await;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Short and sweet."));
    assert!(stdout.contains("😊 Positive"));
    assert!(stdout.contains("20"));

    let requests = server.received_requests().await.unwrap_or_default();
    let analyze = requests
        .iter()
        .find(|r| r.url.path() == "/api/analyze")
        .expect("analyze request");
    let body: serde_json::Value = serde_json::from_slice(&analyze.body).expect("json body");
    assert_eq!(body, json!({"text": "I love this product", "model_name": "b"}));
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_text_mode_reports_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "model crashed"})))
        .mount(&server)
        .await;

    let output = run_blocking(
        vec!["-m".into(), "x".into(), "-t".into(), "hello".into()],
        vec![("API_BASE_URL".into(), server.uri())],
    )
    .await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("model crashed"), "got: {}", stderr);
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_models_marks_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/models"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"models": ["a", "b"], "default": "b"})),
        )
        .mount(&server)
        .await;

    let output = run_blocking(
        vec!["models".into()],
        vec![("API_BASE_URL".into(), server.uri())],
    )
    .await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("  a"));
    assert!(stdout.contains("* b"));
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_json_mode_prints_reply_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "word_count": 2.0,
            "summary": "Hi.",
            "sentiment": "neutral"
        })))
        .mount(&server)
        .await;

    let output = run_blocking(
        vec!["-m".into(), "x".into(), "--json".into(), "-t".into(), "hi there".into()],
        vec![("API_BASE_URL".into(), server.uri())],
    )
    .await;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let printed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(printed["summary"], "Hi.");
    assert_eq!(printed["word_count"], 2);
}
