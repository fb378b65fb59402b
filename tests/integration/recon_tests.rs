//! Integration tests for the reconnaissance pipeline
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! fetch → parse → probe cycle end-to-end.

use robots_recon::config::{Config, ProbeConfig};
use robots_recon::output::OutputError;
use robots_recon::{run_recon, ReconError, ReconOutcome, TargetSite};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_config(timeout_secs: u64) -> Config {
    Config {
        probe: ProbeConfig {
            timeout_secs,
            ..ProbeConfig::default()
        },
    }
}

async fn mount_robots(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

fn output_in(dir: &TempDir) -> PathBuf {
    dir.path().join("results.txt")
}

fn never_asked() -> io::Result<Option<PathBuf>> {
    panic!("output location should not be requested")
}

#[tokio::test]
async fn test_robots_not_found_ends_run_without_artifact() {
    let server = MockServer::start().await;
    mount_robots(&server, 404, "").await;

    let dir = TempDir::new().unwrap();
    let output = output_in(&dir);
    let target = TargetSite::parse(&server.uri()).unwrap();

    let outcome = run_recon(&create_test_config(5), &target, false, never_asked)
        .await
        .expect("run should end cleanly");

    assert_eq!(outcome, ReconOutcome::RobotsUnavailable);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_robots_unreachable_ends_run() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let target = TargetSite::parse(&format!("http://127.0.0.1:{}", port)).unwrap();

    let outcome = run_recon(&create_test_config(5), &target, false, never_asked)
        .await
        .expect("run should end cleanly");

    assert_eq!(outcome, ReconOutcome::RobotsUnavailable);
}

#[tokio::test]
async fn test_no_disallowed_paths() {
    let server = MockServer::start().await;
    mount_robots(&server, 200, "User-agent: *\nAllow: /\nDisallow:\n").await;

    let target = TargetSite::parse(&server.uri()).unwrap();

    let outcome = run_recon(&create_test_config(5), &target, false, never_asked)
        .await
        .unwrap();

    assert_eq!(outcome, ReconOutcome::NoDisallowedPaths);
}

#[tokio::test]
async fn test_dry_run_lists_paths_without_probing() {
    let server = MockServer::start().await;
    mount_robots(&server, 200, "Disallow: /admin\nDisallow:\nDISALLOW: /secret \n").await;

    // Any probe would hit this and fail the expectation
    Mock::given(method("GET"))
        .and(path("/admin"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let target = TargetSite::parse(&server.uri()).unwrap();

    let outcome = run_recon(&create_test_config(5), &target, true, never_asked)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        ReconOutcome::Listed(vec!["/admin".to_string(), "/secret".to_string()])
    );
}

#[tokio::test]
async fn test_missing_output_name_aborts() {
    let server = MockServer::start().await;
    mount_robots(&server, 200, "Disallow: /admin\n").await;

    let target = TargetSite::parse(&server.uri()).unwrap();

    let outcome = run_recon(&create_test_config(5), &target, false, || Ok(None))
        .await
        .unwrap();

    assert_eq!(outcome, ReconOutcome::Aborted);
}

#[tokio::test]
async fn test_failed_path_does_not_block_later_paths() {
    let server = MockServer::start().await;
    mount_robots(&server, 200, "User-agent: *\nDisallow: /slow\nDisallow: /open\n").await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("too late")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/open"))
        .respond_with(ResponseTemplate::new(200).set_body_string("welcome\nto the open page"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = output_in(&dir);
    let chosen = output.clone();
    let target = TargetSite::parse(&server.uri()).unwrap();

    let outcome = run_recon(&create_test_config(1), &target, false, move || Ok(Some(chosen)))
        .await
        .unwrap();

    match outcome {
        ReconOutcome::Completed { output: written, summary } => {
            assert_eq!(written, output);
            assert_eq!(summary.failed, 1);
            assert_eq!(summary.accessible, 1);
        }
        other => panic!("expected completed run, got {:?}", other),
    }

    let report = std::fs::read_to_string(&output).unwrap();
    let base = server.uri();

    let error_prefix = format!("Error fetching {}/slow: ", base);
    let success_block = format!(
        "URL: {}/open\nStatus Code: 200\nContent Preview: welcome to the open page\n\n",
        base
    );

    let error_at = report.find(&error_prefix).expect("error record missing");
    let success_at = report.find(&success_block).expect("success record missing");
    assert!(error_at < success_at, "records out of order:\n{}", report);
    assert!(report.ends_with(&success_block));
}

#[tokio::test]
async fn test_restricted_and_accessible_records() {
    let server = MockServer::start().await;
    mount_robots(&server, 200, "Disallow: /admin\nDisallow: /backup/\n").await;

    Mock::given(method("GET"))
        .and(path("/admin"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let long_body = format!("{}\n{}", "a".repeat(150), "b".repeat(150));
    Mock::given(method("GET"))
        .and(path("/backup/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(long_body))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = output_in(&dir);
    let chosen = output.clone();
    let target = TargetSite::parse(&server.uri()).unwrap();

    run_recon(&create_test_config(5), &target, false, move || Ok(Some(chosen)))
        .await
        .unwrap();

    let report = std::fs::read_to_string(&output).unwrap();
    let base = server.uri();
    let preview = format!("{} {}", "a".repeat(150), "b".repeat(49));

    let expected = format!(
        "URL: {base}/admin\nStatus Code: 403\nContent not accessible or restricted.\n\n\
         URL: {base}/backup/\nStatus Code: 200\nContent Preview: {preview}\n\n",
        base = base,
        preview = preview
    );
    assert_eq!(report, expected);
}

#[tokio::test]
async fn test_full_url_path_overrides_target() {
    let target_server = MockServer::start().await;
    let other_server = MockServer::start().await;

    mount_robots(
        &target_server,
        200,
        &format!("Disallow: {}/elsewhere\n", other_server.uri()),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/elsewhere"))
        .respond_with(ResponseTemplate::new(200).set_body_string("other host"))
        .expect(1)
        .mount(&other_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = output_in(&dir);
    let chosen = output.clone();
    let target = TargetSite::parse(&target_server.uri()).unwrap();

    run_recon(&create_test_config(5), &target, false, move || Ok(Some(chosen)))
        .await
        .unwrap();

    let report = std::fs::read_to_string(&output).unwrap();
    assert!(report.starts_with(&format!("URL: {}/elsewhere\n", other_server.uri())));
    assert!(report.contains("Content Preview: other host"));
}

#[tokio::test]
async fn test_existing_report_is_overwritten() {
    let server = MockServer::start().await;
    mount_robots(&server, 200, "Disallow: /gone\n").await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = output_in(&dir);
    std::fs::write(&output, "previous run\n").unwrap();

    let chosen = output.clone();
    let target = TargetSite::parse(&server.uri()).unwrap();

    run_recon(&create_test_config(5), &target, false, move || Ok(Some(chosen)))
        .await
        .unwrap();

    let report = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        report,
        format!(
            "URL: {}/gone\nStatus Code: 404\nContent not accessible or restricted.\n\n",
            server.uri()
        )
    );
}

#[tokio::test]
async fn test_unwritable_report_is_an_error() {
    let server = MockServer::start().await;
    mount_robots(&server, 200, "Disallow: /admin\n").await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("no-such-dir").join("results.txt");
    let target = TargetSite::parse(&server.uri()).unwrap();

    let result = run_recon(&create_test_config(5), &target, false, move || Ok(Some(output))).await;

    assert!(matches!(
        result,
        Err(ReconError::Output(OutputError::Create { .. }))
    ));
}

#[tokio::test]
async fn test_unreadable_output_prompt_is_an_error() {
    let server = MockServer::start().await;
    mount_robots(&server, 200, "Disallow: /admin\n").await;

    let target = TargetSite::parse(&server.uri()).unwrap();

    let result = run_recon(&create_test_config(5), &target, false, || {
        Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"))
    })
    .await;

    assert!(matches!(result, Err(ReconError::Io(_))));
}
