use std::time::Duration;

use pretty_assertions::assert_eq;
use sentinel_core::{ServerIdentity, Snapshot};
use sentinel_engine::{
    FileJobSource, HttpJobSource, HttpSettings, JobSource, TransportError,
};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn quick_settings() -> HttpSettings {
    HttpSettings {
        courtesy_delay: Duration::ZERO,
        ..HttpSettings::default()
    }
}

fn snapshot(pairs: &[(&str, &str)]) -> Snapshot {
    pairs.iter().map(|&(name, color)| (name, color)).collect()
}

async fn source_for(server: &MockServer, settings: HttpSettings) -> HttpJobSource {
    let identity = ServerIdentity::from_url(&server.uri()).unwrap();
    HttpJobSource::new(identity, settings)
}

#[tokio::test]
async fn http_source_parses_the_job_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"jobs": [{"name": "unit-tests", "color": "red_anime"},
                         {"name": "build-docs", "color": "blue"}]}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let source = source_for(&server, quick_settings()).await;
    let snap = source.fetch().await.expect("fetch ok");
    assert_eq!(
        snap,
        snapshot(&[("build-docs", "blue"), ("unit-tests", "red_anime")])
    );
    let running: Vec<&str> = snap.running_job_names().collect();
    assert_eq!(running, vec!["unit-tests"]);
}

#[tokio::test]
async fn http_source_reports_http_status_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/json/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let source = source_for(&server, quick_settings()).await;
    let err = source.fetch().await.unwrap_err();
    assert_eq!(err, TransportError::HttpStatus(503));
}

#[tokio::test]
async fn http_source_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/json/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("{}"),
        )
        .mount(&server)
        .await;

    let settings = HttpSettings {
        request_timeout: Duration::from_millis(50),
        ..quick_settings()
    };
    let source = source_for(&server, settings).await;
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, TransportError::Timeout(_)), "got {err:?}");
}

#[tokio::test]
async fn http_source_rejects_malformed_payloads() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/json/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>not json</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let source = source_for(&server, quick_settings()).await;
    let err = source.fetch().await.unwrap_err();
    assert!(
        matches!(err, TransportError::MalformedPayload(_)),
        "got {err:?}"
    );
}

#[tokio::test]
async fn file_source_reads_a_serialized_snapshot() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("jobs.json");
    std::fs::write(&path, r#"{"build-docs": "blue", "unit-tests": "red"}"#).unwrap();

    let source = FileJobSource::new(&path);
    let snap = source.fetch().await.expect("fetch ok");
    assert_eq!(
        snap,
        snapshot(&[("build-docs", "blue"), ("unit-tests", "red")])
    );
}

#[tokio::test]
async fn file_source_reports_missing_files() {
    let temp = TempDir::new().unwrap();
    let source = FileJobSource::new(temp.path().join("absent.json"));
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, TransportError::Unreadable { .. }), "got {err:?}");
}
