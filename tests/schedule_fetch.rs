//! Schedule fetcher integration tests against a stub HTTP server.

use std::time::Duration;

use quartermap::error::ScheduleError;
use quartermap::schedule::{ScheduleClient, ScheduleRequest};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AS_OF: i32 = 2024;

fn stub_client(server: &MockServer, timeout_ms: u64) -> ScheduleClient {
    // The schedule root carries a trailing slash; mirror that here.
    ScheduleClient::with_root(&format!("{}/", server.uri()), timeout_ms)
}

#[tokio::test]
async fn test_fetch_returns_body_unmodified() {
    let server = MockServer::start().await;
    let body = "<html><pre>CSE 143 Computer Programming II\ncse143</pre></html>";
    Mock::given(method("GET"))
        .and(path("/WIN2023/cse.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let client = stub_client(&server, 5_000);
    let request = ScheduleRequest::new("cse", "WIN", "2023", AS_OF).unwrap();
    let document = client.fetch(&request).await.unwrap();

    assert_eq!(document, body);
}

#[tokio::test]
async fn test_fetch_lowercases_department_in_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/AUT2020/math.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let client = stub_client(&server, 5_000);
    // Upper-case inputs still hit the lower-case document path.
    let request = ScheduleRequest::new("MATH", "aut", "2020", AS_OF).unwrap();
    assert_eq!(client.fetch(&request).await.unwrap(), "ok");
}

#[tokio::test]
async fn test_fetch_404_is_page_not_found_with_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/WIN2023/cse.html"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = stub_client(&server, 5_000);
    let request = ScheduleRequest::new("cse", "win", "2023", AS_OF).unwrap();

    match client.fetch(&request).await {
        Err(ScheduleError::PageNotFound { url }) => {
            assert!(url.ends_with("/WIN2023/cse.html"), "{url}");
        }
        other => panic!("expected PageNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_500_is_page_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/SPR2022/cse.html"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = stub_client(&server, 5_000);
    let request = ScheduleRequest::new("cse", "SPR", "2022", AS_OF).unwrap();
    assert!(matches!(
        client.fetch(&request).await,
        Err(ScheduleError::PageNotFound { .. })
    ));
}

#[tokio::test]
async fn test_fetch_connection_refused_is_unreachable() {
    // Nothing listens on port 1.
    let client = ScheduleClient::with_root("http://127.0.0.1:1/", 2_000);
    let request = ScheduleRequest::new("cse", "WIN", "2023", AS_OF).unwrap();

    match client.fetch(&request).await {
        Err(ScheduleError::Unreachable { url, .. }) => {
            assert!(url.ends_with("/WIN2023/cse.html"), "{url}");
        }
        other => panic!("expected Unreachable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_timeout_is_unreachable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/WIN2023/cse.html"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let client = stub_client(&server, 50);
    let request = ScheduleRequest::new("cse", "WIN", "2023", AS_OF).unwrap();
    assert!(matches!(
        client.fetch(&request).await,
        Err(ScheduleError::Unreachable { .. })
    ));
}
