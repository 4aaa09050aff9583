use axum::http::StatusCode;
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::common::{self, TestClient, TestResponse};

/// Runs `requests` against an app serving `/metrics` from a local recorder and
/// returns the final `/metrics` response.
fn scrape_after(requests: &[&str]) -> TestResponse {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();

    metrics::with_local_recorder(&recorder, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to build runtime")
            .block_on(async {
                let client = TestClient::new(common::seeded_app_with_metrics(handle));

                for uri in requests {
                    client.get(uri).await;
                }

                client.get("/metrics").await
            })
    })
}

#[test]
fn test_metrics_count_user_lookups() {
    let response = scrape_after(&["/users/1", "/users/99"]);

    response.assert_status(StatusCode::OK);
    let body = response.text();
    assert!(
        body.contains(r#"user_lookups_total{outcome="found"} 1"#),
        "{body}"
    );
    assert!(
        body.contains(r#"user_lookups_total{outcome="not_found"} 1"#),
        "{body}"
    );
}

#[test]
fn test_metrics_count_requests_by_route() {
    let response = scrape_after(&["/users", "/users/1", "/users/2", "/nowhere-1", "/nowhere-2"]);

    response.assert_status(StatusCode::OK);
    let body = response.text();
    let totals: Vec<&str> = body
        .lines()
        .filter(|line| line.starts_with("http_requests_total{"))
        .collect();

    assert!(
        totals.iter().any(|line| line.contains(r#"path="/users/{id}""#)
            && line.contains(r#"status="200""#)
            && line.ends_with(" 2")),
        "{totals:?}"
    );
    assert!(
        totals.iter().any(|line| line.contains(r#"path="/users""#) && line.ends_with(" 1")),
        "{totals:?}"
    );
    assert!(
        totals.iter().any(|line| line.contains(r#"path="unmatched""#)
            && line.contains(r#"status="404""#)
            && line.ends_with(" 2")),
        "{totals:?}"
    );
    assert!(!body.contains("nowhere-"), "{body}");
}

#[tokio::test]
async fn test_metrics_route_absent_without_handle() {
    let client = TestClient::new(common::seeded_app());

    client
        .get("/metrics")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
