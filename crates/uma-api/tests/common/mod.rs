use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use tower::ServiceExt;
use uma_api::{ApiConfig, ApiState, config::Environment, router};
use uma_store::UserRepository;

/// Full application over the seeded repository
pub fn seeded_app() -> Router {
    app_with(UserRepository::seeded(), Environment::Development)
}

pub fn app_with(users: UserRepository, environment: Environment) -> Router {
    build_app(users, environment, None)
}

/// Seeded application that also serves `/metrics` from `handle`
pub fn seeded_app_with_metrics(handle: PrometheusHandle) -> Router {
    build_app(UserRepository::seeded(), Environment::Development, Some(handle))
}

fn build_app(
    users: UserRepository,
    environment: Environment,
    metrics_handle: Option<PrometheusHandle>,
) -> Router {
    let config = ApiConfig {
        env: environment,
        ..ApiConfig::default()
    };
    let state = ApiState::new(&config, users);

    router::app(state, &config, metrics_handle)
}

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Send a request and get the response
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            body: body_bytes.to_vec(),
            headers,
        }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }
}

/// Test response wrapper
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub headers: axum::http::HeaderMap,
}

impl TestResponse {
    /// Get response body as string
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    /// Parse response body as JSON
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Assert status code
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }
}
