mod sentiment;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tweetmood_analyzer::Analyzer;
use tweetmood_timeline::TimelineClient;

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};
use crate::pages;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub timeline: Arc<TimelineClient>,
    /// Number of recent posts fetched per search.
    pub timeline_count: u32,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    positive_words: usize,
    negative_words: usize,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "upstream_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

pub fn build_app(state: AppState) -> Router {
    let pages = Router::new()
        .route("/", get(pages::index))
        .route("/search", get(pages::search));

    let api = Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/search", get(sentiment::search_timeline))
        .route("/api/v1/score", post(sentiment::score_text));

    Router::new()
        .merge(pages)
        .merge(api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            positive_words: state.analyzer.positives().len(),
            negative_words: state.analyzer.negatives().len(),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TIMELINE_PATH: &str = "/1.1/statuses/user_timeline.json";

    fn test_state(timeline_base_url: &str) -> AppState {
        let analyzer = Analyzer::from_sources(
            "great\nwonderful\nlove\n",
            "terrible\nawful\nhate\n",
        )
        .expect("analyzer");
        let timeline =
            TimelineClient::with_base_url("test-token", 5, timeline_base_url).expect("client");
        AppState {
            analyzer: Arc::new(analyzer),
            timeline: Arc::new(timeline),
            timeline_count: 100,
        }
    }

    /// State whose timeline client must never be called.
    fn offline_state() -> AppState {
        test_state("http://127.0.0.1:9")
    }

    async fn mock_timeline(server: &MockServer, screen_name: &str, texts: &[&str]) {
        let statuses: Vec<serde_json::Value> = texts
            .iter()
            .enumerate()
            .map(|(i, text)| serde_json::json!({ "id_str": i.to_string(), "full_text": text }))
            .collect();
        Mock::given(method("GET"))
            .and(path(TIMELINE_PATH))
            .and(query_param("screen_name", screen_name))
            .and(query_param("count", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(statuses))
            .mount(server)
            .await;
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response")
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        serde_json::from_slice(&body).expect("json parse")
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        String::from_utf8(body.to_vec()).expect("utf-8 body")
    }

    #[test]
    fn api_error_codes_map_to_statuses() {
        let cases = [
            ("validation_error", StatusCode::BAD_REQUEST),
            ("not_found", StatusCode::NOT_FOUND),
            ("upstream_error", StatusCode::BAD_GATEWAY),
            ("something_else", StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (code, expected) in cases {
            let response = ApiError::new("req-1", code, "msg").into_response();
            assert_eq!(response.status(), expected, "code {code}");
        }
    }

    #[tokio::test]
    async fn index_renders_search_form() {
        let response = get(build_app(offline_state()), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(r#"<form action="/search" method="get">"#));
    }

    #[tokio::test]
    async fn search_without_screen_name_redirects_to_index() {
        for uri in ["/search", "/search?screen_name=", "/search?screen_name=bad%20name"] {
            let response = get(build_app(offline_state()), uri).await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER, "uri {uri}");
            assert_eq!(response.headers()[header::LOCATION], "/");
        }
    }

    #[tokio::test]
    async fn search_unknown_user_redirects_to_index() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TIMELINE_PATH))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let response = get(build_app(test_state(&server.uri())), "/search?screen_name=ghost").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn search_renders_chart_for_timeline() {
        let server = MockServer::start().await;
        mock_timeline(
            &server,
            "cs50",
            &["Great day!", "awful traffic", "lunch", "love it"],
        )
        .await;

        let response = get(
            build_app(test_state(&server.uri())),
            "/search?screen_name=%40cs50",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<h2>@cs50</h2>"));
        assert!(html.contains("<svg"));
        assert!(html.contains("<th>positive</th><td>2</td>"));
        assert!(html.contains("<th>negative</th><td>1</td>"));
        assert!(html.contains("<th>neutral</th><td>1</td>"));
    }

    #[tokio::test]
    async fn search_upstream_failure_is_bad_gateway_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TIMELINE_PATH))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let response = get(build_app(test_state(&server.uri())), "/search?screen_name=cs50").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn api_search_returns_tally() {
        let server = MockServer::start().await;
        mock_timeline(
            &server,
            "cs50",
            &["wonderful news", "terrible, terrible idea", "hate mondays", "ok"],
        )
        .await;

        let response = get(
            build_app(test_state(&server.uri())),
            "/api/v1/search?screen_name=cs50",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["screen_name"], "cs50");
        assert_eq!(json["data"]["positive"], 1);
        assert_eq!(json["data"]["negative"], 2);
        assert_eq!(json["data"]["neutral"], 1);
        assert_eq!(json["data"]["total"], 4);
        assert!(json["meta"]["request_id"].is_string());
    }

    #[tokio::test]
    async fn api_search_empty_timeline_is_all_zero() {
        let server = MockServer::start().await;
        mock_timeline(&server, "quiet", &[]).await;

        let response = get(
            build_app(test_state(&server.uri())),
            "/api/v1/search?screen_name=quiet",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["total"], 0);
    }

    #[tokio::test]
    async fn api_search_requires_screen_name() {
        let response = get(build_app(offline_state()), "/api/v1/search").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "validation_error");
    }

    #[tokio::test]
    async fn api_search_unknown_user_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TIMELINE_PATH))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let response = get(
            build_app(test_state(&server.uri())),
            "/api/v1/search?screen_name=ghost",
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "not_found");
        assert_eq!(json["error"]["message"], "no results for @ghost");
    }

    #[tokio::test]
    async fn api_search_upstream_failure_is_bad_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TIMELINE_PATH))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let response = get(
            build_app(test_state(&server.uri())),
            "/api/v1/search?screen_name=cs50",
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "upstream_error");
    }

    #[tokio::test]
    async fn score_endpoint_scores_text() {
        let response = build_app(offline_state())
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/v1/score")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"text": "GREAT, wonderful... awful!"}"#))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["score"], 1);
        assert_eq!(json["data"]["sentiment"], "positive");
    }

    #[tokio::test]
    async fn health_reports_word_list_sizes() {
        let response = get(build_app(offline_state()), "/api/v1/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["status"], "ok");
        assert_eq!(json["data"]["positive_words"], 3);
        assert_eq!(json["data"]["negative_words"], 3);
    }

    #[tokio::test]
    async fn request_id_is_echoed() {
        let response = build_app(offline_state())
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .header(REQUEST_ID_HEADER, "req-abc-123")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-abc-123");
        let json = body_json(response).await;
        assert_eq!(json["meta"]["request_id"], "req-abc-123");
    }

    #[tokio::test]
    async fn request_id_is_generated_when_absent() {
        let response = get(build_app(offline_state()), "/").await;
        let id = response.headers()[REQUEST_ID_HEADER]
            .to_str()
            .expect("ascii header");
        assert_eq!(id.len(), 36, "expected a UUID, got {id}");
    }
}
