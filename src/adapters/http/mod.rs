//! HTTP adapters - REST API implementations.
//!
//! `build_app` assembles the chat router with the cross-cutting layers
//! the server runs behind.

pub mod chat;

pub use chat::{chat_router, ChatAppState};

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

/// Builds the full application router.
///
/// Layers, outermost first: request tracing (when enabled), CORS, and a
/// whole-request timeout from `server.request_timeout_secs`.
pub fn build_app(state: ChatAppState, config: &AppConfig) -> Router {
    let app = chat_router()
        .with_state(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server.cors_origins_list()));

    if config.features.enable_tracing {
        app.layer(TraceLayer::new_for_http())
    } else {
        app
    }
}

/// Permissive when no origins are configured, otherwise an allow-list.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::UnconfiguredSource;
    use crate::adapters::memory::{InMemoryConversationRepository, InMemoryPreferenceStore};
    use crate::application::ChatOrchestrator;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> ChatAppState {
        let orchestrator = ChatOrchestrator::new(
            Arc::new(UnconfiguredSource::new("primary")),
            Arc::new(UnconfiguredSource::new("secondary")),
        );
        ChatAppState::new(
            Arc::new(orchestrator),
            Arc::new(InMemoryConversationRepository::new()),
            Arc::new(InMemoryPreferenceStore::new()),
        )
    }

    fn config_with_origins(origins: Option<&str>) -> AppConfig {
        let mut config = AppConfig::default();
        config.server.cors_origins = origins.map(str::to_string);
        config
    }

    #[tokio::test]
    async fn app_serves_health() {
        let app = build_app(test_state(), &AppConfig::default());

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn configured_origin_is_allowed() {
        let config = config_with_origins(Some("http://localhost:3000, https://constructbot.app"));
        let app = build_app(test_state(), &config);

        let response = app
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, "https://constructbot.app")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("https://constructbot.app"))
        );
    }

    #[tokio::test]
    async fn unknown_origin_gets_no_cors_header() {
        let config = config_with_origins(Some("http://localhost:3000"));
        let app = build_app(test_state(), &config);

        let response = app
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, "https://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[test]
    fn unparseable_origins_are_skipped() {
        let _layer = cors_layer(&["http://ok.example".to_string(), "bad\norigin".to_string()]);
    }
}
