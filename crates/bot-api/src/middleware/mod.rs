//! Middleware stack for the API server
//!
//! Request ID generation, tracing, timeout, CORS and rate limiting.

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request, StatusCode},
    middleware::map_response,
    response::{IntoResponse, Response},
    Router,
};
use bot_common::{AppConfig, AppError, CorsConfig, RateLimitConfig};
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::response::ApiError;
use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request deadline
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Apply the full middleware stack
///
/// Request -> RateLimit -> RequestID -> Trace -> Timeout -> CORS -> Handler.
/// Rate limit rejections are rewritten into the JSON error body.
/// Layers wrap in reverse, so they are added innermost first.
pub fn apply_middleware(
    router: Router<AppState>,
    config: &AppConfig,
) -> Result<Router<AppState>, AppError> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(replenish_interval_ms(&config.rate_limit))
            .burst_size(config.rate_limit.burst.max(1))
            .key_extractor(GlobalKeyExtractor)
            .finish()
            .ok_or_else(|| AppError::Config("invalid rate limit configuration".to_string()))?,
    );

    Ok(router
        // CORS (innermost - applied last to outgoing responses)
        .layer(cors_layer(&config.cors, config.app.env.is_production()))
        // Timeout (returns 503 Service Unavailable on timeout)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            REQUEST_TIMEOUT,
        ))
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Request ID propagation
        .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID generation
        .layer(SetRequestIdLayer::new(
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
        // Rate limiting (outermost - applied first to incoming requests)
        .layer(GovernorLayer {
            config: governor_conf,
        })
        .layer(map_response(rate_limit_response)))
}

/// Replace the limiter's plain-text 429 with the standard error body,
/// keeping its `retry-after` and `x-ratelimit-*` headers
async fn rate_limit_response(response: Response) -> Response {
    if response.status() != StatusCode::TOO_MANY_REQUESTS {
        return response;
    }

    let mut rejected = ApiError::App(AppError::RateLimitExceeded).into_response();
    for (name, value) in response.headers() {
        let name_str = name.as_str();
        if *name == header::RETRY_AFTER || name_str.starts_with("x-ratelimit-") {
            rejected.headers_mut().insert(name.clone(), value.clone());
        }
    }
    rejected
}

/// Milliseconds between two quota refills
fn replenish_interval_ms(config: &RateLimitConfig) -> u64 {
    (1000 / u64::from(config.requests_per_second.max(1))).max(1)
}

/// Create CORS layer from configuration
fn cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([header::HeaderName::from_static(REQUEST_ID_HEADER)]);

    // In production, only allow configured origins
    // In development, allow any origin if no origins are configured
    if is_production || !config.allowed_origins.is_empty() {
        if config.allowed_origins.is_empty() {
            tracing::warn!(
                "CORS: No allowed origins configured in production mode. \
                 Requests from browsers will be blocked."
            );
            base_layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
        } else {
            let origins: Vec<HeaderValue> = config
                .allowed_origins
                .iter()
                .filter_map(|origin| {
                    origin.parse::<HeaderValue>().ok().or_else(|| {
                        tracing::warn!("Invalid CORS origin: {}", origin);
                        None
                    })
                })
                .collect();

            tracing::info!("CORS: Allowing {} configured origins", origins.len());
            base_layer.allow_origin(AllowOrigin::list(origins))
        }
    } else {
        tracing::warn!(
            "CORS: Allowing any origin (development mode). \
             Configure CORS_ALLOWED_ORIGINS for production."
        );
        base_layer.allow_origin(Any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rate_limit_rejection_is_json() {
        let limited = Response::builder()
            .status(StatusCode::TOO_MANY_REQUESTS)
            .header(header::RETRY_AFTER, "1")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("Too Many Requests! Wait for 1s"))
            .unwrap();

        let response = rate_limit_response(limited).await;
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[header::RETRY_AFTER], "1");
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "RATE_LIMIT_EXCEEDED");
        assert_eq!(body["error"]["message"], "Rate limit exceeded");
    }

    #[tokio::test]
    async fn test_other_responses_pass_through() {
        let ok = Response::builder()
            .status(StatusCode::OK)
            .body(Body::from("fine"))
            .unwrap();

        let response = rate_limit_response(ok).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_replenish_interval() {
        let config = RateLimitConfig {
            requests_per_second: 10,
            burst: 50,
        };
        assert_eq!(replenish_interval_ms(&config), 100);
    }

    #[test]
    fn test_replenish_interval_tolerates_extremes() {
        let zero = RateLimitConfig {
            requests_per_second: 0,
            burst: 0,
        };
        assert_eq!(replenish_interval_ms(&zero), 1000);

        let fast = RateLimitConfig {
            requests_per_second: 5000,
            burst: 1,
        };
        assert_eq!(replenish_interval_ms(&fast), 1);
    }
}
