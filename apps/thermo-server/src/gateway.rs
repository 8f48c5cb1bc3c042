//! HTTP host: middleware stack, listener and graceful serve loop.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use http::{HeaderName, StatusCode};
use temperature_converter::{Service, register_routes};
use thermo_bootstrap::ServerConfig;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the complete application router: module routes plus middleware.
pub fn build_router(config: &ServerConfig, service: Arc<Service>) -> Router {
    let router = register_routes(Router::new(), service);
    apply_middleware_stack(router, config.request_timeout())
}

/// Apply all middleware layers to a router.
///
/// Layers are added innermost first. At runtime requests flow through
/// `SetRequestId` -> `PropagateRequestId` -> Trace -> Timeout -> Router.
fn apply_middleware_stack(router: Router, request_timeout: Duration) -> Router {
    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let router = router.layer(TimeoutLayer::with_status_code(
        StatusCode::GATEWAY_TIMEOUT,
        request_timeout,
    ));
    let router = apply_trace_layer(router);

    router
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
}

fn apply_trace_layer(router: Router) -> Router {
    use tower_http::trace::TraceLayer;
    use tracing::field::Empty;

    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                let rid = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");

                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    request_id = %rid,
                    status = Empty,
                    latency_ms = Empty
                )
            })
            .on_response(
                |res: &axum::http::Response<axum::body::Body>,
                 latency: Duration,
                 span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                    tracing::debug!(parent: span, "request completed");
                },
            ),
    )
}

/// Bind the HTTP listener.
pub async fn bind(addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {addr}"))?;
    tracing::info!("HTTP server bound on {}", listener.local_addr()?);
    Ok(listener)
}

/// Serve `router` on `listener` until `cancel` fires, then drain gracefully.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let shutdown = async move {
        cancel.cancelled().await;
        tracing::info!("HTTP server shutting down gracefully (cancellation)");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(&ServerConfig::default(), Arc::new(Service::new()))
    }

    #[tokio::test]
    async fn responses_carry_generated_request_id() {
        let resp = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let rid = resp.headers().get(REQUEST_ID_HEADER).expect("request id");
        assert!(!rid.is_empty());
    }

    #[tokio::test]
    async fn client_request_id_is_propagated() {
        let resp = app()
            .oneshot(
                Request::get("/convert/30/celsius/kelvin")
                    .header(REQUEST_ID_HEADER, "req-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.headers().get(REQUEST_ID_HEADER).unwrap(), "req-123");
    }

    #[tokio::test]
    async fn middleware_keeps_module_behavior() {
        let resp = app()
            .oneshot(
                Request::get("/convert/212/fahrenheit/celsius")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], br#"{"value":100}"#);
    }

    #[tokio::test]
    async fn slow_requests_time_out_with_gateway_timeout() {
        let slow = Router::new().route(
            "/slow",
            axum::routing::get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        );
        let router = apply_middleware_stack(slow, Duration::from_millis(50));

        let resp = router
            .oneshot(Request::get("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
        assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn serves_over_tcp_and_stops_on_cancel() {
        let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let cancel = CancellationToken::new();
        let server = tokio::spawn(serve(listener, app(), cancel.clone()));

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(
                b"GET /convert/0/celsius/fahrenheit HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
            )
            .await
            .unwrap();
        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.unwrap();

        assert!(raw.starts_with("HTTP/1.1 200"), "{raw}");
        assert!(raw.ends_with(r#"{"value":32}"#), "{raw}");

        cancel.cancel();
        tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .expect("server stops after cancel")
            .unwrap()
            .unwrap();
    }
}
