//! End-to-end smoke tests for the full wakehubd stack.
//!
//! Each test wires the real adapters (UDP wake sender, system ssh runner,
//! LIFX client, network probes) behind the real services and exercises the
//! HTTP layer via `tower::ServiceExt::oneshot`. No TCP port is bound, and
//! only endpoints that fail before touching the network are driven here;
//! probe, wake, and lighting behavior is covered by the adapter and service
//! tests with stub ports.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use wakehub_adapter_http_axum::router;
use wakehub_adapter_http_axum::state::{AppState, TimingDefaults};
use wakehub_adapter_lifx::{LifxClient, LifxConfig};
use wakehub_adapter_net::{ProbeConfig, UdpWakeSender, default_stack};
use wakehub_adapter_ssh::{SshConfig, SshRemoteRunner};
use wakehub_app::services::directory::TargetDirectory;
use wakehub_app::services::dispatcher::TriggerDispatcher;
use wakehub_app::services::orchestrator::BundleOrchestrator;
use wakehub_app::services::poller::ConvergencePoller;
use wakehub_app::services::prober::ReachabilityProber;
use wakehub_domain::target::Target;

/// Build a fully-wired router over the real adapter types.
fn app() -> axum::Router {
    let target = Target::builder()
        .name("office")
        .host("192.0.2.10")
        .mac("AA:BB:CC:DD:EE:FF".parse().unwrap())
        .build()
        .unwrap();

    let prober = ReachabilityProber::new(default_stack(ProbeConfig::default()));
    let dispatcher = TriggerDispatcher::new(UdpWakeSender, SshRemoteRunner::new(SshConfig::default()));
    let lighting = LifxClient::new(LifxConfig::default()).unwrap();

    let state = AppState::new(
        TargetDirectory::new([target]),
        BundleOrchestrator::new(ConvergencePoller::new(prober, dispatcher), lighting),
        TimingDefaults::default(),
    );

    router::build(state)
}

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_list_configured_targets() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/api/targets")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!(["office"]));
}

#[tokio::test]
async fn should_return_not_found_for_unknown_target() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/targets/garage/wake")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("garage"));
}

#[tokio::test]
async fn should_return_not_found_for_bundle_with_unknown_target() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/bundles/arrive")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"target": "garage"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_reject_bundle_without_target_field() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/bundles/arrive")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_route() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/api/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
