//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use wakehub_app::ports::{LightingClient, ProbeStrategy, RemoteRunner, WakeSender};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the webhook routes under `/api` and includes a [`TraceLayer`]
/// that logs each HTTP request/response at the `DEBUG` level using the
/// `tracing` ecosystem.
pub fn build<S, W, R, L>(state: AppState<S, W, R, L>) -> Router
where
    S: ProbeStrategy + 'static,
    W: WakeSender + 'static,
    R: RemoteRunner + 'static,
    L: LightingClient + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use wakehub_app::ports::{LightingError, RemoteError};
    use wakehub_app::services::directory::TargetDirectory;
    use wakehub_app::services::dispatcher::TriggerDispatcher;
    use wakehub_app::services::orchestrator::BundleOrchestrator;
    use wakehub_app::services::poller::ConvergencePoller;
    use wakehub_app::services::prober::ReachabilityProber;
    use wakehub_domain::lighting::{LightPower, LightSelector};
    use wakehub_domain::mac::MacAddr;
    use wakehub_domain::target::{RemoteCredentials, Target};

    use super::*;
    use crate::state::TimingDefaults;

    struct FixedProbe(bool);

    impl ProbeStrategy for FixedProbe {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn probe(&self, _target: &Target) -> std::io::Result<bool> {
            Ok(self.0)
        }
    }

    struct StubWakeSender;

    impl WakeSender for StubWakeSender {
        async fn send(&self, _mac: MacAddr, _dest: &str, _port: u16) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct StubRunner;

    impl RemoteRunner for StubRunner {
        async fn run(&self, _target: &Target, _command: &str) -> Result<(), RemoteError> {
            Ok(())
        }
    }

    struct StubLighting;

    impl LightingClient for StubLighting {
        async fn set_power(
            &self,
            _selector: &LightSelector,
            _power: LightPower,
            _transition: Duration,
        ) -> Result<BTreeMap<String, bool>, LightingError> {
            Ok(BTreeMap::from([("Desk".to_string(), true)]))
        }
    }

    fn test_app(reachable: bool) -> Router {
        let target = Target::builder()
            .name("office")
            .host("192.168.1.20")
            .mac("AA:BB:CC:DD:EE:FF".parse().unwrap())
            .credentials(RemoteCredentials {
                user: "admin".to_string(),
                identity_file: None,
                port: 22,
            })
            .build()
            .unwrap();
        let state = AppState::new(
            TargetDirectory::new([target]),
            BundleOrchestrator::new(
                ConvergencePoller::new(
                    ReachabilityProber::new(vec![FixedProbe(reachable)]),
                    TriggerDispatcher::new(StubWakeSender, StubRunner),
                ),
                StubLighting,
            ),
            TimingDefaults::default(),
        );
        build(state)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = test_app(true);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_list_configured_targets() {
        let app = test_app(true);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/targets")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!(["office"]));
    }

    #[tokio::test]
    async fn should_return_converged_result_when_target_already_online() {
        let app = test_app(true);

        let response = app
            .oneshot(post_json("/api/targets/office/wake", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["converged"], true);
        assert_eq!(json["attempts"], 0);
        assert_eq!(json["observedOnline"], true);
    }

    #[tokio::test(start_paused = true)]
    async fn should_return_accepted_when_deadline_elapses_first() {
        let app = test_app(false);

        let response = app
            .oneshot(post_json(
                "/api/targets/office/wake",
                r#"{"intervalMs": 1000, "deadlineMs": 3000}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let json = body_json(response).await;
        assert_eq!(json["converged"], false);
        assert_eq!(json["attempts"], 3);
        assert_eq!(json["observedOnline"], false);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_target() {
        let app = test_app(true);

        let response = app
            .oneshot(post_json("/api/targets/garage/wake", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn should_accept_sleep_without_a_body() {
        let app = test_app(false);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/targets/office/sleep")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["converged"], true);
        assert_eq!(json["attempts"], 0);
    }

    #[tokio::test]
    async fn should_report_per_device_statuses_for_lights() {
        let app = test_app(true);

        let response = app
            .oneshot(post_json("/api/lights/on", r#"{"group": "Office"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["perDeviceSuccess"]["Desk"], true);
    }

    #[tokio::test]
    async fn should_run_arrive_bundle_and_report_both_halves() {
        let app = test_app(true);

        let response = app
            .oneshot(post_json(
                "/api/bundles/arrive",
                r#"{"target": "office", "group": "Office"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["device"]["converged"], true);
        assert_eq!(json["lights"]["perDeviceSuccess"]["Desk"], true);
    }

    #[tokio::test]
    async fn should_return_not_found_for_bundle_with_unknown_target() {
        let app = test_app(true);

        let response = app
            .oneshot(post_json("/api/bundles/leave", r#"{"target": "garage"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
