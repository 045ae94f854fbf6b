//! Arrive/leave bundle handlers.
//!
//! A bundle response always reports both halves side by side. The device
//! half may carry its own error object while the lights half succeeded (or
//! the other way round); the two are never collapsed into one flag.

use std::time::Duration;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use wakehub_app::ports::{LightingClient, ProbeStrategy, RemoteRunner, WakeSender};
use wakehub_app::services::orchestrator::BundleOutcome;
use wakehub_domain::lighting::{LightSelector, LightingResult};
use wakehub_domain::power::PowerState;

use crate::api::targets::{TimingRequest, convergence_request};
use crate::error::ApiError;
use crate::state::AppState;

/// Body for the bundle endpoints. Only `target` is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleRequest {
    /// Name of the target to wake or suspend.
    pub target: String,
    /// Light group; absent or blank means all lights.
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub interval_ms: Option<u64>,
    #[serde(default)]
    pub deadline_ms: Option<u64>,
    /// Lighting fade duration override.
    #[serde(default)]
    pub duration_ms: Option<u64>,
}

/// Wire shape of a bundle response.
#[derive(Debug, Serialize)]
pub struct BundleResponse {
    /// Convergence result, or `{"error": …}` when the device half failed
    /// before polling could start.
    pub device: Value,
    /// Per-light outcome.
    pub lights: LightingResult,
}

impl From<BundleOutcome> for BundleResponse {
    fn from(outcome: BundleOutcome) -> Self {
        let device = match outcome.device {
            Ok(result) => json!(result),
            Err(err) => json!({"error": err.to_string()}),
        };
        Self {
            device,
            lights: outcome.lights,
        }
    }
}

/// `POST /api/bundles/arrive`
pub async fn arrive<S, W, R, L>(
    State(state): State<AppState<S, W, R, L>>,
    Json(body): Json<BundleRequest>,
) -> Result<Json<BundleResponse>, ApiError>
where
    S: ProbeStrategy + 'static,
    W: WakeSender + 'static,
    R: RemoteRunner + 'static,
    L: LightingClient + 'static,
{
    run(&state, PowerState::Online, body).await
}

/// `POST /api/bundles/leave`
pub async fn leave<S, W, R, L>(
    State(state): State<AppState<S, W, R, L>>,
    Json(body): Json<BundleRequest>,
) -> Result<Json<BundleResponse>, ApiError>
where
    S: ProbeStrategy + 'static,
    W: WakeSender + 'static,
    R: RemoteRunner + 'static,
    L: LightingClient + 'static,
{
    run(&state, PowerState::Offline, body).await
}

async fn run<S, W, R, L>(
    state: &AppState<S, W, R, L>,
    expected: PowerState,
    body: BundleRequest,
) -> Result<Json<BundleResponse>, ApiError>
where
    S: ProbeStrategy + 'static,
    W: WakeSender + 'static,
    R: RemoteRunner + 'static,
    L: LightingClient + 'static,
{
    // An unknown target fails the whole bundle up front: nothing has been
    // triggered yet, so a plain 404 is still truthful.
    let target = state.directory.get(&body.target)?;
    let request = convergence_request(
        state.defaults,
        expected,
        Some(TimingRequest {
            interval_ms: body.interval_ms,
            deadline_ms: body.deadline_ms,
        }),
    );
    let selector = LightSelector::group_or_all(body.group);
    let transition = body
        .duration_ms
        .map_or(state.defaults.transition, Duration::from_millis);

    let outcome = match expected {
        PowerState::Online => {
            state
                .orchestrator
                .arrive(target, request, selector, transition)
                .await
        }
        PowerState::Offline => {
            state
                .orchestrator
                .leave(target, request, selector, transition)
                .await
        }
    };

    Ok(Json(BundleResponse::from(outcome)))
}
