//! Wake/sleep handlers for named targets.

use std::time::Duration;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use wakehub_app::ports::{LightingClient, ProbeStrategy, RemoteRunner, WakeSender};
use wakehub_domain::convergence::{ConvergenceRequest, ConvergenceResult};
use wakehub_domain::power::PowerState;

use crate::error::ApiError;
use crate::state::{AppState, TimingDefaults};

/// Optional timing overrides in a wake/sleep request body.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimingRequest {
    pub interval_ms: Option<u64>,
    pub deadline_ms: Option<u64>,
}

/// Build the convergence request from defaults plus body overrides.
pub(crate) fn convergence_request(
    defaults: TimingDefaults,
    expected: PowerState,
    timing: Option<TimingRequest>,
) -> ConvergenceRequest {
    let timing = timing.unwrap_or_default();
    ConvergenceRequest::new(expected)
        .with_interval(
            timing
                .interval_ms
                .map_or(defaults.interval, Duration::from_millis),
        )
        .with_deadline(
            timing
                .deadline_ms
                .map_or(defaults.deadline, Duration::from_millis),
        )
}

/// Possible responses from the wake/sleep endpoints.
///
/// Both carry the full convergence result: callers must be able to tell
/// "converged" from "trigger sent but not verified" without parsing an
/// error shape.
pub enum ConvergeResponse {
    /// The target reached the expected state.
    Converged(Json<ConvergenceResult>),
    /// The deadline elapsed first; the trigger was still sent.
    Pending(Json<ConvergenceResult>),
}

impl ConvergeResponse {
    fn from_result(result: ConvergenceResult) -> Self {
        if result.converged {
            Self::Converged(Json(result))
        } else {
            Self::Pending(Json(result))
        }
    }
}

impl IntoResponse for ConvergeResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Converged(json) => json.into_response(),
            Self::Pending(json) => (StatusCode::ACCEPTED, json).into_response(),
        }
    }
}

/// `GET /api/targets`
pub async fn list<S, W, R, L>(State(state): State<AppState<S, W, R, L>>) -> Json<Vec<String>>
where
    S: ProbeStrategy + 'static,
    W: WakeSender + 'static,
    R: RemoteRunner + 'static,
    L: LightingClient + 'static,
{
    Json(
        state
            .directory
            .names()
            .into_iter()
            .map(ToString::to_string)
            .collect(),
    )
}

/// `POST /api/targets/{name}/wake`
pub async fn wake<S, W, R, L>(
    State(state): State<AppState<S, W, R, L>>,
    Path(name): Path<String>,
    body: Option<Json<TimingRequest>>,
) -> Result<ConvergeResponse, ApiError>
where
    S: ProbeStrategy + 'static,
    W: WakeSender + 'static,
    R: RemoteRunner + 'static,
    L: LightingClient + 'static,
{
    converge(&state, &name, PowerState::Online, body.map(|Json(b)| b)).await
}

/// `POST /api/targets/{name}/sleep`
pub async fn sleep<S, W, R, L>(
    State(state): State<AppState<S, W, R, L>>,
    Path(name): Path<String>,
    body: Option<Json<TimingRequest>>,
) -> Result<ConvergeResponse, ApiError>
where
    S: ProbeStrategy + 'static,
    W: WakeSender + 'static,
    R: RemoteRunner + 'static,
    L: LightingClient + 'static,
{
    converge(&state, &name, PowerState::Offline, body.map(|Json(b)| b)).await
}

async fn converge<S, W, R, L>(
    state: &AppState<S, W, R, L>,
    name: &str,
    expected: PowerState,
    timing: Option<TimingRequest>,
) -> Result<ConvergeResponse, ApiError>
where
    S: ProbeStrategy + 'static,
    W: WakeSender + 'static,
    R: RemoteRunner + 'static,
    L: LightingClient + 'static,
{
    let target = state.directory.get(name)?;
    let request = convergence_request(state.defaults, expected, timing);
    let result = state.orchestrator.converge(target, request).await?;
    Ok(ConvergeResponse::from_result(result))
}
