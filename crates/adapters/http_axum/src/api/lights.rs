//! Light-only handlers.

use std::time::Duration;

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use wakehub_app::ports::{LightingClient, ProbeStrategy, RemoteRunner, WakeSender};
use wakehub_domain::lighting::{LightPower, LightSelector, LightingResult};

use crate::state::AppState;

/// Optional body for the light-only endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LightsRequest {
    /// Group name; absent or blank means all lights.
    pub group: Option<String>,
    /// Fade duration override.
    pub duration_ms: Option<u64>,
}

/// `POST /api/lights/on`
pub async fn on<S, W, R, L>(
    State(state): State<AppState<S, W, R, L>>,
    body: Option<Json<LightsRequest>>,
) -> Json<LightingResult>
where
    S: ProbeStrategy + 'static,
    W: WakeSender + 'static,
    R: RemoteRunner + 'static,
    L: LightingClient + 'static,
{
    set_power(&state, LightPower::On, body.map(|Json(b)| b)).await
}

/// `POST /api/lights/off`
pub async fn off<S, W, R, L>(
    State(state): State<AppState<S, W, R, L>>,
    body: Option<Json<LightsRequest>>,
) -> Json<LightingResult>
where
    S: ProbeStrategy + 'static,
    W: WakeSender + 'static,
    R: RemoteRunner + 'static,
    L: LightingClient + 'static,
{
    set_power(&state, LightPower::Off, body.map(|Json(b)| b)).await
}

async fn set_power<S, W, R, L>(
    state: &AppState<S, W, R, L>,
    power: LightPower,
    body: Option<LightsRequest>,
) -> Json<LightingResult>
where
    S: ProbeStrategy + 'static,
    W: WakeSender + 'static,
    R: RemoteRunner + 'static,
    L: LightingClient + 'static,
{
    let body = body.unwrap_or_default();
    let selector = LightSelector::group_or_all(body.group);
    let transition = body
        .duration_ms
        .map_or(state.defaults.transition, Duration::from_millis);
    Json(state.orchestrator.set_lights(selector, power, transition).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_camel_case_body() {
        let body: LightsRequest =
            serde_json::from_str(r#"{"group": "Office", "durationMs": 2500}"#).unwrap();
        assert_eq!(body.group.as_deref(), Some("Office"));
        assert_eq!(body.duration_ms, Some(2500));
    }

    #[test]
    fn should_default_all_fields_when_body_is_empty() {
        let body: LightsRequest = serde_json::from_str("{}").unwrap();
        assert!(body.group.is_none());
        assert!(body.duration_ms.is_none());
    }
}
