//! JSON webhook handlers.

pub mod bundles;
pub mod lights;
pub mod targets;

use axum::Router;
use axum::routing::{get, post};

use wakehub_app::ports::{LightingClient, ProbeStrategy, RemoteRunner, WakeSender};

use crate::state::AppState;

/// Assemble the `/api` routes.
pub fn routes<S, W, R, L>() -> Router<AppState<S, W, R, L>>
where
    S: ProbeStrategy + 'static,
    W: WakeSender + 'static,
    R: RemoteRunner + 'static,
    L: LightingClient + 'static,
{
    Router::new()
        .route("/targets", get(targets::list))
        .route("/targets/{name}/wake", post(targets::wake))
        .route("/targets/{name}/sleep", post(targets::sleep))
        .route("/lights/on", post(lights::on))
        .route("/lights/off", post(lights::off))
        .route("/bundles/arrive", post(bundles::arrive))
        .route("/bundles/leave", post(bundles::leave))
}
