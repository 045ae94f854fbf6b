//! # wakehubd — wakehub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Construct the probe, wake, remote shell, and lighting adapters
//! - Construct application services, injecting adapters via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use wakehub_adapter_http_axum::state::{AppState, TimingDefaults};
use wakehub_adapter_lifx::LifxClient;
use wakehub_adapter_net::{UdpWakeSender, default_stack};
use wakehub_adapter_ssh::SshRemoteRunner;
use wakehub_app::services::directory::TargetDirectory;
use wakehub_app::services::dispatcher::TriggerDispatcher;
use wakehub_app::services::orchestrator::BundleOrchestrator;
use wakehub_app::services::poller::ConvergencePoller;
use wakehub_app::services::prober::ReachabilityProber;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Adapters
    let prober = ReachabilityProber::new(default_stack(config.probe));
    let dispatcher =
        TriggerDispatcher::new(UdpWakeSender, SshRemoteRunner::new(config.ssh.clone()))
            .with_wake_port(config.wake.port);
    let lighting = LifxClient::new(config.lifx.clone())
        .map_err(|err| anyhow::anyhow!("lighting client: {err}"))?;

    // Services
    let poller = ConvergencePoller::new(prober, dispatcher);
    let orchestrator = BundleOrchestrator::new(poller, lighting);
    let directory = TargetDirectory::new(config.targets.clone());
    tracing::info!(targets = directory.len(), "configuration loaded");

    let defaults = TimingDefaults {
        transition: Duration::from_millis(config.lifx.transition_ms),
        ..TimingDefaults::default()
    };

    // HTTP
    let state = AppState::new(directory, orchestrator, defaults);
    let app = wakehub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!("wakehubd listening on http://{bind_addr}");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .unwrap_or_else(|err| tracing::error!(error = %err, "failed to install ctrl-c handler"));
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!(error = %err, "failed to install terminate handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
