use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_server::config::ServerConfig;
use metro_server::network::MetroNetwork;
use metro_server::trace::{CachedTraceLoader, TraceLoader};
use metro_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("metro_server=info,tower_http=info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let network = MetroNetwork::surat();
    info!(
        stations = network.registry().len(),
        edges = network.topology().edge_count(),
        "built metro network"
    );

    // Traces load lazily on the first map request
    let loader = TraceLoader::new(config.trace.clone())?;
    let traces = CachedTraceLoader::new(loader, &config.trace_cache());

    let addr = config.bind_addr;
    let static_dir = config.static_dir.display().to_string();
    info!(
        trace = %config.trace,
        geometry = %config.geometry,
        static_dir = %static_dir,
        "configuration loaded"
    );

    let state = AppState::new(network, traces, config);
    let app = create_router(state, &static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Surat Metro route planner listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
