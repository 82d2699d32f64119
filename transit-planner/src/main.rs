use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use transit_planner::network::NetworkModel;
use transit_planner::planner::PlannerConfig;
use transit_planner::web::{AppState, ServerConfig, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let server_config = ServerConfig::from_env()?;

    // Fail fast: a broken dataset is a configuration error.
    let network = NetworkModel::load(&server_config.data_path).map_err(|e| {
        tracing::error!(
            path = %server_config.data_path.display(),
            error = %e,
            "failed to load transit network"
        );
        e
    })?;

    let state = AppState::new(network, PlannerConfig::default());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(server_config.addr).await?;
    info!(addr = %server_config.addr, "Transit planner listening");
    info!("API endpoints: GET /health, GET /stops, GET /stops/:id, POST /plan");

    axum::serve(listener, app).await?;
    Ok(())
}
