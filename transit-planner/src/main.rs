use std::error::Error;

use tracing::info;

use transit_planner::config::ServerConfig;
use transit_planner::data::load_data_dir;
use transit_planner::logging::init_logging;
use transit_planner::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_logging("info");

    let config = ServerConfig::from_env()?;

    // Fail fast on bad data rather than serving a partial network
    let data = load_data_dir(&config.data_dir)?;
    info!(
        stations = data.network.len(),
        connections = data.network.connection_count(),
        "Network ready"
    );

    let state = AppState::from_data(data, &config.sessions);
    let app = create_router(state);

    let addr = config.addr;
    info!(%addr, "Transit planner listening");
    info!("API Endpoints:");
    info!("  GET    /health                 - Health check");
    info!("  GET    /stations               - List stations");
    info!("  POST   /trip/plan              - Plan and charge a trip");
    info!("  GET    /riders/:rider/session  - Show a rider's fare session");
    info!("  DELETE /riders/:rider/session  - Close a rider's fare session");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
