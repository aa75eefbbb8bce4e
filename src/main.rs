use axum::Router;
use tokio::net::TcpListener;

use anyhow::anyhow;

use speechcraft::{routes, state::AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = ServerConfig::from_env().map_err(|e| anyhow!(e.to_string()))?;
    let address = config.address();

    // Create application state (builds the provider client)
    let app_state = AppState::new(config).map_err(|e| anyhow!(e.to_string()))?;

    // Public health check route plus the API routes
    let public_routes = Router::new().route(
        "/",
        axum::routing::get(speechcraft::handlers::api::health_check),
    );
    let app = public_routes
        .merge(routes::api::create_api_router())
        .with_state(app_state);

    let listener = TcpListener::bind(&address).await?;
    println!("Server listening on {address}");

    axum::serve(listener, app).await?;

    Ok(())
}
