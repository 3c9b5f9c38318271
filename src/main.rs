mod model;
mod server;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config, error::AppError, router, service::token::TokenVerifier, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let cors = startup::cors_layer(&config)?;

    let state = AppState::new(db, TokenVerifier::new(&config.jwt_secret), config.settings);

    let app = router::router()
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_address).await?;

    tracing::info!(address = %config.bind_address, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
