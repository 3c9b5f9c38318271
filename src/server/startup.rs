use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE, ETAG, IF_MATCH},
    HeaderValue, Method,
};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to `info,sqlx=warn`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the CORS layer for the API.
///
/// Without `CORS_ORIGIN` any origin is allowed and credentials are not. With it, only that
/// origin is allowed and cookies are accepted, so browser clients can send `auth_token`.
///
/// # Returns
/// - `Ok(CorsLayer)` - Configured layer
/// - `Err(ConfigError::InvalidEnvVar)` - `CORS_ORIGIN` is not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, IF_MATCH])
        .expose_headers([ETAG]);

    let Some(origin) = &config.cors_origin else {
        return Ok(layer.allow_origin(Any));
    };

    let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
        name: "CORS_ORIGIN".to_string(),
        value: origin.clone(),
    })?;

    Ok(layer.allow_origin(origin).allow_credentials(true))
}

/// Resolves when the process receives Ctrl+C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
