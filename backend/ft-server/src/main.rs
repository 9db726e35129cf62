use ft_server::{AppState, ServerResult, build_router, logger};

use std::path::PathBuf;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

const MAINTENANCE_INTERVAL: Duration = Duration::from_secs(15 * 60);

#[tokio::main]
async fn main() -> ServerResult<()> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = ft_config::Config::load()?;
    config.validate()?;

    let log_file_path: Option<PathBuf> = if let Some(ref filename) = config.logging.file {
        let log_dir = ft_config::Config::config_dir()?.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ft-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = ft_db::create_pool(&database_path, config.database.max_connections).await?;

    info!("Running database migrations...");
    ft_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    let secret = match &config.auth.jwt_secret {
        Some(secret) => secret.clone(),
        None => {
            warn!("auth.jwt_secret is not set; using an ephemeral secret, sessions end on restart");
            ft_auth::generate_secret()
        }
    };

    let app_state = AppState::new(pool, &config, secret.as_bytes());

    // Periodic cleanup of expired refresh tokens and idle limiter keys
    let maintenance_state = app_state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(MAINTENANCE_INTERVAL);
        loop {
            interval.tick().await;
            let removed = maintenance_state.sessions.prune_expired().await;
            if removed > 0 {
                info!("Removed {} expired refresh tokens", removed);
            }
            maintenance_state.login_limiter.prune();
        }
    });

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
