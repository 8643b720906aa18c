use dh_auth::{PasswordCodec, SessionTokenService};
use dh_config::Config;
use dh_server::{AppState, build_router, logger, mailer};

use std::error::Error;

use log::{info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        return Err(e.into());
    }

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let log_dir = Config::config_dir()?.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting dh-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let pool = dh_db::create_pool(&config.database_path()?).await?;

    let codec = PasswordCodec::new(config.auth.iterations())?;
    let sessions = SessionTokenService::with_hs256(config.auth.jwt_secret_bytes());

    let mailer = mailer::build_mailer(&config.mail)?;
    if !config.mail.is_smtp_enabled() {
        warn!("SMTP not configured - confirmation emails will not be delivered");
    }

    let state = AppState::new(pool, codec, sessions, mailer, config.mail.public_url.clone());
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => warn!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
