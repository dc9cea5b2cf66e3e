use hb_client::{ClientFactory, ServiceBackend};
use hb_config::{BackendKind, Config};
use hb_db::LocalBackend;
use hb_server::{AppState, ServerResult, build_router, logger};

use std::error::Error;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine; variables may come from the environment
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to read .env: {e}");
    }

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting hb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let app_state = build_state(&config).await?;
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on http://{}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn build_state(config: &Config) -> ServerResult<AppState> {
    match config.backend.kind {
        BackendKind::Service => {
            let factory = ClientFactory::from_config(&config.service)?;
            info!("Using hosted service backend: {:?}", factory);
            Ok(AppState::new(ServiceBackend::new(factory)))
        }
        BackendKind::Local => {
            let database_path = config.database_path()?;
            let pool = hb_db::open(&database_path).await?;
            info!("Database ready: {}", database_path.display());

            let dev_user = config.database.dev_user_uuid()?;
            if dev_user.is_none() {
                warn!("No dev user configured; requests without a session are signed out");
            }

            let backend = LocalBackend::new(pool, dev_user);
            backend
                .ensure_dev_user(config.database.dev_user_email.as_deref())
                .await?;

            Ok(AppState::new(backend))
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Keep serving; without a signal handler only a kill stops us
            std::future::pending::<()>().await
        }
    }
}
