use hobbyclass_portal::{
    AppState, SessionService, SessionState, create_router,
    config::{AppConfig, Env},
    dashboards::{MentorBoard, StudentBoard},
    repository::{InMemoryRegistry, RegistryState},
    storage::{FileSessionStorage, NullSessionStorage, StorageState},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// The asynchronous entry point, responsible for initializing all core
/// components: Configuration, Logging, Registry, Session Storage, and the
/// HTTP server.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading (Fail-Fast)
    // Loads .env file settings before configuration can be read.
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // Prioritizes RUST_LOG, falling back to sensible local defaults.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hobbyclass_portal=debug,tower_http=info,axum=trace".into());

    // 3. Initialize Logging based on Environment
    match config.env {
        Env::Local => {
            // LOCAL: pretty output for human readability.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            // PROD: JSON output for log aggregators.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // 4. Session Storage Initialization
    // A configured path gets the file-backed store; no path means sessions
    // do not survive a restart.
    let storage: StorageState = match &config.session_file {
        Some(path) => {
            tracing::info!("persisting session to {}", path.display());
            Arc::new(FileSessionStorage::new(path.clone()))
        }
        None => {
            tracing::info!("session persistence disabled");
            Arc::new(NullSessionStorage)
        }
    };

    // 5. Registry and Board Initialization
    // The registry and both dashboard boards start from the demo fixtures.
    let registry = Arc::new(InMemoryRegistry::seeded()) as RegistryState;
    let mentor_board = Arc::new(RwLock::new(MentorBoard::seeded()));
    let student_board = Arc::new(RwLock::new(StudentBoard::seeded()));

    // 6. Session Service + Restore
    // A record persisted by a previous run becomes the current session.
    let session: SessionState = Arc::new(SessionService::new(
        registry.clone(),
        storage.clone(),
        config.demo_password.clone(),
    ));
    session.restore().await;

    // 7. Unified State Assembly
    let app_state = AppState {
        registry,
        session,
        storage,
        mentor_board,
        student_board,
        config: config.clone(),
    };

    // 8. Router and Server Startup
    let app = create_router(app_state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .expect("FATAL: failed to bind HTTP listener. Check BIND_ADDR.");

    tracing::info!("HTTP server bound successfully.");
    tracing::info!("Listening on {}", config.bind_addr);
    tracing::info!("API Documentation (Swagger UI) available at: /swagger-ui");

    axum::serve(listener, app).await.unwrap();
}
