use std::env;
use std::path::PathBuf;

/// AppConfig
///
/// Holds the application's entire configuration state. This struct is designed
/// to be immutable once loaded, ensuring consistency across all services
/// (Session, Storage). It is pulled into the application state via FromRef.
#[derive(Clone)]
pub struct AppConfig {
    // Address the HTTP listener binds to.
    pub bind_addr: String,
    // Where the serialized session user is persisted between runs.
    // None disables persistence entirely (the "no storage backend" mode).
    pub session_file: Option<PathBuf>,
    // The shared fallback password accepted for any registered user.
    pub demo_password: String,
    // Runtime environment marker. Controls log format and fail-fast checks.
    pub env: Env,
}

/// Env
///
/// Defines the runtime context, used to switch between development defaults
/// and explicit, fail-fast production configuration.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// default
    ///
    /// Provides a safe, non-panicking AppConfig instance primarily used for
    /// test setup. Persistence is disabled so tests never touch the
    /// filesystem unless they opt in.
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:0".to_string(),
            session_file: None,
            demo_password: "demo123".to_string(),
            env: Env::Local,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// The canonical function for initializing the application configuration
    /// at startup. Reads all parameters from environment variables and
    /// implements the fail-fast principle.
    ///
    /// # Panics
    /// Panics if a variable required for the current runtime environment
    /// (Production) is not found. This prevents the application from starting
    /// with an incomplete configuration.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        // Demo Password Resolution
        // The production value is mandatory and must be explicitly set.
        let demo_password = match env {
            Env::Production => env::var("DEMO_PASSWORD")
                .expect("FATAL: DEMO_PASSWORD must be set in production."),
            _ => env::var("DEMO_PASSWORD").unwrap_or_else(|_| "demo123".to_string()),
        };

        // Session File Resolution
        // SESSION_FILE set to a path enables file persistence; set to the
        // empty string it disables persistence explicitly. When unset, local
        // runs fall back to a well-known path while production must choose.
        let session_file = match env::var("SESSION_FILE") {
            Ok(path) if path.is_empty() => None,
            Ok(path) => Some(PathBuf::from(path)),
            Err(_) => match env {
                Env::Local => Some(PathBuf::from(".hobbyclass/currentUser.json")),
                Env::Production => {
                    panic!("FATAL: SESSION_FILE required in production (empty string disables persistence).")
                }
            },
        };

        Self {
            bind_addr,
            session_file,
            demo_password,
            env,
        }
    }
}
