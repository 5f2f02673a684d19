use hobbyclass_portal::{AppConfig, config::Env};
use serial_test::serial;
use std::path::PathBuf;
use std::{env, panic};

// --- Setup/Teardown Utilities ---

/// Utility to run a test function and restore environment variables afterward
fn run_with_env<T, R>(test: T, cleanup_vars: Vec<&'static str>) -> R
where
    T: FnOnce() -> R + panic::UnwindSafe,
{
    // Save current environment variables
    let originals: Vec<(String, Option<String>)> = cleanup_vars
        .iter()
        .map(|&var| (var.to_string(), env::var(var).ok()))
        .collect();

    // Run the test
    let result = panic::catch_unwind(test);

    // Restore original environment variables
    for (key, original_value) in originals.into_iter().rev() {
        unsafe {
            if let Some(val) = original_value {
                env::set_var(&key, val);
            } else {
                env::remove_var(&key);
            }
        }
    }

    // Re-panic if the test failed
    match result {
        Ok(value) => value,
        Err(e) => panic::resume_unwind(e),
    }
}

// --- Tests ---

#[test]
#[serial]
fn test_app_config_production_fail_fast_on_missing_demo_password() {
    let result = run_with_env(
        || {
            panic::catch_unwind(|| {
                unsafe {
                    env::set_var("APP_ENV", "production");
                    env::set_var("SESSION_FILE", "/var/lib/hobbyclass/currentUser.json");
                    env::remove_var("DEMO_PASSWORD");
                }
                AppConfig::load()
            })
        },
        vec!["APP_ENV", "SESSION_FILE", "DEMO_PASSWORD"],
    );

    assert!(
        result.is_err(),
        "Production config loading should panic without DEMO_PASSWORD"
    );
}

#[test]
#[serial]
fn test_app_config_production_fail_fast_on_missing_session_file() {
    let result = run_with_env(
        || {
            panic::catch_unwind(|| {
                unsafe {
                    env::set_var("APP_ENV", "production");
                    env::set_var("DEMO_PASSWORD", "prod-demo-secret");
                    env::remove_var("SESSION_FILE");
                }
                AppConfig::load()
            })
        },
        vec!["APP_ENV", "DEMO_PASSWORD", "SESSION_FILE"],
    );

    assert!(
        result.is_err(),
        "Production config loading should panic without SESSION_FILE"
    );
}

#[test]
#[serial]
fn test_app_config_local_env_defaults() {
    // Local mode should not panic, and should use the hardcoded defaults.
    let config = run_with_env(
        || {
            unsafe {
                env::set_var("APP_ENV", "local");
                env::remove_var("BIND_ADDR");
                env::remove_var("SESSION_FILE");
                env::remove_var("DEMO_PASSWORD");
            }
            AppConfig::load()
        },
        vec!["APP_ENV", "BIND_ADDR", "SESSION_FILE", "DEMO_PASSWORD"],
    );

    assert_eq!(config.env, Env::Local);
    assert_eq!(config.bind_addr, "0.0.0.0:3000");
    assert_eq!(config.demo_password, "demo123");
    // Local runs persist to the well-known path by default.
    assert_eq!(
        config.session_file,
        Some(PathBuf::from(".hobbyclass/currentUser.json"))
    );
}

#[test]
#[serial]
fn test_app_config_empty_session_file_disables_persistence() {
    let config = run_with_env(
        || {
            unsafe {
                env::set_var("APP_ENV", "local");
                env::set_var("SESSION_FILE", "");
            }
            AppConfig::load()
        },
        vec!["APP_ENV", "SESSION_FILE"],
    );

    assert!(config.session_file.is_none());
}

#[test]
#[serial]
fn test_app_config_explicit_overrides() {
    let config = run_with_env(
        || {
            unsafe {
                env::set_var("APP_ENV", "local");
                env::set_var("BIND_ADDR", "127.0.0.1:8088");
                env::set_var("SESSION_FILE", "/tmp/session.json");
                env::set_var("DEMO_PASSWORD", "letmein");
            }
            AppConfig::load()
        },
        vec!["APP_ENV", "BIND_ADDR", "SESSION_FILE", "DEMO_PASSWORD"],
    );

    assert_eq!(config.bind_addr, "127.0.0.1:8088");
    assert_eq!(config.session_file, Some(PathBuf::from("/tmp/session.json")));
    assert_eq!(config.demo_password, "letmein");
}
