use hobbyclass_portal::{
    AppConfig, AppState, InMemoryRegistry, MentorBoard, MockSessionStorage, SessionService,
    StudentBoard, create_router,
    models::{LoginResponse, SessionView, StudentClass},
    repository::RegistryState,
    storage::StorageState,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;

pub struct TestApp {
    pub address: String,
}

/// Boots the full router on an ephemeral port with fresh in-memory state.
/// Every test gets its own process-wide session, registry, and boards.
async fn spawn_app() -> TestApp {
    let registry = Arc::new(InMemoryRegistry::seeded()) as RegistryState;
    let storage = Arc::new(MockSessionStorage::new()) as StorageState;
    let config = AppConfig::default();

    let session = Arc::new(SessionService::new(
        registry.clone(),
        storage.clone(),
        config.demo_password.clone(),
    ));

    let state = AppState {
        registry,
        session,
        storage,
        mentor_board: Arc::new(RwLock::new(MentorBoard::seeded())),
        student_board: Arc::new(RwLock::new(StudentBoard::seeded())),
        config,
    };
    let router = create_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestApp { address }
}

/// A client that surfaces redirects instead of following them, so guard
/// behavior can be asserted on the raw response.
fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

async fn login(client: &reqwest::Client, address: &str, username: &str, password: &str) -> reqwest::Response {
    client
        .post(format!("{}/login", address))
        .json(&serde_json::json!({ "username": username, "password": password }))
        .send()
        .await
        .expect("login request failed")
}

#[tokio::test]
async fn test_health_check() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("req fail");
    assert!(response.status().is_success());
}

#[tokio::test]
async fn test_admin_login_establishes_session() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = login(&client, &app.address, "admin", "admin123").await;
    assert_eq!(response.status(), 200);
    let body: LoginResponse = response.json().await.unwrap();
    assert!(body.success);
    assert_eq!(body.message, "Login successful");
    assert_eq!(body.redirect.as_deref(), Some("/admin-dashboard"));
    let user = body.user.expect("login response carries the user");
    assert_eq!(user.email, "admin@hobbyclass.com");

    // The navbar view agrees.
    let me: SessionView = client
        .get(format!("{}/me", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(me.logged_in);
    assert_eq!(me.user.unwrap().id, user.id);
}

#[tokio::test]
async fn test_invalid_login_leaves_session_untouched() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = login(&client, &app.address, "admin", "wrong-password").await;
    assert_eq!(response.status(), 401);
    let body: LoginResponse = response.json().await.unwrap();
    assert!(!body.success);
    assert_eq!(body.message, "Invalid credentials");
    assert!(body.user.is_none());

    let me: SessionView = client
        .get(format!("{}/me", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!me.logged_in);
}

#[tokio::test]
async fn test_logout_clears_session() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    login(&client, &app.address, "student", "student123").await;
    let response = client
        .post(format!("{}/logout", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let me: SessionView = client
        .get(format!("{}/me", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!me.logged_in);
    assert!(me.user.is_none());
}

#[tokio::test]
async fn test_admin_session_is_denied_mentor_dashboard() {
    let app = spawn_app().await;
    let client = no_redirect_client();

    let response = login(&client, &app.address, "admin", "admin123").await;
    assert_eq!(response.status(), 200);

    // An admin is not a mentor: the guard answers with a redirect to the
    // login view, not an error status.
    let response = client
        .get(format!("{}/mentor-dashboard", app.address))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()["location"], "/login");

    // Subpaths sit behind the same gate.
    let response = client
        .get(format!("{}/mentor-dashboard/classes", app.address))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()["location"], "/login");
}

#[tokio::test]
async fn test_anonymous_is_denied_admin_dashboard() {
    let app = spawn_app().await;
    let client = no_redirect_client();

    let response = client
        .get(format!("{}/admin-dashboard/users", app.address))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()["location"], "/login");
}

#[tokio::test]
async fn test_student_dashboard_is_open() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    // No session at all; the browse board still answers.
    let response = client
        .get(format!("{}/student-dashboard/classes", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let classes: Vec<StudentClass> = response.json().await.unwrap();
    assert_eq!(classes.len(), 3);
}

#[tokio::test]
async fn test_unknown_path_redirects_to_register() {
    let app = spawn_app().await;
    let client = no_redirect_client();

    let response = client
        .get(format!("{}/does-not-exist", app.address))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()["location"], "/register");
}

#[tokio::test]
async fn test_register_acknowledges_without_creating_account() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/register", app.address))
        .json(&serde_json::json!({
            "username": "newbie", "email": "newbie@example.com", "password": "pw"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    // The submitted identity cannot log in: nothing entered the registry.
    let response = login(&client, &app.address, "newbie@example.com", "demo123").await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_register_rejects_missing_fields() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/register", app.address))
        .json(&serde_json::json!({ "username": "", "email": "a@b.com", "password": "pw" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}
