use axum::{
    Router,
    extract::{FromRef, Request},
    http::HeaderName,
    middleware::{self, Next},
    response::Response,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod auth;
pub mod config;
pub mod dashboards;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod storage;

// Module for routing segregation (Public, Mentor, Admin).
pub mod routes;
use auth::{AdminGuard, MentorGuard};
use routes::{admin, mentor, public};

// --- Public Re-exports ---

// Makes core state types easily accessible to the entry point and the tests.
pub use auth::{SessionService, SessionState};
pub use config::AppConfig;
pub use dashboards::{MentorBoard, MentorBoardState, StudentBoard, StudentBoardState};
pub use repository::{InMemoryRegistry, RegistryState, UserStore};
pub use storage::{
    FileSessionStorage, MockSessionStorage, NullSessionStorage, SessionStorage, StorageState,
};

/// ApiDoc
///
/// Auto-generates the OpenAPI documentation (Swagger JSON) for the
/// application, aggregating every path and schema decorated with the
/// `#[utoipa::path]` and `#[derive(utoipa::ToSchema)]` macros. The resulting
/// JSON is served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::register_user, handlers::login, handlers::logout, handlers::get_session,
        handlers::get_admin_dashboard, handlers::list_users, handlers::create_user,
        handlers::update_user, handlers::delete_user, handlers::get_admin_stats,
        handlers::get_mentor_dashboard, handlers::list_classes, handlers::create_class,
        handlers::delete_class, handlers::activate_class, handlers::deactivate_class,
        handlers::get_mentor_stats, handlers::get_mentor_profile,
        handlers::get_student_dashboard, handlers::browse_classes, handlers::enroll_class,
        handlers::get_student_stats, handlers::get_student_filters
    ),
    components(
        schemas(
            models::User, models::Role, models::UserStatus,
            models::MentorClass, models::ClassStatus,
            models::StudentClass, models::Availability,
            models::LoginRequest, models::LoginResponse,
            models::RegisterRequest, models::RegisterResponse,
            models::CreateUserRequest, models::UpdateUserRequest,
            models::CreateClassRequest, models::SessionView,
            models::AdminDashboardStats, models::MentorDashboardStats,
            models::StudentDashboardStats, models::AdminDashboardView,
            models::MentorDashboardView, models::StudentDashboardView,
            models::MentorProfile,
            models::FilterOption, models::StudentFilterOptions,
        )
    ),
    tags(
        (name = "hobbyclass-portal", description = "HobbyClass learning marketplace API")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single, thread-safe container holding all application services and
/// configuration, shared across all incoming requests. One AppState is one
/// client instance: the session slot inside it is process-wide.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory user registry.
    pub registry: RegistryState,
    /// The process-wide session (current user + transitions).
    pub session: SessionState,
    /// The session persistence backend behind the session service.
    pub storage: StorageState,
    /// The mentor dashboard's class board.
    pub mentor_board: MentorBoardState,
    /// The student dashboard's browse board.
    pub student_board: StudentBoardState,
    /// The loaded, immutable environment configuration.
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// These allow handlers and guards to pull individual services out of the
// shared AppState.

impl FromRef<AppState> for RegistryState {
    fn from_ref(app_state: &AppState) -> RegistryState {
        app_state.registry.clone()
    }
}

impl FromRef<AppState> for SessionState {
    fn from_ref(app_state: &AppState) -> SessionState {
        app_state.session.clone()
    }
}

impl FromRef<AppState> for StorageState {
    fn from_ref(app_state: &AppState) -> StorageState {
        app_state.storage.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// admin_gate
///
/// Route-layer middleware for the admin router. Extracting `AdminGuard`
/// performs the whole check: if there is no admin session the extractor
/// rejects the request with a redirect to `/login` and the inner handler
/// never runs.
async fn admin_gate(_guard: AdminGuard, request: Request, next: Next) -> Response {
    next.run(request).await
}

/// mentor_gate
///
/// Route-layer middleware for the mentor router; same mechanism as
/// `admin_gate` with the mentor predicate.
async fn mentor_gate(_guard: MentorGuard, request: Request, next: Next) -> Response {
    next.run(request).await
}

/// create_router
///
/// Assembles the application's entire routing structure, applies global and
/// scoped middleware, and registers the application state.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for Request Correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Base Router Assembly
    let base_router = Router::new()
        // Documentation: Serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Open Routes: no guard.
        .merge(public::public_routes())
        // Mentor Routes: guarded at the module boundary.
        .merge(
            mentor::mentor_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), mentor_gate)),
        )
        // Admin Routes: guarded at the module boundary.
        .merge(
            admin::admin_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), admin_gate)),
        )
        // Unknown paths land on the registration view, like the SPA's
        // wildcard route.
        .fallback(handlers::fallback_redirect)
        // Apply the Unified State to all routes.
        .with_state(state);

    // 3. Observability and Correlation Layers (Applied outermost/first)
    base_router
        .layer(
            ServiceBuilder::new()
                // 3a. Request ID Generation: a unique id for every request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 3b. Request Tracing: wraps the request/response lifecycle
                // in a span carrying the generated request id.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 3c. Request ID Propagation back to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS Layer
        .layer(cors)
}

/// trace_span_logger
///
/// Helper used by `TraceLayer` to customize span creation: includes the
/// `x-request-id` header (if present) alongside the HTTP method and URI so
/// every log line for one request correlates.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
