use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Admin Router Module
///
/// Defines the routes behind the admin guard: user management and the
/// registry counters. As with the mentor module, the guard is applied both as
/// a router layer and as an extractor inside each handler.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // GET /admin-dashboard
        // The dashboard's full view-model (counters + filtered users).
        .route("/admin-dashboard", get(handlers::get_admin_dashboard))
        // GET /admin-dashboard/users?role=...&search=...
        // The user-management listing with the dashboard's filter controls.
        .route("/admin-dashboard/users", get(handlers::list_users))
        // POST /admin-dashboard/users
        // Adds an account; the registry assigns the id.
        .route("/admin-dashboard/users", post(handlers::create_user))
        // PUT /admin-dashboard/users/{id}
        // Partial update of an existing account.
        .route("/admin-dashboard/users/{id}", put(handlers::update_user))
        // DELETE /admin-dashboard/users/{id}
        // Removes an account; unknown ids answer 404.
        .route("/admin-dashboard/users/{id}", delete(handlers::delete_user))
        // GET /admin-dashboard/stats
        // Registry counters, recomputed per request.
        .route("/admin-dashboard/stats", get(handlers::get_admin_stats))
}
