use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Mentor Router Module
///
/// Defines the routes behind the mentor guard: the class-management dashboard
/// and the profile page. The guard middleware is layered onto this router in
/// `create_router`; every handler here additionally takes the `MentorGuard`
/// extractor, so a route can never be reached without a mentor session even
/// if the layer were forgotten.
pub fn mentor_routes() -> Router<AppState> {
    Router::new()
        // GET /mentor-dashboard
        // The dashboard's full view-model (counters + filtered classes).
        .route("/mentor-dashboard", get(handlers::get_mentor_dashboard))
        // GET /mentor-dashboard/classes?search=...&status=...
        // The mentor's class list with search and status filter.
        .route("/mentor-dashboard/classes", get(handlers::list_classes))
        // POST /mentor-dashboard/classes
        // Proposes a new class; enrollment starts at zero.
        .route("/mentor-dashboard/classes", post(handlers::create_class))
        // DELETE /mentor-dashboard/classes/{id}
        // Removes a class from the board.
        .route(
            "/mentor-dashboard/classes/{id}",
            delete(handlers::delete_class),
        )
        // PUT /mentor-dashboard/classes/{id}/activate | /deactivate
        // Status transitions. Idempotent; 404 only for unknown ids.
        .route(
            "/mentor-dashboard/classes/{id}/activate",
            put(handlers::activate_class),
        )
        .route(
            "/mentor-dashboard/classes/{id}/deactivate",
            put(handlers::deactivate_class),
        )
        // GET /mentor-dashboard/stats
        // Counters recomputed from the class list.
        .route("/mentor-dashboard/stats", get(handlers::get_mentor_stats))
        // GET /mentor-profile
        // The profile page data, personalized with the session mentor's name.
        .route("/mentor-profile", get(handlers::get_mentor_profile))
}
