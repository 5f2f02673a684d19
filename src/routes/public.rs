use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Defines endpoints reachable with no session at all. The student dashboard
/// lives here deliberately: browsing classes is open, only the mentor and
/// admin views sit behind guards.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // A simple, unauthenticated endpoint used for monitoring checks.
        // Returns "ok" immediately to verify the service is responsive.
        .route("/health", get(|| async { "ok" }))
        // POST /register
        // Registration submissions. Acknowledgment-only: the original client
        // validated the form and stopped there, and so does this endpoint.
        .route("/register", post(handlers::register_user))
        // POST /login
        // The credential check. Success establishes the process-wide session
        // and reports the role-appropriate landing route.
        .route("/login", post(handlers::login))
        // POST /logout
        // Clears the session. Open because a sessionless logout is a no-op.
        .route("/logout", post(handlers::logout))
        // GET /me
        // The navbar's session view: {logged_in, user}. Never errors.
        .route("/me", get(handlers::get_session))
        // GET /student-dashboard
        // The browse board's full view-model (counters + filtered classes).
        // Open: reachable without a session.
        .route("/student-dashboard", get(handlers::get_student_dashboard))
        // GET /student-dashboard/classes?specialization=...&availability=...&search=...
        // The browse board with its three-way filter.
        .route(
            "/student-dashboard/classes",
            get(handlers::browse_classes),
        )
        // POST /student-dashboard/classes/{id}/enroll
        // Marks a class enrolled on the browse board.
        .route(
            "/student-dashboard/classes/{id}/enroll",
            post(handlers::enroll_class),
        )
        // GET /student-dashboard/stats
        // Browse-board counters, honoring the same filter parameters.
        .route("/student-dashboard/stats", get(handlers::get_student_stats))
        // GET /student-dashboard/filters
        // The select option lists above the class grid.
        .route(
            "/student-dashboard/filters",
            get(handlers::get_student_filters),
        )
}
