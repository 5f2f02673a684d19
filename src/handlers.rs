use crate::{
    AppState,
    auth::{AdminGuard, MentorGuard},
    dashboards,
    models::{
        AdminDashboardStats, AdminDashboardView, CreateClassRequest, CreateUserRequest,
        LoginRequest, LoginResponse, MentorClass, MentorDashboardStats, MentorDashboardView,
        MentorProfile, RegisterRequest, RegisterResponse, Role, SessionView, StudentClass,
        StudentDashboardStats, StudentDashboardView, StudentFilterOptions, UpdateUserRequest,
        User,
    },
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Redirect,
};
use serde::Deserialize;

// --- Filter Structs ---

/// UserFilter
///
/// Query parameters accepted by the admin user listing. Both fields mirror
/// the dashboard's filter controls: a role select (where "all" or absence
/// means no constraint) and a free-text search box.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct UserFilter {
    pub role: Option<String>,
    pub search: Option<String>,
}

/// ClassFilter
///
/// Query parameters for the mentor class listing: search box plus status
/// select ("all" or absence means no constraint).
#[derive(Deserialize, utoipa::IntoParams)]
pub struct ClassFilter {
    pub search: Option<String>,
    pub status: Option<String>,
}

/// BrowseFilter
///
/// Query parameters for the student browse board: specialization and
/// availability selects plus the search box.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct BrowseFilter {
    pub specialization: Option<String>,
    pub availability: Option<String>,
    pub search: Option<String>,
}

// --- Public Handlers ---

/// register_user
///
/// [Public Route] Accepts a registration submission. The original client
/// validated field presence and stopped there — no account is created — and
/// that contract is preserved: presence check, acknowledgment, no registry
/// mutation.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Submission accepted", body = RegisterResponse),
        (status = 400, description = "Missing fields", body = RegisterResponse)
    )
)]
pub async fn register_user(
    Json(payload): Json<RegisterRequest>,
) -> (StatusCode, Json<RegisterResponse>) {
    if payload.username.is_empty() || payload.email.is_empty() || payload.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(RegisterResponse {
                success: false,
                message: "All fields are required".to_string(),
            }),
        );
    }

    tracing::info!(username = %payload.username, "registration submitted");
    (
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "Registration submitted".to_string(),
        }),
    )
}

/// login
///
/// [Public Route] Resolves the submitted credentials through the session
/// service. A failed attempt answers 401 with the fixed failure message and
/// leaves the session untouched; a successful one carries the user and the
/// role-appropriate landing route.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = LoginResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> (StatusCode, Json<LoginResponse>) {
    let outcome = state.session.login(&payload.username, &payload.password).await;
    let status = if outcome.success {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    };
    (status, Json(outcome))
}

/// logout
///
/// [Public Route] Clears the session and its persisted copy. Calling it
/// without a session is a harmless no-op, so no guard applies.
#[utoipa::path(
    post,
    path = "/logout",
    responses((status = 204, description = "Session cleared"))
)]
pub async fn logout(State(state): State<AppState>) -> StatusCode {
    state.session.logout().await;
    StatusCode::NO_CONTENT
}

/// get_session
///
/// [Public Route] The navbar's session view. Never fails: anonymous visitors
/// simply get `logged_in: false`.
#[utoipa::path(
    get,
    path = "/me",
    responses((status = 200, description = "Current session", body = SessionView))
)]
pub async fn get_session(State(state): State<AppState>) -> Json<SessionView> {
    let user = state.session.current_user().await;
    Json(SessionView {
        logged_in: user.is_some(),
        user,
    })
}

/// fallback_redirect
///
/// Catch-all for unknown paths: send the client to the registration view,
/// the same way the SPA's wildcard route did.
pub async fn fallback_redirect() -> Redirect {
    Redirect::to("/register")
}

// --- Admin Dashboard Handlers ---

/// Resolves the role select's value. `Ok(None)` means no constraint;
/// `Err(())` flags an unrecognized value, which matches nothing.
fn role_constraint(raw: Option<&str>) -> Result<Option<Role>, ()> {
    match raw {
        None | Some("") | Some("all") => Ok(None),
        Some(raw) => Role::parse(raw).map(Some).ok_or(()),
    }
}

/// get_admin_dashboard
///
/// [Admin Route] The dashboard view-model in one response: registry counters
/// plus the user listing with the filter controls applied.
#[utoipa::path(
    get,
    path = "/admin-dashboard",
    params(UserFilter),
    responses((status = 200, description = "Dashboard view", body = AdminDashboardView))
)]
pub async fn get_admin_dashboard(
    AdminGuard(_admin): AdminGuard,
    State(state): State<AppState>,
    Query(filter): Query<UserFilter>,
) -> Json<AdminDashboardView> {
    let users = match role_constraint(filter.role.as_deref()) {
        Ok(role) => state.registry.search(role, filter.search).await,
        Err(()) => Vec::new(),
    };
    Json(AdminDashboardView {
        stats: state.registry.stats().await,
        users,
    })
}

/// list_users
///
/// [Admin Route] The user-management listing with the dashboard's two filter
/// controls applied. An unrecognized role value matches nothing rather than
/// everything, so a corrupted select can never widen the view.
#[utoipa::path(
    get,
    path = "/admin-dashboard/users",
    params(UserFilter),
    responses((status = 200, description = "Filtered users", body = [User]))
)]
pub async fn list_users(
    AdminGuard(_admin): AdminGuard,
    State(state): State<AppState>,
    Query(filter): Query<UserFilter>,
) -> Json<Vec<User>> {
    match role_constraint(filter.role.as_deref()) {
        Ok(role) => Json(state.registry.search(role, filter.search).await),
        Err(()) => Json(Vec::new()),
    }
}

/// create_user
///
/// [Admin Route] Adds an account. The registry assigns the id; the response
/// carries the stored record.
#[utoipa::path(
    post,
    path = "/admin-dashboard/users",
    request_body = CreateUserRequest,
    responses((status = 201, description = "User created", body = User))
)]
pub async fn create_user(
    AdminGuard(_admin): AdminGuard,
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> (StatusCode, Json<User>) {
    let user = state.registry.add(payload).await;
    tracing::info!(id = user.id, email = %user.email, "user added");
    (StatusCode::CREATED, Json(user))
}

/// update_user
///
/// [Admin Route] Merges the provided fields into an existing account.
#[utoipa::path(
    put,
    path = "/admin-dashboard/users/{id}",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated", body = User),
        (status = 404, description = "Unknown id")
    )
)]
pub async fn update_user(
    AdminGuard(_admin): AdminGuard,
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<User>, StatusCode> {
    match state.registry.update(id, payload).await {
        Some(user) => Ok(Json(user)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// delete_user
///
/// [Admin Route] Removes an account. Missing ids answer 404; nothing else
/// changes in that case.
#[utoipa::path(
    delete,
    path = "/admin-dashboard/users/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown id")
    )
)]
pub async fn delete_user(
    AdminGuard(_admin): AdminGuard,
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> StatusCode {
    if state.registry.delete(id).await {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

/// get_admin_stats
///
/// [Admin Route] Headline counters, recomputed from the registry per request.
#[utoipa::path(
    get,
    path = "/admin-dashboard/stats",
    responses((status = 200, description = "Registry counters", body = AdminDashboardStats))
)]
pub async fn get_admin_stats(
    AdminGuard(_admin): AdminGuard,
    State(state): State<AppState>,
) -> Json<AdminDashboardStats> {
    Json(state.registry.stats().await)
}

// --- Mentor Dashboard Handlers ---

/// get_mentor_dashboard
///
/// [Mentor Route] The dashboard view-model in one response: board counters
/// plus the class list with search and status filter applied.
#[utoipa::path(
    get,
    path = "/mentor-dashboard",
    params(ClassFilter),
    responses((status = 200, description = "Dashboard view", body = MentorDashboardView))
)]
pub async fn get_mentor_dashboard(
    MentorGuard(_mentor): MentorGuard,
    State(state): State<AppState>,
    Query(filter): Query<ClassFilter>,
) -> Json<MentorDashboardView> {
    let board = state.mentor_board.read().await;
    Json(MentorDashboardView {
        stats: board.stats(),
        classes: board.filter(filter.search.as_deref(), filter.status.as_deref()),
    })
}

/// list_classes
///
/// [Mentor Route] The mentor's class list with search and status filter
/// applied.
#[utoipa::path(
    get,
    path = "/mentor-dashboard/classes",
    params(ClassFilter),
    responses((status = 200, description = "Filtered classes", body = [MentorClass]))
)]
pub async fn list_classes(
    MentorGuard(_mentor): MentorGuard,
    State(state): State<AppState>,
    Query(filter): Query<ClassFilter>,
) -> Json<Vec<MentorClass>> {
    let board = state.mentor_board.read().await;
    Json(board.filter(filter.search.as_deref(), filter.status.as_deref()))
}

/// create_class
///
/// [Mentor Route] Proposes a new class. Enrollment starts at zero no matter
/// what the form claimed.
#[utoipa::path(
    post,
    path = "/mentor-dashboard/classes",
    request_body = CreateClassRequest,
    responses((status = 201, description = "Class created", body = MentorClass))
)]
pub async fn create_class(
    MentorGuard(_mentor): MentorGuard,
    State(state): State<AppState>,
    Json(payload): Json<CreateClassRequest>,
) -> (StatusCode, Json<MentorClass>) {
    let mut board = state.mentor_board.write().await;
    let class = board.add(payload);
    tracing::info!(id = class.id, title = %class.title, "class added");
    (StatusCode::CREATED, Json(class))
}

/// delete_class
///
/// [Mentor Route] Removes a class from the board.
#[utoipa::path(
    delete,
    path = "/mentor-dashboard/classes/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown id")
    )
)]
pub async fn delete_class(
    MentorGuard(_mentor): MentorGuard,
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> StatusCode {
    let mut board = state.mentor_board.write().await;
    if board.remove(id) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

/// activate_class
///
/// [Mentor Route] Puts a class into the active state. Re-activating an
/// already active class is a visible no-op.
#[utoipa::path(
    put,
    path = "/mentor-dashboard/classes/{id}/activate",
    responses(
        (status = 200, description = "Class active", body = MentorClass),
        (status = 404, description = "Unknown id")
    )
)]
pub async fn activate_class(
    MentorGuard(_mentor): MentorGuard,
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<MentorClass>, StatusCode> {
    let mut board = state.mentor_board.write().await;
    board.activate(id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// deactivate_class
///
/// [Mentor Route] Takes a class out of the active state.
#[utoipa::path(
    put,
    path = "/mentor-dashboard/classes/{id}/deactivate",
    responses(
        (status = 200, description = "Class inactive", body = MentorClass),
        (status = 404, description = "Unknown id")
    )
)]
pub async fn deactivate_class(
    MentorGuard(_mentor): MentorGuard,
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<MentorClass>, StatusCode> {
    let mut board = state.mentor_board.write().await;
    board.deactivate(id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// get_mentor_stats
///
/// [Mentor Route] Class counters, recomputed from the board per request.
#[utoipa::path(
    get,
    path = "/mentor-dashboard/stats",
    responses((status = 200, description = "Board counters", body = MentorDashboardStats))
)]
pub async fn get_mentor_stats(
    MentorGuard(_mentor): MentorGuard,
    State(state): State<AppState>,
) -> Json<MentorDashboardStats> {
    let board = state.mentor_board.read().await;
    Json(board.stats())
}

/// get_mentor_profile
///
/// [Mentor Route] The profile page data, personalized with the session
/// mentor's name.
#[utoipa::path(
    get,
    path = "/mentor-profile",
    responses((status = 200, description = "Profile", body = MentorProfile))
)]
pub async fn get_mentor_profile(MentorGuard(mentor): MentorGuard) -> Json<MentorProfile> {
    Json(dashboards::mentor_profile_for(&mentor))
}

// --- Student Dashboard Handlers ---

/// get_student_dashboard
///
/// [Open Route] The browse board's view-model in one response: counters plus
/// the filtered class list. `matching_search` always equals the length of the
/// list riding alongside it.
#[utoipa::path(
    get,
    path = "/student-dashboard",
    params(BrowseFilter),
    responses((status = 200, description = "Dashboard view", body = StudentDashboardView))
)]
pub async fn get_student_dashboard(
    State(state): State<AppState>,
    Query(filter): Query<BrowseFilter>,
) -> Json<StudentDashboardView> {
    let board = state.student_board.read().await;
    Json(StudentDashboardView {
        stats: board.stats(
            filter.specialization.as_deref(),
            filter.availability.as_deref(),
            filter.search.as_deref(),
        ),
        classes: board.filter(
            filter.specialization.as_deref(),
            filter.availability.as_deref(),
            filter.search.as_deref(),
        ),
    })
}

/// browse_classes
///
/// [Open Route] The student browse board with all three filter controls
/// applied. No guard: the student dashboard is reachable without a session.
#[utoipa::path(
    get,
    path = "/student-dashboard/classes",
    params(BrowseFilter),
    responses((status = 200, description = "Filtered classes", body = [StudentClass]))
)]
pub async fn browse_classes(
    State(state): State<AppState>,
    Query(filter): Query<BrowseFilter>,
) -> Json<Vec<StudentClass>> {
    let board = state.student_board.read().await;
    Json(board.filter(
        filter.specialization.as_deref(),
        filter.availability.as_deref(),
        filter.search.as_deref(),
    ))
}

/// enroll_class
///
/// [Open Route] Marks a class as enrolled. Enrolling twice is a visible
/// no-op; unknown ids answer 404.
#[utoipa::path(
    post,
    path = "/student-dashboard/classes/{id}/enroll",
    responses(
        (status = 200, description = "Enrolled", body = StudentClass),
        (status = 404, description = "Unknown id")
    )
)]
pub async fn enroll_class(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<StudentClass>, StatusCode> {
    let mut board = state.student_board.write().await;
    match board.enroll(id) {
        Some(class) => {
            tracing::info!(id = class.id, name = %class.name, "student enrolled");
            Ok(Json(class))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// get_student_stats
///
/// [Open Route] Browse-board counters; `matching_search` honors the same
/// filter parameters as the listing so the two always agree.
#[utoipa::path(
    get,
    path = "/student-dashboard/stats",
    params(BrowseFilter),
    responses((status = 200, description = "Board counters", body = StudentDashboardStats))
)]
pub async fn get_student_stats(
    State(state): State<AppState>,
    Query(filter): Query<BrowseFilter>,
) -> Json<StudentDashboardStats> {
    let board = state.student_board.read().await;
    Json(board.stats(
        filter.specialization.as_deref(),
        filter.availability.as_deref(),
        filter.search.as_deref(),
    ))
}

/// get_student_filters
///
/// [Open Route] The filter select option lists.
#[utoipa::path(
    get,
    path = "/student-dashboard/filters",
    responses((status = 200, description = "Filter options", body = StudentFilterOptions))
)]
pub async fn get_student_filters() -> Json<StudentFilterOptions> {
    Json(dashboards::StudentBoard::filter_options())
}
