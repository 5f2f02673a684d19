use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

// --- Core Application Schemas ---

/// Role
///
/// The closed set of account roles. The registry and the guards only ever see
/// these three variants; an out-of-range role string is rejected at the serde
/// boundary rather than carried around as free-form text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Role {
    Admin,
    Mentor,
    Student,
}

impl Role {
    /// Parses a lowercase role string, as submitted by select-style filter
    /// fields. Returns None for anything outside the closed set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "mentor" => Some(Role::Mentor),
            "student" => Some(Role::Student),
            _ => None,
        }
    }

    /// The dashboard a user of this role lands on after login.
    pub fn landing_route(&self) -> &'static str {
        match self {
            Role::Admin => "/admin-dashboard",
            Role::Mentor => "/mentor-dashboard",
            Role::Student => "/student-dashboard",
        }
    }
}

/// UserStatus
///
/// Account activation state. Purely informational on the dashboards; an
/// inactive user can still authenticate through the demo credential table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum UserStatus {
    Active,
    Inactive,
}

/// User
///
/// The canonical account record held by the in-memory registry. Ids are small
/// monotonically assigned integers owned by the registry; the seed data
/// occupies ids 1 through 5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
}

/// ClassStatus
///
/// Lifecycle state of a mentor-offered class. `Pending` exists in the data
/// model (a freshly proposed class awaiting publication) but the seed data
/// only uses active/inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ClassStatus {
    Active,
    Inactive,
    Pending,
}

impl ClassStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(ClassStatus::Active),
            "inactive" => Some(ClassStatus::Inactive),
            "pending" => Some(ClassStatus::Pending),
            _ => None,
        }
    }
}

/// Availability
///
/// Live availability of a class/mentor on the student browse board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Availability {
    Available,
    Offline,
    Busy,
}

impl Availability {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(Availability::Available),
            "offline" => Some(Availability::Offline),
            "busy" => Some(Availability::Busy),
            _ => None,
        }
    }
}

/// MentorClass
///
/// A class as managed on the mentor dashboard. `current_students` is seed
/// data only — enrollment through the student board does not feed back into
/// this list, mirroring the two boards' independent data sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct MentorClass {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub max_students: u32,
    pub current_students: u32,
    pub description: String,
    pub image_url: String,
    pub status: ClassStatus,
}

/// StudentClass
///
/// A class as browsed on the student dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct StudentClass {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub availability: Availability,
    pub mentor_name: String,
    pub description: String,
    pub enrolled: bool,
}

// --- Request Payloads (Input Schemas) ---

/// LoginRequest
///
/// Credentials as typed into the login form. `username` is matched against
/// the fixed role credentials first, then against registered emails/names.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// RegisterRequest
///
/// Input payload for the public registration endpoint (POST /register).
/// Registration is acknowledgment-only: the submitted data is validated for
/// presence but never enters the registry.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

fn default_user_status() -> UserStatus {
    UserStatus::Active
}

/// CreateUserRequest
///
/// Admin-dashboard payload for adding a user. The id is assigned by the
/// registry; status defaults to active the way the add-user form does.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default = "default_user_status")]
    pub status: UserStatus,
}

/// UpdateUserRequest
///
/// Partial update for an existing user. `Option<T>` fields with
/// `skip_serializing_if` so only provided fields travel in the payload;
/// absent fields leave the record untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

fn default_class_status() -> ClassStatus {
    ClassStatus::Active
}

/// CreateClassRequest
///
/// Mentor-dashboard payload for proposing a new class. A new class always
/// starts with zero enrolled students regardless of the submitted form state.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct CreateClassRequest {
    pub title: String,
    pub category: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub max_students: u32,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default = "default_class_status")]
    pub status: ClassStatus,
}

// --- Response Schemas (Output) ---

/// LoginResponse
///
/// Outcome of a login attempt. On success `user` carries the session user and
/// `redirect` the role-appropriate landing route; on failure both are absent
/// and `message` holds the fixed UI-visible text.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

/// RegisterResponse
///
/// Acknowledgment for a registration submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
}

/// SessionView
///
/// The navbar's view of the session: who is logged in, if anyone. Always a
/// 200; `logged_in` is false and `user` absent for anonymous visitors.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct SessionView {
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// AdminDashboardStats
///
/// Headline counters for the admin dashboard, recomputed from the registry on
/// every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct AdminDashboardStats {
    pub total_users: u64,
    pub active_users: u64,
    pub mentors: u64,
    pub students: u64,
}

/// MentorDashboardStats
///
/// Counters over the mentor's class list. Derived from the list itself on
/// demand, never incremented alongside mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct MentorDashboardStats {
    pub total_classes: u64,
    pub active_classes: u64,
    pub students_enrolled: u64,
}

/// StudentDashboardStats
///
/// Counters for the student browse board. `matching_search` reflects the
/// filter parameters supplied with the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct StudentDashboardStats {
    pub total_classes: u64,
    pub available_now: u64,
    pub matching_search: u64,
}

/// AdminDashboardView
///
/// The admin dashboard's full view-model: the filtered user listing plus the
/// registry counters, assembled in one response.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct AdminDashboardView {
    pub stats: AdminDashboardStats,
    pub users: Vec<User>,
}

/// MentorDashboardView
///
/// The mentor dashboard's full view-model: filtered classes plus the board
/// counters.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct MentorDashboardView {
    pub stats: MentorDashboardStats,
    pub classes: Vec<MentorClass>,
}

/// StudentDashboardView
///
/// The student dashboard's full view-model: filtered classes plus the board
/// counters.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct StudentDashboardView {
    pub stats: StudentDashboardStats,
    pub classes: Vec<StudentClass>,
}

/// MentorProfile
///
/// The mentor profile page data. The name comes from the session user; the
/// rest is fixed presentation copy.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct MentorProfile {
    pub name: String,
    pub title: String,
    pub description: String,
    pub profile_image: String,
    pub work_image: String,
}

/// FilterOption
///
/// One entry of a select-style filter (value + display label).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

/// StudentFilterOptions
///
/// The option lists backing the student dashboard's filter selects.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct StudentFilterOptions {
    pub specializations: Vec<FilterOption>,
    pub mentor_filters: Vec<FilterOption>,
}
