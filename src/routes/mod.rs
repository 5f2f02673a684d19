/// Router Module Index
///
/// Organizes the application's routing logic into access-segregated modules.
/// The split mirrors the view structure: open views, mentor-only views, and
/// admin-only views, with the guard applied once at each module boundary so
/// no protected endpoint can be wired up unguarded by accident.

/// Routes accessible without a session: registration, login, the navbar's
/// session view, and the student browse board.
pub mod public;

/// Routes restricted to a mentor session: the mentor dashboard and the
/// mentor profile page.
pub mod mentor;

/// Routes restricted to an admin session: the user-management dashboard.
pub mod admin;
