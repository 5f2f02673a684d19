use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::Redirect,
};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    models::{LoginResponse, Role, User},
    repository::RegistryState,
    storage::StorageState,
};

// --- Fixed Credential Table ---
//
// The three role credentials resolve to specific registry accounts: the first
// admin, and the mentor/student carrying the well-known @hobbyclass.com
// email. Any other registered user signs in with email-or-name plus the
// shared demo password.
const ADMIN_CREDENTIALS: (&str, &str) = ("admin", "admin123");
const MENTOR_CREDENTIALS: (&str, &str) = ("mentor", "mentor123");
const STUDENT_CREDENTIALS: (&str, &str) = ("student", "student123");

const MENTOR_LOGIN_EMAIL: &str = "mentor@hobbyclass.com";
const STUDENT_LOGIN_EMAIL: &str = "student@hobbyclass.com";

const LOGIN_OK: &str = "Login successful";
const LOGIN_FAILED: &str = "Invalid credentials";

/// SessionService
///
/// Owns the process-wide session: at most one authenticated user at a time,
/// which models the original single-client execution. All reads and
/// transitions go through this service; there is no other handle to the
/// session slot.
///
/// The slot is an `Option<User>` — "logged in" and "a user is present" are
/// the same fact, so the two can never disagree.
pub struct SessionService {
    registry: RegistryState,
    storage: StorageState,
    demo_password: String,
    current: RwLock<Option<User>>,
}

/// SessionState
///
/// The concrete type used to share the session service across the
/// application state.
pub type SessionState = Arc<SessionService>;

impl SessionService {
    pub fn new(registry: RegistryState, storage: StorageState, demo_password: String) -> Self {
        Self {
            registry,
            storage,
            demo_password,
            current: RwLock::new(None),
        }
    }

    /// restore
    ///
    /// Loads the record persisted by a previous run, if any, and makes it the
    /// current session. A corrupt record is logged and discarded; startup
    /// never fails on session state.
    pub async fn restore(&self) {
        let Some(payload) = self.storage.load().await else {
            return;
        };
        match serde_json::from_str::<User>(&payload) {
            Ok(user) => {
                tracing::info!(user = %user.email, "restored persisted session");
                *self.current.write().await = Some(user);
            }
            Err(e) => {
                tracing::warn!("ignoring unreadable persisted session: {e}");
            }
        }
    }

    /// login
    ///
    /// Checks the submitted credentials against the fixed role table and the
    /// demo-password fallback. On success the session is set to the resolved
    /// user and persisted; on failure nothing changes and the caller gets the
    /// fixed failure message.
    ///
    /// A role credential whose fixed account has been deleted from the
    /// registry falls through to the failure outcome instead of crashing —
    /// the lookup miss and the bad-password case are indistinguishable to
    /// the caller.
    pub async fn login(&self, username: &str, password: &str) -> LoginResponse {
        let resolved = if (username, password) == ADMIN_CREDENTIALS {
            self.registry.find_by_role(Role::Admin).await
        } else if (username, password) == MENTOR_CREDENTIALS {
            self.registry
                .find_by_role_and_email(Role::Mentor, MENTOR_LOGIN_EMAIL)
                .await
        } else if (username, password) == STUDENT_CREDENTIALS {
            self.registry
                .find_by_role_and_email(Role::Student, STUDENT_LOGIN_EMAIL)
                .await
        } else if password == self.demo_password {
            // Any registered user: email or name, both case-insensitive.
            self.registry.find_by_identifier(username).await
        } else {
            None
        };

        let Some(user) = resolved else {
            return LoginResponse {
                success: false,
                message: LOGIN_FAILED.to_string(),
                user: None,
                redirect: None,
            };
        };

        self.establish(user.clone()).await;

        LoginResponse {
            success: true,
            message: LOGIN_OK.to_string(),
            redirect: Some(user.role.landing_route().to_string()),
            user: Some(user),
        }
    }

    /// Sets the session to the given user and persists it, best-effort.
    async fn establish(&self, user: User) {
        match serde_json::to_string(&user) {
            Ok(payload) => {
                if let Err(e) = self.storage.save(&payload).await {
                    tracing::warn!("session persistence failed, continuing: {e}");
                }
            }
            Err(e) => tracing::warn!("session serialization failed, continuing: {e}"),
        }
        tracing::info!(user = %user.email, role = ?user.role, "session established");
        *self.current.write().await = Some(user);
    }

    /// logout
    ///
    /// Clears the session and its persisted copy. Idempotent: logging out
    /// with no session is a no-op.
    pub async fn logout(&self) {
        *self.current.write().await = None;
        if let Err(e) = self.storage.clear().await {
            tracing::warn!("clearing persisted session failed: {e}");
        }
        tracing::info!("session cleared");
    }

    /// The current session user, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    pub async fn logged_in(&self) -> bool {
        self.current.read().await.is_some()
    }

    // Role predicates. False whenever there is no session.
    pub async fn is_admin(&self) -> bool {
        self.has_role(Role::Admin).await
    }

    pub async fn is_mentor(&self) -> bool {
        self.has_role(Role::Mentor).await
    }

    pub async fn is_student(&self) -> bool {
        self.has_role(Role::Student).await
    }

    async fn has_role(&self, role: Role) -> bool {
        self.current
            .read()
            .await
            .as_ref()
            .map_or(false, |u| u.role == role)
    }
}

// --- Route Guards ---

/// AdminGuard
///
/// Gate for the admin dashboard: a session must be present and its user must
/// be an admin. Implemented as an extractor so a failed check rejects the
/// request before the handler runs — and the rejection is a redirect to the
/// login view, never an error status.
#[derive(Debug, Clone)]
pub struct AdminGuard(pub User);

impl<S> FromRequestParts<S> for AdminGuard
where
    S: Send + Sync,
    SessionState: FromRef<S>,
{
    type Rejection = Redirect;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = SessionState::from_ref(state);
        match session.current_user().await {
            Some(user) if user.role == Role::Admin => Ok(AdminGuard(user)),
            _ => Err(Redirect::to("/login")),
        }
    }
}

/// MentorGuard
///
/// Gate for the mentor dashboard and profile: session present, role mentor.
/// Same redirect-on-failure contract as the admin guard.
#[derive(Debug, Clone)]
pub struct MentorGuard(pub User);

impl<S> FromRequestParts<S> for MentorGuard
where
    S: Send + Sync,
    SessionState: FromRef<S>,
{
    type Rejection = Redirect;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = SessionState::from_ref(state);
        match session.current_user().await {
            Some(user) if user.role == Role::Mentor => Ok(MentorGuard(user)),
            _ => Err(Redirect::to("/login")),
        }
    }
}
