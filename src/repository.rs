use crate::models::{AdminDashboardStats, CreateUserRequest, Role, UpdateUserRequest, User, UserStatus};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// UserStore Trait
///
/// Defines the abstract contract for the user registry. Handlers and the
/// session service interact with accounts through this trait without knowing
/// the backing implementation (in-memory today, anything else tomorrow).
///
/// **Send + Sync + async_trait** are required to make the trait object
/// (`Arc<dyn UserStore>`) safely shareable across Axum's async task
/// boundaries.
#[async_trait]
pub trait UserStore: Send + Sync {
    // --- Retrieval ---
    /// Returns a copy of every account, in insertion order.
    async fn list(&self) -> Vec<User>;
    /// Single-account lookup by id.
    async fn get(&self, id: u64) -> Option<User>;
    /// Filtered listing for the admin dashboard: role equality AND
    /// case-insensitive substring match on name or email. Either constraint
    /// may be absent.
    async fn search(&self, role: Option<Role>, term: Option<String>) -> Vec<User>;

    // --- Login lookups ---
    /// First account carrying the given role, in insertion order.
    async fn find_by_role(&self, role: Role) -> Option<User>;
    /// Account carrying the given role AND exact email.
    async fn find_by_role_and_email(&self, role: Role, email: &str) -> Option<User>;
    /// Account whose email or name equals the identifier, both compared
    /// case-insensitively.
    async fn find_by_identifier(&self, identifier: &str) -> Option<User>;

    // --- Mutation ---
    /// Adds an account, assigning the next id from the registry's monotonic
    /// counter. No uniqueness constraints on email or name.
    async fn add(&self, req: CreateUserRequest) -> User;
    /// Merges the provided fields into an existing account. None if the id is
    /// unknown.
    async fn update(&self, id: u64, req: UpdateUserRequest) -> Option<User>;
    /// Removes an account. True iff the id existed.
    async fn delete(&self, id: u64) -> bool;

    /// Compiles the admin dashboard counters from the current account list.
    async fn stats(&self) -> AdminDashboardStats;
}

/// RegistryState
///
/// The concrete type used to share registry access across the application state.
pub type RegistryState = Arc<dyn UserStore>;

struct RegistryInner {
    users: Vec<User>,
    // Monotonic id source. Independent of current list contents, so deleting
    // the highest id never causes reuse and an empty registry still assigns
    // a well-defined first id.
    next_id: u64,
}

/// InMemoryRegistry
///
/// The concrete `UserStore` implementation: a `Vec<User>` behind a
/// `tokio::sync::RwLock`. All mutation goes through the trait methods; there
/// is no other handle to the list.
pub struct InMemoryRegistry {
    inner: RwLock<RegistryInner>,
}

impl InMemoryRegistry {
    /// Creates an empty registry. The first added account receives id 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RegistryInner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// seeded
    ///
    /// The demo account fixture: five users spanning the three roles. The
    /// mentor/student entries at `@hobbyclass.com` are the fixed targets of
    /// the role credential table.
    pub fn seeded() -> Self {
        let users = vec![
            User {
                id: 1,
                name: "John Doe".to_string(),
                email: "johndoe@gmail.com".to_string(),
                role: Role::Mentor,
                status: UserStatus::Active,
            },
            User {
                id: 2,
                name: "Jane Doe".to_string(),
                email: "janedoe@gmail.com".to_string(),
                role: Role::Student,
                status: UserStatus::Active,
            },
            User {
                id: 3,
                name: "Admin User".to_string(),
                email: "admin@hobbyclass.com".to_string(),
                role: Role::Admin,
                status: UserStatus::Active,
            },
            User {
                id: 4,
                name: "Alice Student".to_string(),
                email: "student@hobbyclass.com".to_string(),
                role: Role::Student,
                status: UserStatus::Active,
            },
            User {
                id: 5,
                name: "Bob Mentor".to_string(),
                email: "mentor@hobbyclass.com".to_string(),
                role: Role::Mentor,
                status: UserStatus::Active,
            },
        ];
        let next_id = users.len() as u64 + 1;
        Self {
            inner: RwLock::new(RegistryInner { users, next_id }),
        }
    }
}

impl Default for InMemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// matches_term
///
/// The admin dashboard's search predicate: case-insensitive substring match
/// on name or email. An empty term matches everything, the way a cleared
/// search box does.
fn matches_term(user: &User, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    user.name.to_lowercase().contains(&needle) || user.email.to_lowercase().contains(&needle)
}

#[async_trait]
impl UserStore for InMemoryRegistry {
    async fn list(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    async fn get(&self, id: u64) -> Option<User> {
        let inner = self.inner.read().await;
        inner.users.iter().find(|u| u.id == id).cloned()
    }

    async fn search(&self, role: Option<Role>, term: Option<String>) -> Vec<User> {
        let inner = self.inner.read().await;
        inner
            .users
            .iter()
            .filter(|u| role.map_or(true, |r| u.role == r))
            .filter(|u| term.as_deref().map_or(true, |t| matches_term(u, t)))
            .cloned()
            .collect()
    }

    async fn find_by_role(&self, role: Role) -> Option<User> {
        let inner = self.inner.read().await;
        inner.users.iter().find(|u| u.role == role).cloned()
    }

    async fn find_by_role_and_email(&self, role: Role, email: &str) -> Option<User> {
        let inner = self.inner.read().await;
        inner
            .users
            .iter()
            .find(|u| u.role == role && u.email == email)
            .cloned()
    }

    async fn find_by_identifier(&self, identifier: &str) -> Option<User> {
        let needle = identifier.to_lowercase();
        let inner = self.inner.read().await;
        inner
            .users
            .iter()
            .find(|u| u.email.to_lowercase() == needle || u.name.to_lowercase() == needle)
            .cloned()
    }

    async fn add(&self, req: CreateUserRequest) -> User {
        let mut inner = self.inner.write().await;
        let user = User {
            id: inner.next_id,
            name: req.name,
            email: req.email,
            role: req.role,
            status: req.status,
        };
        inner.next_id += 1;
        inner.users.push(user.clone());
        user
    }

    async fn update(&self, id: u64, req: UpdateUserRequest) -> Option<User> {
        let mut inner = self.inner.write().await;
        let user = inner.users.iter_mut().find(|u| u.id == id)?;
        if let Some(name) = req.name {
            user.name = name;
        }
        if let Some(email) = req.email {
            user.email = email;
        }
        if let Some(role) = req.role {
            user.role = role;
        }
        if let Some(status) = req.status {
            user.status = status;
        }
        Some(user.clone())
    }

    async fn delete(&self, id: u64) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.users.len();
        inner.users.retain(|u| u.id != id);
        inner.users.len() < before
    }

    async fn stats(&self) -> AdminDashboardStats {
        let inner = self.inner.read().await;
        let users = &inner.users;
        AdminDashboardStats {
            total_users: users.len() as u64,
            active_users: users.iter().filter(|u| u.status == UserStatus::Active).count() as u64,
            mentors: users.iter().filter(|u| u.role == Role::Mentor).count() as u64,
            students: users.iter().filter(|u| u.role == Role::Student).count() as u64,
        }
    }
}
