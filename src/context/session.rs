use serde::{Deserialize, Serialize};

/// Identity resolved by the external auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub uid: String,
    pub display_name: String,
    pub email: String,
}

/// A tenant-defined role string, e.g. `admin`, `pharmacist`, `nurse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    pub const ADMIN: &'static str = "admin";

    pub fn new(role: impl Into<String>) -> Self {
        Self(role.into())
    }

    pub fn admin() -> Self {
        Self(Self::ADMIN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_admin(&self) -> bool {
        self.0 == Self::ADMIN
    }
}

/// Auth state for the current page view.
///
/// Transitions are driven by the external auth provider's callback: the
/// session becomes `PendingRole` as soon as a user is resolved, and
/// `Authenticated` once the role lookup completes. A pending session is
/// treated as non-admin until then.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    PendingRole {
        user: AuthUser,
    },
    Authenticated {
        user: AuthUser,
        role: Role,
    },
}

impl SessionState {
    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            SessionState::Unauthenticated => None,
            SessionState::PendingRole { user } => Some(user),
            SessionState::Authenticated { user, .. } => Some(user),
        }
    }

    pub fn role(&self) -> Option<&Role> {
        match self {
            SessionState::Authenticated { role, .. } => Some(role),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, SessionState::Unauthenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.role().map(Role::is_admin).unwrap_or(false)
    }
}
