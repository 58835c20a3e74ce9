pub mod auth;
pub mod role;

pub use auth::{
    redirect_if_authenticated, require_auth, resolve_auth_state, AuthCallback, AuthProvider,
    Subscription,
};
pub use role::require_admin;

use crate::context::AuthUser;

/// Outcome of the auth guard on a protected navigation. A redirect is the
/// guard's normal control-transfer signal, not an error; performing the
/// actual transfer is the navigation runtime's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    /// User resolved; passed downward for the page to use.
    Allow(AuthUser),
    Redirect(String),
}

/// Outcome of a guard that has nothing to pass downward (role check,
/// login-page check).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}
