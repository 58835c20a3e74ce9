use tracing::debug;

use crate::config;
use crate::context::SessionState;

use super::GuardDecision;

/// Admin-page guard: synchronous check of the current session's role.
///
/// Anything short of a resolved `admin` role (staff roles, a session whose
/// role lookup has not completed yet, or no session at all) is sent back to
/// the dashboard.
pub fn require_admin(session: &SessionState) -> GuardDecision {
    if session.is_admin() {
        GuardDecision::Allow
    } else {
        debug!(
            role = session.role().map(|r| r.as_str()).unwrap_or("<none>"),
            "admin guard rejected session"
        );
        GuardDecision::Redirect(config::config().guard.dashboard_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{AuthUser, Role};

    fn user() -> AuthUser {
        AuthUser {
            uid: "u1".to_string(),
            display_name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
        }
    }

    #[test]
    fn admin_is_allowed() {
        let session = SessionState::Authenticated {
            user: user(),
            role: Role::admin(),
        };
        assert_eq!(require_admin(&session), GuardDecision::Allow);
    }

    #[test]
    fn staff_is_redirected() {
        let session = SessionState::Authenticated {
            user: user(),
            role: Role::new("staff"),
        };
        assert_eq!(
            require_admin(&session),
            GuardDecision::Redirect("/dashboard".to_string())
        );
    }

    #[test]
    fn pending_role_is_redirected() {
        let session = SessionState::PendingRole { user: user() };
        assert_eq!(
            require_admin(&session),
            GuardDecision::Redirect("/dashboard".to_string())
        );
    }
}
