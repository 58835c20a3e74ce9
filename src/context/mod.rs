pub mod session;
pub mod tenant;

pub use session::{AuthUser, Role, SessionState};
pub use tenant::TenantContext;

/// Per-navigation state handed down from the request boundary.
///
/// One authoritative writer per field (the auth handshake for the session,
/// the location-selection flow for the tenant); everything below the
/// boundary reads it by reference. Writes replace whole values. In-flight
/// reads are scoped to the tenant value at call time, so a mid-flight
/// switch cannot retarget a read that already started.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    session: SessionState,
    tenant: TenantContext,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn tenant(&self) -> &TenantContext {
        &self.tenant
    }

    pub fn set_session(&mut self, session: SessionState) {
        self.session = session;
    }

    pub fn set_tenant(&mut self, tenant: TenantContext) {
        self.tenant = tenant;
    }

    /// Logout: drop both the session and the pharmacy selection.
    pub fn reset(&mut self) {
        self.session = SessionState::Unauthenticated;
        self.tenant = TenantContext::unset();
    }
}
