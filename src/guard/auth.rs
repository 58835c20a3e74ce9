use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::config;
use crate::context::AuthUser;

use super::{AuthDecision, GuardDecision};

/// Callback invoked by the auth provider whenever the auth state changes;
/// `None` means no user is signed in.
pub type AuthCallback = Box<dyn FnMut(Option<AuthUser>) + Send>;

/// The external auth provider, consumed only as a subscription source.
/// Provider internals (token handling, persistence) live behind this trait.
pub trait AuthProvider: Send + Sync {
    /// Register `callback` for auth-state changes. Providers typically fire
    /// it immediately with the current state and again on every change; the
    /// guards here only ever use the first invocation.
    fn on_auth_state_changed(&self, callback: AuthCallback) -> Subscription;
}

/// Handle to an active auth-state subscription. The listener is removed
/// exactly once: on [`unsubscribe`](Self::unsubscribe), or on drop if the
/// guarded navigation is abandoned first.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

/// One-shot resolution of the provider's auth state.
///
/// Subscribes, waits for the first callback invocation, unsubscribes, and
/// returns that first value. Later auth changes during the same page view
/// are deliberately not observed. A mutex-guarded single-use channel sender
/// makes the resolution atomic: a provider that fires more than once cannot
/// double-resolve, and dropping the returned future before any event tears
/// the subscription down without leaking the listener.
pub async fn resolve_auth_state(provider: &dyn AuthProvider) -> Option<AuthUser> {
    let (tx, rx) = oneshot::channel();
    let slot = Arc::new(Mutex::new(Some(tx)));

    let subscription = provider.on_auth_state_changed(Box::new({
        let slot = Arc::clone(&slot);
        move |user| {
            if let Some(tx) = slot.lock().unwrap().take() {
                let _ = tx.send(user);
            }
        }
    }));
    // The callback now owns the only sender; if the provider discards it
    // without ever firing, the channel closes and we land in Err below.
    drop(slot);

    let resolved = rx.await;
    subscription.unsubscribe();

    match resolved {
        Ok(user) => user,
        Err(_) => {
            warn!("auth provider dropped its listener without reporting a state");
            None
        }
    }
}

/// Protected-page guard: absent user redirects to the login page, present
/// user is allowed through with the resolved identity.
pub async fn require_auth(provider: &dyn AuthProvider) -> AuthDecision {
    match resolve_auth_state(provider).await {
        Some(user) => {
            debug!(uid = %user.uid, "auth guard passed");
            AuthDecision::Allow(user)
        }
        None => AuthDecision::Redirect(config::config().guard.login_path.clone()),
    }
}

/// Login-page guard: the inverse policy. An already signed-in user has no
/// business on the login page and is sent to the dashboard.
pub async fn redirect_if_authenticated(provider: &dyn AuthProvider) -> GuardDecision {
    match resolve_auth_state(provider).await {
        Some(user) => {
            debug!(uid = %user.uid, "already authenticated, leaving login page");
            GuardDecision::Redirect(config::config().guard.dashboard_path.clone())
        }
        None => GuardDecision::Allow,
    }
}
