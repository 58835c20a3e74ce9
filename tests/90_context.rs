mod common;

use anyhow::Result;

use pharmacy_client_rust::context::{RequestContext, Role, SessionState, TenantContext};
use pharmacy_client_rust::repository::PharmacyRepository;

#[test]
fn session_moves_through_the_three_states() {
    let mut context = RequestContext::new();
    assert_eq!(context.session(), &SessionState::Unauthenticated);
    assert!(!context.session().is_authenticated());

    // Auth handshake resolved a user, role lookup still outstanding.
    context.set_session(SessionState::PendingRole {
        user: common::test_user("u1"),
    });
    assert!(context.session().is_authenticated());
    assert!(!context.session().is_admin());

    // Role resolved; the write replaces the whole session value.
    context.set_session(SessionState::Authenticated {
        user: common::test_user("u1"),
        role: Role::admin(),
    });
    assert!(context.session().is_admin());
    assert_eq!(context.session().role().map(Role::as_str), Some("admin"));
}

#[test]
fn reset_drops_session_and_pharmacy_selection() {
    let mut context = RequestContext::new();
    context.set_session(SessionState::Authenticated {
        user: common::test_user("u1"),
        role: Role::new("pharmacist"),
    });
    context.set_tenant(TenantContext::for_pharmacy("ph1"));

    context.reset();

    assert_eq!(context.session(), &SessionState::Unauthenticated);
    assert_eq!(context.tenant().pharmacy_id(), None);
}

#[tokio::test]
async fn repository_reads_follow_the_context_tenant() -> Result<()> {
    let repository = PharmacyRepository::new(common::seeded_store());
    let mut context = RequestContext::new();

    context.set_tenant(TenantContext::for_pharmacy("ph1"));
    let ph1 = repository.fetch_medicines(context.tenant()).await?;

    // Switching pharmacies replaces the tenant wholesale; the next read
    // targets the new one.
    context.set_tenant(TenantContext::for_pharmacy("ph2"));
    let ph2 = repository.fetch_medicines(context.tenant()).await?;

    assert_eq!(ph1.len(), 6);
    assert_eq!(ph2.len(), 1);
    Ok(())
}
