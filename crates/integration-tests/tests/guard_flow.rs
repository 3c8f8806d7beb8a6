//! End-to-end tests of the route guard over a real login flow.

#![allow(clippy::unwrap_used)]

use little_sprout_client::{GuardDecision, RouteGuard, SessionClient, SessionStore};
use little_sprout_integration_tests::{ALICE, MEREDITH, StubBackend};

#[tokio::test]
async fn protected_routes_redirect_until_login() {
    let backend = StubBackend::spawn().await;
    let store = SessionStore::in_memory();
    let guard = RouteGuard::new(&store);

    // Nothing stored yet: protected and admin views never render.
    assert_eq!(guard.evaluate_path("/"), GuardDecision::Render);
    assert_eq!(
        guard.evaluate_path("/orders"),
        GuardDecision::RedirectToLogin
    );
    assert_eq!(
        guard.evaluate_path("/checkout/1"),
        GuardDecision::RedirectToLogin
    );

    let session = SessionClient::new(&backend.config())
        .login(ALICE.0, ALICE.1)
        .await
        .expect("login should succeed");
    store.store(session);

    // Same guard, fresh decision: the session is re-read per navigation.
    assert_eq!(guard.evaluate_path("/orders"), GuardDecision::Render);
    assert_eq!(guard.evaluate_path("/checkout/1"), GuardDecision::Render);

    store.clear();
    assert_eq!(
        guard.evaluate_path("/orders"),
        GuardDecision::RedirectToLogin
    );
}

#[tokio::test]
async fn admin_route_needs_the_admin_flag() {
    let backend = StubBackend::spawn().await;
    let store = SessionStore::in_memory();
    let guard = RouteGuard::new(&store);

    let session = SessionClient::new(&backend.config())
        .login(ALICE.0, ALICE.1)
        .await
        .expect("login should succeed");
    store.store(session);

    // Authenticated but not privileged: redirected away, never rendered.
    assert_eq!(
        guard.evaluate_path("/admin-panel"),
        GuardDecision::RedirectToHome
    );

    let session = SessionClient::new(&backend.config())
        .login(MEREDITH.0, MEREDITH.1)
        .await
        .expect("admin login should succeed");
    store.store(session);

    assert_eq!(guard.evaluate_path("/admin-panel"), GuardDecision::Render);
}

#[tokio::test]
async fn persisted_session_survives_a_restart() {
    let backend = StubBackend::spawn().await;
    let path = std::env::temp_dir().join(format!(
        "little-sprout-guard-restart-{}.json",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let store = SessionStore::persistent(&path);
        let session = SessionClient::new(&backend.config())
            .login(MEREDITH.0, MEREDITH.1)
            .await
            .expect("login should succeed");
        store.store(session);
    }

    // A new store over the same file re-hydrates the session.
    let store = SessionStore::persistent(&path);
    let guard = RouteGuard::new(&store);
    assert_eq!(guard.evaluate_path("/admin-panel"), GuardDecision::Render);

    let _ = std::fs::remove_file(&path);
}
