//! Route guarding over session state.
//!
//! The guard decides, per navigation, whether the current session may render
//! a route. It reads the session synchronously from an injected
//! [`SessionProvider`] and never caches a prior decision; every navigation is
//! evaluated afresh.
//!
//! The guard does not validate the token. A stale-but-present token counts
//! as authenticated until a downstream API call fails with an authorization
//! error; surfacing that failure is the caller's concern.

use std::sync::Arc;

use crate::session::Session;

/// Access class of a navigable route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Always renders.
    Public,
    /// Requires a present session.
    Protected,
    /// Requires a present session with admin privilege.
    Admin,
}

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested view.
    Render,
    /// Redirect to the login page.
    ///
    /// No return path is preserved: after logging in the user lands on the
    /// default page, not the route that triggered the redirect.
    RedirectToLogin,
    /// Redirect to the home page.
    RedirectToHome,
}

/// Source of the host application's current session.
///
/// Injected into the guard instead of read from ambient global state, so the
/// guard can be exercised with absent, authenticated and admin fixtures.
pub trait SessionProvider {
    /// The current session, if any.
    fn session(&self) -> Option<Session>;
}

impl<P: SessionProvider + ?Sized> SessionProvider for &P {
    fn session(&self) -> Option<Session> {
        (**self).session()
    }
}

impl<P: SessionProvider + ?Sized> SessionProvider for Arc<P> {
    fn session(&self) -> Option<Session> {
        (**self).session()
    }
}

/// Classify a navigation path into its access class.
///
/// Mirrors the application's route table. Unknown paths are public: the
/// router renders nothing for them, and not-found handling is not the
/// guard's concern.
#[must_use]
pub fn classify(path: &str) -> RouteClass {
    match path {
        "/orders" => RouteClass::Protected,
        p if p.starts_with("/checkout/") || p.starts_with("/order/") => RouteClass::Protected,
        p if p == "/admin-panel" || p.starts_with("/admin-panel/") => RouteClass::Admin,
        _ => RouteClass::Public,
    }
}

/// Per-navigation route guard.
///
/// Holds the injected session provider; one instance serves the whole app.
pub struct RouteGuard<P> {
    provider: P,
}

impl<P: SessionProvider> RouteGuard<P> {
    /// Create a guard over a session provider.
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Evaluate a route class against the current session.
    ///
    /// Re-reads the session on every call.
    #[must_use]
    pub fn evaluate(&self, route: RouteClass) -> GuardDecision {
        let session = self.provider.session();
        match route {
            RouteClass::Public => GuardDecision::Render,
            RouteClass::Protected => {
                if session.is_some() {
                    GuardDecision::Render
                } else {
                    GuardDecision::RedirectToLogin
                }
            }
            RouteClass::Admin => match session {
                Some(session) if session.is_admin => GuardDecision::Render,
                Some(_) => GuardDecision::RedirectToHome,
                None => GuardDecision::RedirectToLogin,
            },
        }
    }

    /// Classify a path and evaluate it in one step.
    #[must_use]
    pub fn evaluate_path(&self, path: &str) -> GuardDecision {
        self.evaluate(classify(path))
    }
}
