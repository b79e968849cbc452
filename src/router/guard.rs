//! Navigation guard deciding whether a route may render for a session.
//!
//! Rules, first match wins:
//!
//! 1. auth required, signed out            -> `/login`
//! 2. admin required, signed in non-admin  -> `/user`
//! 3. public route, signed in              -> role home (`/admin` or `/user`)
//! 4. otherwise                            -> proceed
//!
//! Rule 3 keeps signed-in users off the login and register forms.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::table::{ADMIN_HOME_PATH, LOGIN_PATH, RouteDescriptor, RouteName, USER_HOME_PATH, resolve};
use crate::state::session::Session;

/// Upper bound on redirect hops in [`navigate`].
const MAX_HOPS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Redirect(&'static str),
}

/// Final outcome of a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigation {
    /// Route that ends up rendering.
    pub route: &'static RouteDescriptor,
    /// Whether any redirect happened on the way.
    pub redirected: bool,
}

/// Home route for the session's role.
pub fn home_path(session: &Session) -> &'static str {
    if session.is_admin() { ADMIN_HOME_PATH } else { USER_HOME_PATH }
}

/// Apply the guard rules to one route.
pub fn check(route: &RouteDescriptor, session: &Session) -> Decision {
    let authenticated = session.is_authenticated();
    if route.requires_auth && !authenticated {
        return Decision::Redirect(LOGIN_PATH);
    }
    if route.requires_auth && route.requires_admin && !session.is_admin() {
        return Decision::Redirect(USER_HOME_PATH);
    }
    if !route.requires_auth && authenticated {
        return Decision::Redirect(home_path(session));
    }
    Decision::Proceed
}

/// Resolve `path`, follow static redirects, and apply the guard until a page
/// route is accepted.
pub fn navigate(path: &str, session: &Session) -> Navigation {
    let mut route = resolve(path);
    let mut redirected = false;
    for _ in 0..MAX_HOPS {
        let next = match route.redirect {
            Some(to) => to,
            None => match check(route, session) {
                Decision::Proceed => return Navigation { route, redirected },
                Decision::Redirect(to) => to,
            },
        };
        route = resolve(next);
        redirected = true;
    }
    log::warn!("navigation to {path} exceeded {MAX_HOPS} redirects");
    Navigation { route: RouteName::Login.descriptor(), redirected: true }
}
