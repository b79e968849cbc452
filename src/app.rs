//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Redirect, Router};
use leptos_router::hooks::use_location;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::transport::FetchTransport;
use crate::pages::admin::{AdminDashboardPage, AdminParkingLotsPage, AdminUsersPage};
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::user::{BookParkingPage, MyBookingsPage, UserDashboardPage};
use crate::router::guard::{self, Navigation};
use crate::router::table::{LOGIN_PATH, RouteName};
use crate::state::session::Session;
use crate::state::store::SessionStore;
use crate::util::navigation::BrowserNavigator;
use crate::util::storage::{BrowserStorage, KeyValueStore};

/// Session store type shared through context.
pub type AppSessionStore = SessionStore<FetchTransport>;

/// Build the browser-backed session store from build-time config.
fn build_session_store() -> AppSessionStore {
    let config = ClientConfig::from_build_env().unwrap_or_else(|e| {
        log::error!("invalid client config, using defaults: {e}");
        ClientConfig::default()
    });
    let storage: Arc<dyn KeyValueStore> = Arc::new(BrowserStorage);
    let api = ApiClient::new(config.api_base_url, FetchTransport, storage.clone(), Arc::new(BrowserNavigator));
    let store = SessionStore::new(Arc::new(api), storage);
    store.load_profile();
    store
}

/// Root application component.
///
/// Provides the session store plus a reactive snapshot of it. Routing is
/// driven by the static route table: one guarded outlet resolves the current
/// location and renders the accepted page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = Arc::new(build_session_store());
    let auth = RwSignal::new(store.snapshot());
    provide_context(store);
    provide_context(auth);

    view! {
        <Title text="Parking Reservations"/>

        <Router>
            <GuardedOutlet/>
        </Router>
    }
}

/// Guard outcome for `path` under the current session snapshot.
fn route_for(path: &str, auth: RwSignal<Session>) -> Navigation {
    auth.with(|session| guard::navigate(path, session))
}

/// Re-runs the guard whenever the location or the session snapshot changes,
/// so signing in or out on a page moves the user along immediately.
#[component]
fn GuardedOutlet() -> impl IntoView {
    let auth = expect_context::<RwSignal<Session>>();
    let location = use_location();
    move || {
        let nav = route_for(&location.pathname.get(), auth);
        if nav.redirected {
            view! { <Redirect path=nav.route.path/> }.into_any()
        } else {
            render_page(nav.route.name)
        }
    }
}

fn render_page(name: RouteName) -> AnyView {
    match name {
        RouteName::Login => view! { <LoginPage/> }.into_any(),
        RouteName::Register => view! { <RegisterPage/> }.into_any(),
        RouteName::AdminDashboard => view! { <AdminDashboardPage/> }.into_any(),
        RouteName::AdminParkingLots => view! { <AdminParkingLotsPage/> }.into_any(),
        RouteName::AdminUsers => view! { <AdminUsersPage/> }.into_any(),
        RouteName::UserDashboard => view! { <UserDashboardPage/> }.into_any(),
        RouteName::BookParking => view! { <BookParkingPage/> }.into_any(),
        RouteName::MyBookings => view! { <MyBookingsPage/> }.into_any(),
        RouteName::Root | RouteName::NotFound => view! { <Redirect path=LOGIN_PATH/> }.into_any(),
    }
}
