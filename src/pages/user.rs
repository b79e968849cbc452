//! User area pages.

use leptos::prelude::*;

use crate::components::session_bar::SessionBar;
use crate::state::session::Session;

#[component]
fn UserShell(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="dashboard dashboard--user">
            <SessionBar/>
            <h1 class="dashboard__title">{title}</h1>
            <section class="dashboard__body">{children()}</section>
        </div>
    }
}

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<Session>>();
    let greeting = move || {
        auth.with(|s| match s.username() {
            Some(name) => format!("Welcome back, {name}."),
            None => "Welcome back.".to_owned(),
        })
    };

    view! {
        <UserShell title="Dashboard">
            <p>{greeting}</p>
        </UserShell>
    }
}

#[component]
pub fn BookParkingPage() -> impl IntoView {
    view! {
        <UserShell title="Book Parking">
            <p>"Pick a parking lot with free spots to reserve one."</p>
        </UserShell>
    }
}

#[component]
pub fn MyBookingsPage() -> impl IntoView {
    view! {
        <UserShell title="My Bookings">
            <p>"Your active and past reservations."</p>
        </UserShell>
    }
}
