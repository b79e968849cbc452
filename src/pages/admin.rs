//! Admin area pages. Lot and user management run server-side; these pages
//! frame that area behind the admin guard.

use leptos::prelude::*;

use crate::components::session_bar::SessionBar;

#[component]
fn AdminShell(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="dashboard dashboard--admin">
            <SessionBar/>
            <h1 class="dashboard__title">{title}</h1>
            <section class="dashboard__body">{children()}</section>
        </div>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <AdminShell title="Admin Dashboard">
            <p>"Parking lot occupancy and recent activity."</p>
        </AdminShell>
    }
}

#[component]
pub fn AdminParkingLotsPage() -> impl IntoView {
    view! {
        <AdminShell title="Parking Lots">
            <p>"Create, edit, and remove parking lots and their spots."</p>
        </AdminShell>
    }
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    view! {
        <AdminShell title="Users">
            <p>"Registered users and their bookings."</p>
        </AdminShell>
    }
}
