//! Header strip showing who is signed in, with area links and logout.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppSessionStore;
use crate::state::session::Session;

/// Label for the signed-in account: profile username, else the role.
fn account_label(session: &Session) -> String {
    match (session.username(), session.role()) {
        (Some(name), Some(role)) => format!("{name} ({})", role.as_str()),
        (None, Some(role)) => role.as_str().to_owned(),
        (Some(name), None) => name.to_owned(),
        (None, None) => String::new(),
    }
}

/// Area navigation links, in display order.
pub fn area_links(admin: bool) -> &'static [(&'static str, &'static str)] {
    if admin {
        &[("/admin", "Dashboard"), ("/admin/parking-lots", "Parking Lots"), ("/admin/users", "Users")]
    } else {
        &[("/user", "Dashboard"), ("/user/book-parking", "Book Parking"), ("/user/my-bookings", "My Bookings")]
    }
}

#[component]
pub fn SessionBar() -> impl IntoView {
    let store = expect_context::<Arc<AppSessionStore>>();
    let auth = expect_context::<RwSignal<Session>>();

    let on_logout = move |_| {
        store.logout();
        auth.set(store.snapshot());
    };

    view! {
        <header class="session-bar">
            <nav class="session-bar__links">
                {move || {
                    area_links(auth.with(Session::is_admin))
                        .iter()
                        .map(|(href, label)| view! { <A href=*href>{*label}</A> })
                        .collect_view()
                }}
            </nav>
            <span class="session-bar__account">{move || auth.with(account_label)}</span>
            <button class="session-bar__logout" on:click=on_logout>"Log out"</button>
        </header>
    }
}
