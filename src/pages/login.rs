//! Login page for users and admins.
//!
//! On success the session snapshot is refreshed; the route guard then moves
//! the now signed-in user off `/login` to their role's home.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppSessionStore;
use crate::router::table::REGISTER_PATH;
use crate::state::session::Session;

const MISSING_CREDENTIALS: &str = "Enter both username and password.";

/// Trim the username and require both fields.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<Arc<AppSessionStore>>();
    let auth = expect_context::<RwSignal<Session>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let as_admin = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = match validate_login_input(&username.get(), &password.get()) {
            Ok(fields) => fields,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let admin = as_admin.get();
        busy.set(true);
        info.set("Signing in...".to_owned());

        let store = store.clone();
        leptos::task::spawn_local(async move {
            let result = store.login(&user, &pass, admin).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    info.set(String::new());
                    auth.set(store.snapshot());
                }
                Err(e) => info.set(e.message),
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Parking Reservations"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="login-toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || as_admin.get()
                            on:change=move |ev| as_admin.set(event_target_checked(&ev))
                        />
                        "Sign in as admin"
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account yet? "
                    <A href=REGISTER_PATH>"Register"</A>
                </p>
            </div>
        </div>
    }
}
