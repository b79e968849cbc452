//! Session store: the single source of truth for auth state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once at app start, hydrated from `localStorage`, and shared through
//! Leptos context. Route guards read its flags; login/register pages drive
//! its async operations. Memory and storage are written together so they
//! agree once any operation returns.
//!
//! ERROR HANDLING
//! ==============
//! `login`/`register` fold every failure into an [`AuthFailure`] carrying
//! the server's `message` or a default, so pages only render text.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;
use serde_json::Value;

use super::session::{self, Role, Session};
use crate::net::api::{ApiClient, USER_REGISTER_PATH, login_endpoint};
use crate::net::transport::Transport;
use crate::net::types::{ApiError, LoginRequest, LoginResponse};
use crate::util::storage::KeyValueStore;

pub const DEFAULT_LOGIN_FAILURE: &str = "Login failed";
pub const DEFAULT_REGISTER_FAILURE: &str = "Registration failed";

/// User-facing failure of a login or registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthFailure {
    pub message: String,
}

impl AuthFailure {
    fn from_api(err: &ApiError, default: &str) -> Self {
        let message = err.server_message().unwrap_or(default).to_owned();
        Self { message }
    }
}

pub struct SessionStore<T> {
    api: Arc<ApiClient<T>>,
    storage: Arc<dyn KeyValueStore>,
    session: RwLock<Session>,
}

impl<T: Transport> SessionStore<T> {
    /// Create the store, hydrating the credential from `storage`.
    pub fn new(api: Arc<ApiClient<T>>, storage: Arc<dyn KeyValueStore>) -> Self {
        let session = Session::hydrate(storage.as_ref());
        Self { api, storage, session: RwLock::new(session) }
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clone of the current session, for reactive UI state.
    pub fn snapshot(&self) -> Session {
        self.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.read().is_admin()
    }

    /// Log in through the admin or user endpoint.
    ///
    /// The role is taken from `as_admin`, not from the server response.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthFailure`] if the request fails, is rejected, or the
    /// response carries no token. The session is left unchanged.
    pub async fn login(&self, username: &str, password: &str, as_admin: bool) -> Result<(), AuthFailure> {
        let endpoint = login_endpoint(as_admin);
        let body = LoginRequest { username, password };
        let response = match self.api.post(endpoint, &body).await {
            Ok(response) => response,
            Err(err) => {
                log::warn!("login via {endpoint} failed: {err}");
                self.resync_after(&err);
                return Err(AuthFailure::from_api(&err, DEFAULT_LOGIN_FAILURE));
            }
        };

        let Some(grant) = response.json::<LoginResponse>().ok().and_then(LoginResponse::into_grant) else {
            log::warn!("login via {endpoint} returned no token");
            return Err(AuthFailure { message: DEFAULT_LOGIN_FAILURE.to_owned() });
        };

        let role = Role::from_admin_flag(as_admin);
        let next = Session::signed_in(grant.token, role, grant.profile);
        next.persist(self.storage.as_ref());
        *self.write() = next;
        log::info!("signed in as {}", role.as_str());
        Ok(())
    }

    /// Register a new account. Never changes the session.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthFailure`] if the request fails or is rejected.
    pub async fn register<P: Serialize + ?Sized>(&self, payload: &P) -> Result<Value, AuthFailure> {
        match self.api.post(USER_REGISTER_PATH, payload).await {
            Ok(response) => Ok(response.body),
            Err(err) => {
                log::warn!("registration failed: {err}");
                self.resync_after(&err);
                Err(AuthFailure::from_api(&err, DEFAULT_REGISTER_FAILURE))
            }
        }
    }

    /// Forget the credential and profile, in memory and in storage.
    pub fn logout(&self) {
        let cleared = Session::default();
        cleared.persist(self.storage.as_ref());
        *self.write() = cleared;
        log::info!("signed out");
    }

    /// Load the cached profile into memory, if storage holds a valid one.
    pub fn load_profile(&self) {
        if let Some(profile) = session::read_profile(self.storage.as_ref()) {
            self.write().set_profile(Some(profile));
        }
    }

    /// Rebuild memory from storage: credential plus cached profile.
    pub fn resync(&self) {
        let mut fresh = Session::hydrate(self.storage.as_ref());
        if fresh.is_authenticated() {
            fresh.set_profile(session::read_profile(self.storage.as_ref()));
        }
        *self.write() = fresh;
    }

    fn resync_after(&self, err: &ApiError) {
        // The client has already wiped storage on a 401.
        if err.is_unauthorized() {
            self.resync();
        }
    }
}
