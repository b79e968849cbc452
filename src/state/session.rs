//! Session data model and its mapping onto durable storage.
//!
//! DESIGN
//! ======
//! The token and role always travel together inside [`Credential`], so a
//! session can never carry one without the other. The profile is a separate,
//! best-effort cache.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::util::storage::{KeyValueStore, ROLE_KEY, TOKEN_KEY, USER_KEY};

/// Coarse authorization level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn from_admin_flag(as_admin: bool) -> Self {
        if as_admin { Self::Admin } else { Self::User }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// Bearer token plus the role it was issued for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    pub token: String,
    pub role: Role,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    credential: Option<Credential>,
    profile: Option<Value>,
}

impl Session {
    pub fn signed_in(token: impl Into<String>, role: Role, profile: Option<Value>) -> Self {
        Self { credential: Some(Credential { token: token.into(), role }), profile }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    pub fn token(&self) -> Option<&str> {
        self.credential.as_ref().map(|c| c.token.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.credential.as_ref().map(|c| c.role)
    }

    pub fn profile(&self) -> Option<&Value> {
        self.profile.as_ref()
    }

    pub fn set_profile(&mut self, profile: Option<Value>) {
        self.profile = profile;
    }

    /// Display name taken from the cached profile's `username`.
    pub fn username(&self) -> Option<&str> {
        self.profile.as_ref()?.get("username")?.as_str()
    }

    /// Read the credential from storage. The profile is left empty; see
    /// [`read_profile`].
    ///
    /// A token without a recognized role (or the reverse) hydrates as signed
    /// out.
    pub fn hydrate(store: &dyn KeyValueStore) -> Self {
        let credential = read_credential(store);
        if credential.is_none() && (store.get(TOKEN_KEY).is_some() || store.get(ROLE_KEY).is_some()) {
            log::warn!("stored session is incomplete; treating as signed out");
        }
        Self { credential, profile: None }
    }

    /// Write every field to storage, removing the keys of absent fields.
    pub fn persist(&self, store: &dyn KeyValueStore) {
        match &self.credential {
            Some(credential) => {
                store.set(TOKEN_KEY, &credential.token);
                store.set(ROLE_KEY, credential.role.as_str());
            }
            None => {
                store.remove(TOKEN_KEY);
                store.remove(ROLE_KEY);
            }
        }
        match &self.profile {
            Some(profile) => store.set(USER_KEY, &profile.to_string()),
            None => store.remove(USER_KEY),
        }
    }
}

/// The stored credential: a non-empty token paired with a recognized role.
///
/// This is the single rule for "signed in" shared by [`Session::hydrate`] and
/// the HTTP client's bearer injection.
pub fn read_credential(store: &dyn KeyValueStore) -> Option<Credential> {
    let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
    let role = store.get(ROLE_KEY).as_deref().and_then(Role::parse)?;
    Some(Credential { token, role })
}

/// Read the cached profile. Missing or malformed JSON yields `None`.
pub fn read_profile(store: &dyn KeyValueStore) -> Option<Value> {
    let raw = store.get(USER_KEY)?;
    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Null) => None,
        Ok(profile) => Some(profile),
        Err(e) => {
            log::warn!("ignoring malformed cached profile: {e}");
            None
        }
    }
}
