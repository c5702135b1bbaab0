//! Browser session backed by `sessionStorage`.
//!
//! The credential is stored under the `token` key and decoded (without
//! signature verification) on load. A token that fails to decode is
//! treated as absent, so a corrupted storage entry degrades to the
//! logged-out state instead of wedging the app.

use dioxus::prelude::*;
use mqa_common::token::{AuthToken, TokenError};
use mqa_common::user::Role;

const TOKEN_KEY: &str = "token";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    token: Option<AuthToken>,
}

impl Session {
    /// Restore the session from browser storage, if a decodable token exists.
    pub fn load() -> Self {
        let token = stored_token().and_then(|raw| AuthToken::decode(&raw).ok());
        Self { token }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_staff(&self) -> bool {
        self.token.as_ref().is_some_and(|t| t.role().is_staff())
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    /// Raw credential for the `Authorization` header.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| t.raw().to_string())
    }

    pub fn role(&self) -> Role {
        self.token
            .as_ref()
            .map(|t| t.role())
            .unwrap_or(Role::Client)
    }

    /// Decode and persist a fresh credential. Storage is only written once
    /// the token is known to decode.
    pub fn log_in(&mut self, raw: &str) -> Result<Role, TokenError> {
        let token = AuthToken::decode(raw)?;
        store_token(raw);
        let role = token.role();
        self.token = Some(token);
        Ok(role)
    }

    pub fn log_out(&mut self) {
        self.token = None;
        clear_token();
    }
}

pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

// ─────────────────────────── Browser storage ───────────────────────────

#[cfg(target_family = "wasm")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

#[cfg(target_family = "wasm")]
fn stored_token() -> Option<String> {
    storage()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|raw| !raw.is_empty())
}

#[cfg(target_family = "wasm")]
fn store_token(raw: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(TOKEN_KEY, raw);
    }
}

#[cfg(target_family = "wasm")]
fn clear_token() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

#[cfg(not(target_family = "wasm"))]
fn stored_token() -> Option<String> {
    None
}

#[cfg(not(target_family = "wasm"))]
fn store_token(_raw: &str) {}

#[cfg(not(target_family = "wasm"))]
fn clear_token() {}
