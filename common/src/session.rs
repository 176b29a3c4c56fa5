//! Bearer token lifecycle.
//!
//! A `Session` wraps a `TokenStore` and is handed explicitly to the code that
//! performs protected calls. The token is read from the store on every call
//! so that a login or logout in another tab is observed without coordination.
//! There is no expiry tracking: a token stays valid until `logout` or until
//! the server rejects it.

use thiserror::Error;

/// Well-known key the token is persisted under.
pub const TOKEN_STORAGE_KEY: &str = "jwt_token";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session token must not be empty")]
    EmptyToken,
    #[error("unable to persist session token: {0}")]
    Storage(String),
}

/// Persistence for the single session token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, token: &str) -> Result<(), SessionError>;
    fn clear(&mut self);
}

/// Process-local store, used by tests and as a fallback when no browser storage exists.
#[derive(Debug, Default, Clone)]
pub struct MemoryTokenStore {
    token: Option<String>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.clone()
    }

    fn save(&mut self, token: &str) -> Result<(), SessionError> {
        self.token = Some(token.to_string());
        Ok(())
    }

    fn clear(&mut self) {
        self.token = None;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Session<S: TokenStore> {
    store: S,
}

impl<S: TokenStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The current token, if one is stored and non-blank.
    pub fn token(&self) -> Option<String> {
        self.store
            .load()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn login(&mut self, token: &str) -> Result<(), SessionError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        self.store.save(token)
    }

    pub fn logout(&mut self) {
        self.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn login_then_logout() {
        let mut session = Session::new(MemoryTokenStore::default());
        assert!(!session.is_authenticated());

        session.login(" abc.def ").unwrap();
        assert_eq!(session.token().as_deref(), Some("abc.def"));

        session.logout();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn blank_tokens_are_rejected_and_ignored() {
        let mut session = Session::new(MemoryTokenStore::default());
        assert_eq!(session.login("   "), Err(SessionError::EmptyToken));

        let mut store = MemoryTokenStore::default();
        store.save("  ").unwrap();
        assert_eq!(Session::new(store).token(), None);
    }

    #[test]
    fn token_survives_a_new_session_over_the_same_store() {
        let mut first = Session::new(MemoryTokenStore::default());
        first.login("persisted").unwrap();

        let reloaded = Session::new(first.store.clone());
        assert_eq!(reloaded.token().as_deref(), Some("persisted"));
    }
}
