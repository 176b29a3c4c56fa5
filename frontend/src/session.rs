//! Browser side of the session: a `TokenStore` over `localStorage` and the
//! shared handle passed to every component that performs protected calls.

use std::cell::RefCell;
use std::rc::Rc;

use common::session::{Session, SessionError, TokenStore, TOKEN_STORAGE_KEY};
use gloo_console::error;
use web_sys::Storage;

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTokenStore;

impl BrowserTokenStore {
    fn storage() -> Result<Storage, SessionError> {
        let window = web_sys::window()
            .ok_or_else(|| SessionError::Storage("no window available".to_string()))?;
        window
            .local_storage()
            .map_err(|_| SessionError::Storage("local storage is not accessible".to_string()))?
            .ok_or_else(|| SessionError::Storage("local storage is disabled".to_string()))
    }
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()
            .ok()?
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
    }

    fn save(&mut self, token: &str) -> Result<(), SessionError> {
        Self::storage()?
            .set_item(TOKEN_STORAGE_KEY, token)
            .map_err(|_| SessionError::Storage("failed to write the session token".to_string()))
    }

    fn clear(&mut self) {
        match Self::storage() {
            Ok(storage) => {
                if storage.remove_item(TOKEN_STORAGE_KEY).is_err() {
                    error!("failed to remove the session token");
                }
            }
            Err(err) => error!(err.to_string()),
        }
    }
}

/// Shared, explicitly passed session. Equality is identity so that props
/// holding the same handle never trigger a re-render.
#[derive(Clone, Default)]
pub struct SessionHandle(Rc<RefCell<Session<BrowserTokenStore>>>);

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl SessionHandle {
    pub fn token(&self) -> Option<String> {
        self.0.borrow().token()
    }

    pub fn login(&self, token: &str) -> Result<(), SessionError> {
        self.0.borrow_mut().login(token)
    }

    pub fn logout(&self) {
        self.0.borrow_mut().logout();
    }
}
