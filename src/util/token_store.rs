//! Durable storage for the bearer credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only `state::session::SessionManager` writes through a `TokenStore`.
//! The browser implementation uses `localStorage`, which survives reloads
//! and is scoped to the page origin. Values are stored verbatim.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::types::Credential;

pub trait TokenStore {
    fn load(&self) -> Option<Credential>;
    fn save(&self, credential: &Credential);
    fn clear(&self);
}

/// `localStorage`-backed store. Storage failures (private mode, quota) are
/// logged and otherwise behave like an empty store.
#[derive(Clone, Debug)]
pub struct BrowserTokenStore {
    key: String,
}

impl BrowserTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[cfg(feature = "csr")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<Credential> {
        #[cfg(feature = "csr")]
        {
            let raw = Self::storage()?.get_item(&self.key).ok().flatten()?;
            if raw.is_empty() { None } else { Some(Credential::new(raw)) }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &self.key;
            None
        }
    }

    fn save(&self, credential: &Credential) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = Self::storage() else {
                log::warn!("localStorage unavailable; session will not survive reload");
                return;
            };
            if storage.set_item(&self.key, credential.as_str()).is_err() {
                log::warn!("failed to persist credential under {}", self.key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.key, credential);
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &self.key;
        }
    }
}

/// In-memory store. Clones share one slot, so a test can keep a handle and
/// inspect what the session manager wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<Credential>>>,
}

impl MemoryTokenStore {
    pub fn with_credential(credential: Credential) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(credential))) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<Credential> {
        self.slot.borrow().clone()
    }

    fn save(&self, credential: &Credential) {
        *self.slot.borrow_mut() = Some(credential.clone());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
