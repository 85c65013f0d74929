//! Persisted auth session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the only shared mutable resource in the client. Only the
//! auth service writes it; the route guard, navigation and profile views read
//! it. Storage sits behind [`KeyValueStorage`] so the browser's
//! `localStorage` can be swapped for [`MemoryStorage`] in tests.
//!
//! DESIGN
//! ======
//! The whole record lives under one JSON key. Reads never fail: missing,
//! corrupt or partial records decode to defaults. Seller info only survives
//! while the effective role is `seller`, checked on write and again on read.
//!
//! TRADE-OFFS
//! ==========
//! Tabs share `localStorage` without coordination; the last writer wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::net::types::{Role, SellerInfo};

pub const SESSION_STORAGE_KEY: &str = "seedling_market.session";

/// Minimal string key-value store.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Process-local storage used in tests and when `localStorage` is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Window `localStorage`. Write failures (quota, private mode) are logged
/// and dropped.
#[cfg(feature = "csr")]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "csr")]
impl BrowserStorage {
    pub fn open() -> Option<Self> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        Some(Self { storage })
    }
}

#[cfg(feature = "csr")]
impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if self.storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for {key}");
        }
    }

    fn remove(&self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}

/// Snapshot of the authenticated identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub seller_info: Option<SellerInfo>,
}

impl Session {
    /// A token alone is not enough; the role must be known as well.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.role.is_some()
    }

    #[must_use]
    pub fn role_or_default(&self) -> Role {
        self.role.unwrap_or_default()
    }
}

/// Partial write. `None` means "leave as stored".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionUpdate {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub seller_info: Option<SellerInfo>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seller_info: Option<Value>,
}

/// Typed access to the persisted session. Cheap to clone; clones share the
/// same backing storage.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::default()))
    }

    /// `localStorage` when running in a browser, memory otherwise.
    pub fn browser() -> Self {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = BrowserStorage::open() {
                return Self::new(Rc::new(storage));
            }
            log::warn!("localStorage unavailable; session will not survive reloads");
        }
        Self::in_memory()
    }

    #[must_use]
    pub fn read(&self) -> Session {
        let stored = self.load();
        let role = stored.role.as_deref().and_then(Role::parse);
        let seller_info = if role == Some(Role::Seller) {
            stored.seller_info.and_then(|v| serde_json::from_value::<SellerInfo>(v).ok())
        } else {
            None
        };
        Session {
            token: stored.token,
            user_id: stored.user_id,
            email: stored.email,
            role,
            full_name: stored.full_name,
            phone: stored.phone,
            seller_info,
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.load().token
    }

    pub fn save(&self, update: &SessionUpdate) {
        let mut stored = self.load();
        if let Some(token) = &update.token {
            stored.token = Some(token.clone());
        }
        if let Some(user_id) = &update.user_id {
            stored.user_id = Some(user_id.clone());
        }
        if let Some(email) = &update.email {
            stored.email = Some(email.clone());
        }
        if let Some(role) = update.role {
            stored.role = Some(role.as_str().to_owned());
        }
        if let Some(full_name) = &update.full_name {
            stored.full_name = Some(full_name.clone());
        }
        if let Some(phone) = &update.phone {
            stored.phone = Some(phone.clone());
        }

        let is_seller = stored.role.as_deref().and_then(Role::parse) == Some(Role::Seller);
        if is_seller {
            if let Some(info) = &update.seller_info {
                stored.seller_info = serde_json::to_value(info).ok();
            }
        } else {
            stored.seller_info = None;
        }

        match serde_json::to_string(&stored) {
            Ok(raw) => self.storage.set(SESSION_STORAGE_KEY, &raw),
            Err(e) => log::warn!("session encode failed: {e}"),
        }
    }

    pub fn clear(&self) {
        self.storage.remove(SESSION_STORAGE_KEY);
    }

    fn load(&self) -> StoredSession {
        let Some(raw) = self.storage.get(SESSION_STORAGE_KEY) else {
            return StoredSession::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("discarding unreadable session record: {e}");
            StoredSession::default()
        })
    }
}
