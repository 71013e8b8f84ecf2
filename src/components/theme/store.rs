//! Persisted string preferences.

use std::cell::RefCell;
use std::collections::HashMap;

use log::warn;
use web_sys::Storage;

use crate::dom;

/// A string key-value store that outlives the page view.
pub trait PreferenceStore {
	/// Stored value for `key`, if any.
	fn get(&self, key: &str) -> Option<String>;
	/// Stores `value` under `key`, replacing any previous value.
	fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`.
pub struct LocalPreferenceStore {
	storage: Storage,
}

impl LocalPreferenceStore {
	/// Returns `None` when storage is disabled or throws on access.
	pub fn open() -> Option<Self> {
		let storage = dom::window()?.local_storage().ok()??;
		Some(Self { storage })
	}
}

impl PreferenceStore for LocalPreferenceStore {
	fn get(&self, key: &str) -> Option<String> {
		self.storage.get_item(key).ok().flatten()
	}

	fn set(&self, key: &str, value: &str) {
		if self.storage.set_item(key, value).is_err() {
			warn!("theme: failed to persist {}={}", key, value);
		}
	}
}

/// In-process fallback used when `localStorage` is unavailable.
/// Values last only for the current page view.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
	values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryPreferenceStore {
	fn get(&self, key: &str) -> Option<String> {
		self.values.borrow().get(key).cloned()
	}

	fn set(&self, key: &str, value: &str) {
		self.values.borrow_mut().insert(key.to_string(), value.to_string());
	}
}

/// Either backend, chosen once at startup.
pub enum PageStore {
	/// Browser `localStorage`.
	Local(LocalPreferenceStore),
	/// Page-lifetime fallback.
	Memory(MemoryPreferenceStore),
}

impl PageStore {
	/// `localStorage` if usable, otherwise an in-memory map.
	pub fn open() -> Self {
		match LocalPreferenceStore::open() {
			Some(local) => Self::Local(local),
			None => {
				warn!("theme: localStorage unavailable, preference will not persist");
				Self::Memory(MemoryPreferenceStore::default())
			}
		}
	}
}

impl PreferenceStore for PageStore {
	fn get(&self, key: &str) -> Option<String> {
		match self {
			Self::Local(s) => s.get(key),
			Self::Memory(s) => s.get(key),
		}
	}

	fn set(&self, key: &str, value: &str) {
		match self {
			Self::Local(s) => s.set(key, value),
			Self::Memory(s) => s.set(key, value),
		}
	}
}
