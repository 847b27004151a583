//! Persisted scalar preferences.
//!
//! Each preference lives under its own key, independent of the comment list.
//! The admin flag is the plain strings `"1"` / `"0"`, matching the reference
//! site's storage format.

use std::rc::Rc;

use crate::kv::KvStore;

pub const ADMIN_KEY: &str = "portfolio-admin";
pub const VERSION_KEY: &str = "portfolio-version";
pub const DEFAULT_THEME_KEY: &str = "portfolio-default-theme";

pub struct Preferences {
    kv: Rc<dyn KvStore>,
}

impl Preferences {
    #[must_use]
    pub fn new(kv: Rc<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Whether the admin flag is set. Storage errors read as "not admin".
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.read(ADMIN_KEY).as_deref() == Some("1")
    }

    pub fn set_admin(&self, enabled: bool) {
        self.write(ADMIN_KEY, if enabled { "1" } else { "0" });
    }

    #[must_use]
    pub fn version(&self) -> Option<String> {
        self.read(VERSION_KEY)
    }

    pub fn set_version(&self, version: &str) {
        self.write(VERSION_KEY, version);
    }

    #[must_use]
    pub fn default_theme(&self) -> Option<String> {
        self.read(DEFAULT_THEME_KEY)
    }

    pub fn set_default_theme(&self, theme: &str) {
        self.write(DEFAULT_THEME_KEY, theme);
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.kv.get(key) {
            Ok(value) => value,
            Err(error) => {
                log::warn!("preference read failed for '{key}': {error}");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(error) = self.kv.set(key, value) {
            log::warn!("preference write failed for '{key}': {error}");
        }
    }
}
