//! Site owner content and environment configuration.

use std::env;

/// Static content the interpreter serves (banner, `/whoami`, `/ls`,
/// `/social`) plus the admin passphrase and the version string reported when
/// no persisted override exists.
///
/// The passphrase is demo-grade by design: a single shared constant compared
/// in plaintext. It guards nothing sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalConfig {
    pub prompt: String,
    pub banner: Vec<String>,
    pub profile: Vec<String>,
    pub sections: Vec<String>,
    pub social_links: Vec<String>,
    pub admin_passphrase: String,
    pub fallback_version: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: "guest@portfolio:~$".to_string(),
            banner: vec![
                "Welcome to the portfolio terminal v1.0".to_string(),
                "Type /help for available commands".to_string(),
                "Tip: Tab completes, arrow keys browse history".to_string(),
            ],
            profile: vec![
                "User: Jordan Reyes".to_string(),
                "Role: Full-stack Developer".to_string(),
                "Location: Lisbon, Portugal".to_string(),
                "Focus: Web platforms & developer tooling".to_string(),
            ],
            sections: vec![
                "hero".to_string(),
                "about".to_string(),
                "skills".to_string(),
                "projects".to_string(),
                "contact".to_string(),
                "comments".to_string(),
            ],
            social_links: vec![
                "GitHub:   https://github.com/jordanreyes".to_string(),
                "LinkedIn: https://linkedin.com/in/jordanreyes".to_string(),
            ],
            admin_passphrase: "letmein".to_string(),
            fallback_version: "1.0.0".to_string(),
        }
    }
}

impl TerminalConfig {
    /// Default content with environment overrides applied.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(passphrase) = env_string_opt("FOLIO_ADMIN_PASSPHRASE") {
            config.admin_passphrase = passphrase;
        }
        if let Some(version) = env_string_opt("FOLIO_SITE_VERSION") {
            config.fallback_version = version;
        }
        config
    }
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::sync::{Mutex, OnceLock};

    use super::TerminalConfig;

    struct EnvGuard {
        key: &'static str,
        previous: Option<String>,
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                env::set_var(self.key, value);
            } else {
                env::remove_var(self.key);
            }
        }
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .expect("env lock poisoned")
    }

    fn set_env_guard(key: &'static str, value: Option<&str>) -> EnvGuard {
        let previous = env::var(key).ok();
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
        EnvGuard { key, previous }
    }

    #[test]
    fn from_env_defaults_match_plain_defaults() {
        let _lock = env_lock();
        let _passphrase = set_env_guard("FOLIO_ADMIN_PASSPHRASE", None);
        let _version = set_env_guard("FOLIO_SITE_VERSION", None);

        assert_eq!(TerminalConfig::from_env(), TerminalConfig::default());
    }

    #[test]
    fn env_overrides_passphrase_and_version() {
        let _lock = env_lock();
        let _passphrase = set_env_guard("FOLIO_ADMIN_PASSPHRASE", Some("hunter2"));
        let _version = set_env_guard("FOLIO_SITE_VERSION", Some("9.9.9"));

        let config = TerminalConfig::from_env();
        assert_eq!(config.admin_passphrase, "hunter2");
        assert_eq!(config.fallback_version, "9.9.9");
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let _lock = env_lock();
        let _passphrase = set_env_guard("FOLIO_ADMIN_PASSPHRASE", Some("   "));

        let config = TerminalConfig::from_env();
        assert_eq!(config.admin_passphrase, "letmein");
    }
}
