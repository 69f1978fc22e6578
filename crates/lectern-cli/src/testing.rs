//! Test helpers for code that reads the process environment.

use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialize tests that read or write `LECTERN_*` variables.
///
/// Take this before any [`EnvGuard`] and hold it for the whole test.
pub(crate) fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for env var manipulation in tests.
pub(crate) struct EnvGuard {
    key: String,
    prev: Option<String>,
}

impl EnvGuard {
    pub(crate) fn new(key: &str, value: &str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: callers hold `lock_env()`, so no other test touches the environment.
        unsafe { std::env::set_var(key, value) };
        Self {
            key: key.to_string(),
            prev,
        }
    }

    pub(crate) fn remove(key: &str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: as in `new`.
        unsafe { std::env::remove_var(key) };
        Self {
            key: key.to_string(),
            prev,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: the guard is dropped before the lock it was created under.
        unsafe {
            match &self.prev {
                Some(val) => std::env::set_var(&self.key, val),
                None => std::env::remove_var(&self.key),
            }
        }
    }
}
