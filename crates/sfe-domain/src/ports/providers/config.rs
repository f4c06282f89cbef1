//! Config Value Provider Port
//!
//! Path-addressed, string-valued configuration lookup. Paths use `/` as
//! separator, e.g. `sentry/event_filtering/messages`.
//!
//! Callers read values on every use; implementations decide whether that
//! means going back to the backing store.

use crate::error::Result;

/// Configuration lookup port
pub trait ConfigValueProvider: Send + Sync {
    /// Read the value stored at `path`
    ///
    /// # Returns
    /// `None` when nothing is configured at `path`
    fn get_value(&self, path: &str) -> Result<Option<String>>;

    /// Read a boolean flag at `path`
    ///
    /// `1`, `true`, `yes` and `on` (case-insensitive) are true, anything
    /// else, including an unset path, is false.
    fn is_set_flag(&self, path: &str) -> Result<bool> {
        Ok(self.get_value(path)?.is_some_and(|value| {
            matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        }))
    }
}
