//! Host identity, read once at startup.

/// The host's network name. Pass-through to the platform; the rare platform
/// error degrades to a placeholder rather than aborting startup.
pub fn hostname() -> String {
    whoami::fallible::hostname().unwrap_or_else(|_| "unknown".to_owned())
}
