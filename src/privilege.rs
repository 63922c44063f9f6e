//! Super-user detection from the environment left by `sudo`.

use crate::error::ToggleError;

/// Variables `sudo` sets for the elevated process, checked in order.
pub const SUDO_VARS: [&str; 2] = ["SUDO_USER", "SUDO_UID"];

/// True when `SUDO_USER` or `SUDO_UID` is set and non-empty.
pub fn is_super_user() -> bool {
    is_super_user_with(|key| std::env::var(key).ok())
}

/// [`is_super_user`] against an arbitrary env lookup.
pub fn is_super_user_with<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    SUDO_VARS
        .iter()
        .any(|key| lookup(key).is_some_and(|v| !v.is_empty()))
}

/// Fail with [`ToggleError::NotSuperUser`] unless running under sudo.
pub fn require_super_user() -> Result<(), ToggleError> {
    if is_super_user() {
        Ok(())
    } else {
        Err(ToggleError::NotSuperUser)
    }
}
