//! Options controlling how forwarding members are installed.

use serde::{Deserialize, Serialize};

/// Collision policy for [`delegate()`](crate::delegate()).
///
/// Deserializes from `{"overwrite": true}`; a missing field means `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DelegateOptions {
    /// Replace members the installation target already owns instead of
    /// failing.
    pub overwrite: bool,
}

impl DelegateOptions {
    /// Options that replace existing members.
    pub fn overwriting() -> Self {
        Self { overwrite: true }
    }
}
