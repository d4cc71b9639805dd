//! Store configuration.

use serde::Deserialize;

/// How `is_user_in_room` decides membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipMatch {
    /// Compare user keys
    #[default]
    Key,
    /// Compare display names exactly, as older deployments did.
    /// Two users sharing a name are indistinguishable under this mode.
    Name,
}

/// Behaviour switches for the in-memory store
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Reject users and rooms whose name collides (ignoring case) with an
    /// existing one
    pub enforce_unique_names: bool,
    pub membership_match: MembershipMatch,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            enforce_unique_names: true,
            membership_match: MembershipMatch::Key,
        }
    }
}
