//! Storage key configuration.

use crate::types::{MEETS_KEY, TEAM_MEMBERS_KEY, TEAM_NAME_KEY};

/// Keys under which each piece of state is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key for the serialized meet list.
    pub meets_key: String,
    /// Key for the team name.
    pub team_name_key: String,
    /// Key for the team member list.
    pub team_members_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            meets_key: MEETS_KEY.to_string(),
            team_name_key: TEAM_NAME_KEY.to_string(),
            team_members_key: TEAM_MEMBERS_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    /// Default keys namespaced as `<prefix>.<key>`.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            meets_key: format!("{prefix}.{MEETS_KEY}"),
            team_name_key: format!("{prefix}.{TEAM_NAME_KEY}"),
            team_members_key: format!("{prefix}.{TEAM_MEMBERS_KEY}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_namespaces_every_key() {
        let cfg = StoreConfig::with_prefix("varsity");
        assert_eq!(cfg.meets_key, "varsity.meets");
        assert_eq!(cfg.team_name_key, "varsity.teamName");
        assert_eq!(cfg.team_members_key, "varsity.teamMembers");
        assert_eq!(StoreConfig::default().meets_key, "meets");
    }
}
