use serde::{Deserialize, Serialize};
use std::fmt;

/// The three portals a signed-in user can belong to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    HealthWorker,
    DataAnalyst,
    SuperAdmin,
}

/// All roles in sidebar / test order.
pub const ALL_ROLES: &[Role] = &[Role::HealthWorker, Role::DataAnalyst, Role::SuperAdmin];

impl Role {
    /// Parse a role claim. Case-insensitive, tolerates a `ROLE_` prefix and
    /// `_`, `-` or space between words. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let lowered = s.trim().to_lowercase();
        let stripped = lowered.strip_prefix("role_").unwrap_or(&lowered);
        let compact: String = stripped
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect();
        match compact.as_str() {
            "healthworker" => Some(Role::HealthWorker),
            "dataanalyst" => Some(Role::DataAnalyst),
            "superadmin" => Some(Role::SuperAdmin),
            _ => None,
        }
    }

    /// Canonical claim value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::HealthWorker => "HEALTH_WORKER",
            Role::DataAnalyst => "DATA_ANALYST",
            Role::SuperAdmin => "SUPER_ADMIN",
        }
    }

    /// URL prefix every route of this portal lives under.
    pub fn path_prefix(&self) -> &'static str {
        match self {
            Role::HealthWorker => "/healthworker",
            Role::DataAnalyst => "/dataanalyst",
            Role::SuperAdmin => "/superadmin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::HealthWorker => "Health Worker",
            Role::DataAnalyst => "Data Analyst",
            Role::SuperAdmin => "Super Admin",
        }
    }

    /// Landing page after sign-in.
    pub fn home_path(&self) -> String {
        format!("{}/dashboard", self.path_prefix())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!(Role::parse("HEALTH_WORKER"), Some(Role::HealthWorker));
        assert_eq!(Role::parse("health-worker"), Some(Role::HealthWorker));
        assert_eq!(Role::parse("healthworker"), Some(Role::HealthWorker));
        assert_eq!(Role::parse("Data Analyst"), Some(Role::DataAnalyst));
        assert_eq!(Role::parse("ROLE_SUPER_ADMIN"), Some(Role::SuperAdmin));
        assert_eq!(Role::parse("  superadmin "), Some(Role::SuperAdmin));
    }

    #[test]
    fn parse_rejects_unknown_roles() {
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("ROLE_"), None);
    }

    #[test]
    fn as_str_roundtrips_through_parse() {
        for role in ALL_ROLES {
            assert_eq!(Role::parse(role.as_str()), Some(*role));
        }
    }

    #[test]
    fn prefixes_are_distinct() {
        let mut prefixes: Vec<_> = ALL_ROLES.iter().map(|r| r.path_prefix()).collect();
        prefixes.sort();
        prefixes.dedup();
        assert_eq!(prefixes.len(), ALL_ROLES.len());
        assert_eq!(Role::DataAnalyst.home_path(), "/dataanalyst/dashboard");
    }
}
