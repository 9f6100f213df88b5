use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role granted to a site user
///
/// Stored as its uppercase name. `Contributor` is the role given to new
/// users when none is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    #[default]
    Contributor,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Contributor => "CONTRIBUTOR",
            Role::User => "USER",
        }
    }

    /// Roles allowed to manage projects, services and posts
    pub fn can_edit_content(&self) -> bool {
        matches!(self, Role::Admin | Role::Contributor)
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "CONTRIBUTOR" => Ok(Role::Contributor),
            "USER" => Ok(Role::User),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_role_is_contributor() {
        assert_eq!(Role::default(), Role::Contributor);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(" Contributor ".parse::<Role>(), Ok(Role::Contributor));
        assert_eq!("USER".parse::<Role>(), Ok(Role::User));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("owner".parse::<Role>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for role in [Role::Admin, Role::Contributor, Role::User] {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn serde_uses_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        let role: Role = serde_json::from_str("\"CONTRIBUTOR\"").unwrap();
        assert_eq!(role, Role::Contributor);
    }

    #[test]
    fn content_permissions() {
        assert!(Role::Admin.can_edit_content());
        assert!(Role::Contributor.can_edit_content());
        assert!(!Role::User.can_edit_content());
    }
}
