//! Account roles and their capabilities.
//!
//! The backend stores the role as a flat string. It parses into a closed
//! enum here, and access checks go through an explicit capability mapping
//! instead of string equality scattered across call sites.

use serde::{Deserialize, Serialize};

/// Account role, from least to most privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Ordinary shopper.
    #[default]
    User,
    /// Catalog manager: may create, edit, and restock books and progress
    /// orders.
    Librarian,
    /// Full privileged access, including account management.
    Admin,
}

/// A capability granted to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Browse the catalog and place orders.
    Shop,
    /// Create, edit, delete, and restock books.
    ManageCatalog,
    /// Update order payment/shipping status.
    ManageOrders,
    /// List accounts and change roles.
    ManageUsers,
}

impl Role {
    /// Parse a role from the backend's string, defaulting any unknown or
    /// absent value to [`Role::User`].
    #[must_use]
    pub fn from_str_lossy(raw: Option<&str>) -> Self {
        match raw {
            Some("admin") => Self::Admin,
            Some("librarian") => Self::Librarian,
            _ => Self::User,
        }
    }

    /// The capabilities granted to this role.
    #[must_use]
    pub const fn permissions(self) -> &'static [Permission] {
        match self {
            Self::User => &[Permission::Shop],
            Self::Librarian => &[
                Permission::Shop,
                Permission::ManageCatalog,
                Permission::ManageOrders,
            ],
            Self::Admin => &[
                Permission::Shop,
                Permission::ManageCatalog,
                Permission::ManageOrders,
                Permission::ManageUsers,
            ],
        }
    }

    /// Whether this role holds a capability.
    #[must_use]
    pub fn can(self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shop => write!(f, "shop"),
            Self::ManageCatalog => write!(f, "manage-catalog"),
            Self::ManageOrders => write!(f, "manage-orders"),
            Self::ManageUsers => write!(f, "manage-users"),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Librarian => write!(f, "librarian"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "librarian" => Ok(Self::Librarian),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lossy_parse_defaults_to_user() {
        assert_eq!(Role::from_str_lossy(Some("admin")), Role::Admin);
        assert_eq!(Role::from_str_lossy(Some("librarian")), Role::Librarian);
        assert_eq!(Role::from_str_lossy(Some("user")), Role::User);
        assert_eq!(Role::from_str_lossy(Some("moderator")), Role::User);
        assert_eq!(Role::from_str_lossy(None), Role::User);
    }

    #[test]
    fn test_capabilities() {
        assert!(Role::User.can(Permission::Shop));
        assert!(!Role::User.can(Permission::ManageCatalog));

        assert!(Role::Librarian.can(Permission::ManageCatalog));
        assert!(Role::Librarian.can(Permission::ManageOrders));
        assert!(!Role::Librarian.can(Permission::ManageUsers));

        assert!(Role::Admin.can(Permission::ManageUsers));
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("librarian".parse::<Role>(), Ok(Role::Librarian));
        assert!("moderator".parse::<Role>().is_err());
    }
}
