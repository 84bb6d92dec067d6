//! Role-based dashboard selection.

use bookhive_core::Role;

/// The dashboard shell an account lands on.
///
/// Exactly one shell exists per role; selection is a one-shot mapping with
/// no transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardShell {
    /// Ordinary shopper: orders, wishlist, reviews, payments.
    User,
    /// Catalog management: books, stock, order fulfillment.
    Librarian,
    /// Everything the librarian sees, plus account and role management.
    Admin,
}

impl DashboardShell {
    /// Pick the shell for a role.
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::User => Self::User,
            Role::Librarian => Self::Librarian,
            Role::Admin => Self::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_role_gets_its_own_shell() {
        assert_eq!(DashboardShell::for_role(Role::User), DashboardShell::User);
        assert_eq!(
            DashboardShell::for_role(Role::Librarian),
            DashboardShell::Librarian
        );
        assert_eq!(DashboardShell::for_role(Role::Admin), DashboardShell::Admin);
    }

    #[test]
    fn test_unknown_role_string_falls_back_to_user_shell() {
        let role = Role::from_str_lossy(Some("moderator"));
        assert_eq!(DashboardShell::for_role(role), DashboardShell::User);

        let role = Role::from_str_lossy(None);
        assert_eq!(DashboardShell::for_role(role), DashboardShell::User);
    }
}
