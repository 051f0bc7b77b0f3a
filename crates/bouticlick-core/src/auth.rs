//! # Mock Identity Directory
//!
//! Stand-in for a real authentication backend. Two demo accounts are
//! hard-wired, and registration mints a fresh `user` identity without
//! checking for existing accounts.
//!
//! ```text
//! ┌──────────────────────────────┬──────────┬──────────────┬───────┐
//! │ email                        │ password │ name         │ role  │
//! ├──────────────────────────────┼──────────┼──────────────┼───────┤
//! │ admin@example.com            │ admin    │ Admin User   │ admin │
//! │ user@example.com             │ user     │ Regular User │ user  │
//! └──────────────────────────────┴──────────┴──────────────┴───────┘
//! ```
//!
//! Nothing here touches storage; the app's `AuthStore` decides what to
//! persist.

use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::types::{Role, User};
use crate::validation::{validate_display_name, validate_email, validate_password};

struct DemoAccount {
    id: &'static str,
    email: &'static str,
    password: &'static str,
    name: &'static str,
    role: Role,
}

const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        id: "1",
        email: "admin@example.com",
        password: "admin",
        name: "Admin User",
        role: Role::Admin,
    },
    DemoAccount {
        id: "2",
        email: "user@example.com",
        password: "user",
        name: "Regular User",
        role: Role::User,
    },
];

/// The mock directory. Stateless; every call is answered from the table above.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDirectory;

impl MockDirectory {
    pub fn new() -> Self {
        MockDirectory
    }

    /// Checks an email/password pair against the demo accounts.
    ///
    /// The email is trimmed; both values are otherwise compared exactly.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<User> {
        let email = email.trim();
        DEMO_ACCOUNTS
            .iter()
            .find(|a| a.email == email && a.password == password)
            .map(|a| User {
                id: a.id.to_string(),
                email: a.email.to_string(),
                name: a.name.to_string(),
                role: a.role,
            })
    }

    /// Like [`MockDirectory::authenticate`], but as a `CoreResult`.
    pub fn login(&self, email: &str, password: &str) -> CoreResult<User> {
        self.authenticate(email, password)
            .ok_or(CoreError::InvalidCredentials)
    }

    /// Registers a new account.
    ///
    /// ## Behavior
    /// - Inputs are validated (`validation` module); a bad field is a
    ///   `CoreError::Validation`
    /// - The new identity always has `Role::User` and a fresh UUID id
    /// - The password is checked but never stored
    pub fn register(&self, name: &str, email: &str, password: &str) -> CoreResult<User> {
        let name = validate_display_name(name)?;
        let email = validate_email(email)?;
        validate_password(password)?;

        Ok(User {
            id: Uuid::new_v4().to_string(),
            email,
            name,
            role: Role::User,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_login() {
        let user = MockDirectory::new()
            .authenticate("admin@example.com", "admin")
            .unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.name, "Admin User");
        assert!(user.is_admin());
    }

    #[test]
    fn test_regular_login() {
        let user = MockDirectory::new()
            .login(" user@example.com ", "user")
            .unwrap();
        assert_eq!(user.id, "2");
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let dir = MockDirectory::new();
        assert!(dir.authenticate("admin@example.com", "user").is_none());
        assert!(dir.authenticate("admin@example.com", "Admin").is_none());
        assert!(matches!(
            dir.login("nobody@example.com", "x"),
            Err(CoreError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_register_mints_user_role() {
        let dir = MockDirectory::new();
        let a = dir.register("Jane", "Jane@Shop.com", "secret").unwrap();
        let b = dir.register("Jane", "jane@shop.com", "secret").unwrap();

        assert_eq!(a.role, Role::User);
        assert_eq!(a.email, "jane@shop.com");
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_register_validates_input() {
        let dir = MockDirectory::new();
        assert!(matches!(
            dir.register("", "jane@shop.com", "secret"),
            Err(CoreError::Validation(_))
        ));
        assert!(dir.register("Jane", "not-an-email", "secret").is_err());
        assert!(dir.register("Jane", "jane@shop.com", "").is_err());
    }
}
