//! Plain principal value type.

use serde::{Deserialize, Serialize};

use crate::Identity;

/// A concrete principal: name, granted roles, guest flag.
///
/// Roles are stored lower-cased so membership checks are case-insensitive
/// regardless of how the roles were spelled at construction. This is a value
/// object for hosts and tests, not a role store: resolving which roles a
/// principal holds is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    name: String,
    roles: Vec<String>,
    guest: bool,
}

impl User {
    /// An authenticated principal with the given name and no roles.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roles: Vec::new(),
            guest: false,
        }
    }

    /// An anonymous/unauthenticated principal.
    pub fn guest() -> Self {
        Self {
            name: String::new(),
            roles: Vec::new(),
            guest: true,
        }
    }

    /// Grant roles. Names are normalized (trimmed, lower-cased) on the way in.
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for role in roles {
            let role = role.as_ref().trim().to_lowercase();
            if !role.is_empty() && !self.roles.contains(&role) {
                self.roles.push(role);
            }
        }
        self
    }

    /// Roles granted to this principal (normalized form).
    pub fn roles(&self) -> &[String] {
        &self.roles
    }
}

impl Identity for User {
    fn is_guest(&self) -> bool {
        self.guest
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_in_role(&self, role: &str) -> bool {
        let role = role.trim();
        self.roles.iter().any(|r| r.eq_ignore_ascii_case(role))
    }
}
