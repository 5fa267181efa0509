//! A single authorization rule.
//!
//! A rule is specified by an action (required), a comma-separated user list,
//! a comma-separated role list, and an optional verb. Guest (anonymous)
//! principals are represented by `?`; every principal including guests by
//! `*`. Users and roles are case-insensitive.

use core::str::FromStr;

use palisade_identity::Identity;

use crate::error::{RuleError, RuleResult};

// ─────────────────────────────────────────────────────────────────────────────
// Action
// ─────────────────────────────────────────────────────────────────────────────

/// What a matching rule decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Allow,
    Deny,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Allow => "allow",
            Action::Deny => "deny",
        }
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = RuleError;

    fn from_str(s: &str) -> RuleResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "allow" => Ok(Action::Allow),
            "deny" => Ok(Action::Deny),
            _ => Err(RuleError::InvalidAction(s.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Verb
// ─────────────────────────────────────────────────────────────────────────────

/// The request verb a rule optionally restricts itself to.
///
/// `Any` (the empty token in textual form) applies regardless of the
/// request verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verb {
    #[default]
    Any,
    Get,
    Post,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Any => "",
            Verb::Get => "get",
            Verb::Post => "post",
        }
    }

    /// Whether this rule verb applies to a request verb.
    ///
    /// The request verb is compared case-insensitively; a verb outside
    /// get/post never matches a concrete rule verb, only `Any`.
    pub fn matches(&self, request_verb: &str) -> bool {
        match self {
            Verb::Any => true,
            Verb::Get | Verb::Post => request_verb.trim().eq_ignore_ascii_case(self.as_str()),
        }
    }
}

impl core::fmt::Display for Verb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = RuleError;

    fn from_str(s: &str) -> RuleResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "" => Ok(Verb::Any),
            "get" => Ok(Verb::Get),
            "post" => Ok(Verb::Post),
            _ => Err(RuleError::InvalidVerb(s.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rule
// ─────────────────────────────────────────────────────────────────────────────

/// An immutable authorization directive.
///
/// # Invariants
/// - `users` and `roles` hold trimmed, lower-cased tokens; wildcard tokens
///   never appear in `users`.
/// - A `*` among the user tokens sets `applies_to_everyone` and stops user
///   token processing; tokens after it are ignored.
/// - Built once from textual form, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    action: Action,
    users: Vec<String>,
    roles: Vec<String>,
    verb: Verb,
    everyone: bool,
    guest: bool,
}

impl Rule {
    /// Parse a rule from its textual specification.
    ///
    /// `users` and `roles` are comma-separated lists; empty tokens are
    /// silently discarded. `verb` may be empty, meaning the rule applies to
    /// any request verb.
    pub fn new(action: &str, users: &str, roles: &str, verb: &str) -> RuleResult<Self> {
        let action = action.parse::<Action>()?;
        let verb = verb.parse::<Verb>()?;

        let mut everyone = false;
        let mut guest = false;
        let mut user_list = Vec::new();
        for token in users.split(',') {
            let token = token.trim().to_lowercase();
            if token.is_empty() {
                continue;
            }
            if token == "*" {
                everyone = true;
                break;
            } else if token == "?" {
                guest = true;
            } else {
                user_list.push(token);
            }
        }

        let roles = roles
            .split(',')
            .map(|token| token.trim().to_lowercase())
            .filter(|token| !token.is_empty())
            .collect();

        Ok(Self {
            action,
            users: user_list,
            roles,
            verb,
            everyone,
            guest,
        })
    }

    /// Convenience constructor for rules without a verb restriction.
    pub fn for_any_verb(action: &str, users: &str, roles: &str) -> RuleResult<Self> {
        Self::new(action, users, roles, "")
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Normalized user identifiers this rule names (wildcards excluded).
    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// Normalized role names this rule names.
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    /// Whether the raw user list contained `*`.
    pub fn applies_to_everyone(&self) -> bool {
        self.everyone
    }

    /// Whether the raw user list contained `?`.
    pub fn applies_to_guest(&self) -> bool {
        self.guest
    }

    /// Evaluate this rule for a principal and request verb.
    ///
    /// Returns `Some(action)` when the rule expresses an opinion about the
    /// principal, `None` when it does not apply (verb mismatch, or the
    /// principal is named by neither the user list nor the role list).
    ///
    /// Pure: no side effects, no mutation of rule or principal.
    pub fn evaluate(&self, identity: &dyn Identity, verb: &str) -> Option<Action> {
        if !self.verb.matches(verb) {
            return None;
        }
        if self.everyone || (self.guest && identity.is_guest()) {
            return Some(self.action);
        }
        let name = identity.name().to_lowercase();
        if self.users.iter().any(|u| *u == name) {
            return Some(self.action);
        }
        // Any matching role wins; stored insertion order, first hit stops.
        if self.roles.iter().any(|role| identity.is_in_role(role)) {
            return Some(self.action);
        }
        None
    }
}
