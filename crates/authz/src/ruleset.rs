//! Ordered rule collection with first-match-wins evaluation.

use palisade_identity::Identity;
use tracing::{debug, trace};

use crate::rule::Rule;

/// An ordered set of authorization rules.
///
/// Insertion order is evaluation order and is significant: the first rule
/// that expresses an opinion decides. Assemble the set during configuration,
/// before evaluation traffic starts; evaluation never mutates it, so
/// concurrent reads need no coordination. If a runtime needs live
/// reconfiguration, replace the whole set atomically — the engine provides
/// no internal synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule at the end (the common path).
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Insert a rule at an arbitrary position, shifting subsequent rules.
    ///
    /// # Panics
    /// Panics if `index > len`, like `Vec::insert`.
    pub fn insert(&mut self, index: usize, rule: Rule) {
        self.rules.insert(index, rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Decide whether a principal may proceed with the given request verb.
    ///
    /// Rules are scanned in insertion order; the first one expressing an
    /// opinion decides. When no rule matches — the empty set included — the
    /// request is **allowed**: the engine fails open for unmatched requests,
    /// and fail-closed callers append a catch-all deny rule (`deny`, users
    /// `*`, any verb) as the last rule.
    pub fn is_allowed(&self, identity: &dyn Identity, verb: &str) -> bool {
        let verb = verb.trim().to_lowercase();
        for (index, rule) in self.rules.iter().enumerate() {
            if let Some(action) = rule.evaluate(identity, &verb) {
                debug!(
                    rule = index,
                    action = %action,
                    verb = %verb,
                    "authorization rule matched"
                );
                return action == crate::Action::Allow;
            }
        }
        trace!(verb = %verb, "no authorization rule matched, allowing by default");
        true
    }

    /// Like [`RuleSet::is_allowed`], for callers that may not hold a
    /// principal at all. A missing principal is never authorized — a routine
    /// case, not an error.
    pub fn is_user_allowed(&self, identity: Option<&dyn Identity>, verb: &str) -> bool {
        match identity {
            Some(identity) => self.is_allowed(identity, verb),
            None => false,
        }
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = core::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
