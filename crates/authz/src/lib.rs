//! `palisade-authz` — ordered allow/deny authorization rules.
//!
//! A [`Rule`] is parsed once from a textual specification (action, comma
//! separated users, comma separated roles, optional verb) and never mutated.
//! A [`RuleSet`] evaluates rules in insertion order, first match wins; when
//! no rule expresses an opinion the request is **allowed**. Callers that
//! want fail-closed behavior append an explicit catch-all deny rule
//! (`deny`, users `*`) as the last rule.
//!
//! The engine is pure: no IO, no clocks, no shared mutable state. Assemble
//! the rule set before traffic starts and evaluate concurrently without
//! coordination.

pub mod error;
pub mod policy;
pub mod rule;
pub mod ruleset;

pub use error::{PolicyError, RuleError, RuleResult};
pub use policy::{PolicyDocument, RuleSpec};
pub use rule::{Action, Rule, Verb};
pub use ruleset::RuleSet;
