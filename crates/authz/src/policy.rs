//! Declarative policy documents.
//!
//! Rule sets are usually assembled from configuration rather than code:
//! a policy document is a list of textual rule entries, deserialized with
//! serde and converted into a [`RuleSet`] all-or-nothing (one bad entry
//! fails the whole document; no partial rule set is ever produced).

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;
use crate::rule::Rule;
use crate::ruleset::RuleSet;

/// One rule entry as it appears in configuration.
///
/// Everything is a plain string, exactly the textual form [`Rule::new`]
/// accepts: `users` supports the `*` and `?` tokens, `verb` may be empty
/// (any verb). Omitted fields default to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    pub action: String,
    #[serde(default)]
    pub users: String,
    #[serde(default)]
    pub roles: String,
    #[serde(default)]
    pub verb: String,
}

impl TryFrom<&RuleSpec> for Rule {
    type Error = crate::error::RuleError;

    fn try_from(spec: &RuleSpec) -> Result<Self, Self::Error> {
        Rule::new(&spec.action, &spec.users, &spec.roles, &spec.verb)
    }
}

impl TryFrom<RuleSpec> for Rule {
    type Error = crate::error::RuleError;

    fn try_from(spec: RuleSpec) -> Result<Self, Self::Error> {
        Rule::try_from(&spec)
    }
}

/// The on-disk shape of a policy: an ordered list of rule entries.
///
/// Document order is evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDocument {
    pub rules: Vec<RuleSpec>,
}

impl TryFrom<PolicyDocument> for RuleSet {
    type Error = PolicyError;

    fn try_from(document: PolicyDocument) -> Result<Self, Self::Error> {
        let mut rules = Vec::with_capacity(document.rules.len());
        for spec in &document.rules {
            rules.push(Rule::try_from(spec)?);
        }
        Ok(RuleSet::from(rules))
    }
}

impl RuleSet {
    /// Parse a JSON policy document into a rule set.
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let document: PolicyDocument = serde_json::from_str(json)?;
        Self::try_from(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuleError;
    use palisade_identity::User;

    #[test]
    fn document_converts_in_order() {
        let rules = RuleSet::from_json(
            r#"{
                "rules": [
                    { "action": "deny", "users": "?" },
                    { "action": "allow", "roles": "admin", "verb": "post" },
                    { "action": "deny", "users": "*" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(rules.len(), 3);

        let admin = User::named("root").with_roles(["Admin"]);
        assert!(rules.is_allowed(&admin, "post"));
        assert!(!rules.is_allowed(&admin, "get"));
        assert!(!rules.is_allowed(&User::guest(), "post"));
    }

    #[test]
    fn omitted_fields_default_to_empty() {
        let spec: RuleSpec = serde_json::from_str(r#"{ "action": "allow" }"#).unwrap();
        assert_eq!(spec.users, "");
        assert_eq!(spec.roles, "");
        assert_eq!(spec.verb, "");

        let rule = Rule::try_from(spec).unwrap();
        assert_eq!(rule.verb(), crate::Verb::Any);
        assert!(rule.users().is_empty());
    }

    #[test]
    fn non_object_rule_entry_fails_parsing() {
        let err = RuleSet::from_json(r#"{ "rules": [ 42 ] }"#).unwrap_err();
        assert!(matches!(err, PolicyError::Parse(_)));
    }

    #[test]
    fn bad_token_fails_the_whole_document() {
        let err = RuleSet::from_json(
            r#"{
                "rules": [
                    { "action": "allow", "users": "alice" },
                    { "action": "allow", "verb": "delete" }
                ]
            }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PolicyError::Rule(RuleError::InvalidVerb(ref v)) if v == "delete"
        ));
    }

    #[test]
    fn specs_round_trip_through_serde() {
        let document = PolicyDocument {
            rules: vec![RuleSpec {
                action: "allow".into(),
                users: "alice,?".into(),
                roles: "ops".into(),
                verb: "get".into(),
            }],
        };
        let json = serde_json::to_string(&document).unwrap();
        let back: PolicyDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, document);
    }
}
