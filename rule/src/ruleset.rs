//! Ordered rule sets.

use crate::error::{RuleError, RuleResult};
use crate::rule::Rule;

/// An ordered sequence of rules with unique names, fixed once built.
///
/// Order is load-bearing: the dispatcher fires the first rule that matches
/// and never looks at the rest.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// The standard rules: `prompt-default`, then `session-id-default`.
    pub fn standard() -> Self {
        Self {
            rules: vec![Rule::prompt_default(), Rule::session_id_default()],
        }
    }

    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// A copy of this set without the named rules, order preserved.
    pub fn without(&self, names: &[impl AsRef<str>]) -> RuleResult<Self> {
        for name in names {
            let name = name.as_ref();
            if self.get(name).is_none() {
                return Err(RuleError::unknown_rule(name));
            }
        }
        let rules = self
            .rules
            .iter()
            .filter(|rule| !names.iter().any(|n| n.as_ref() == rule.name()))
            .cloned()
            .collect();
        Ok(Self { rules })
    }

    /// Get a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Rule names in evaluation order.
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(Rule::name).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Builder for a rule set. Rules are evaluated in the order they are added.
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: Vec<Rule>,
}

impl RuleSetBuilder {
    /// Append a rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append the standard rules in their standard order.
    pub fn standard_rules(self) -> Self {
        self.rule(Rule::prompt_default()).rule(Rule::session_id_default())
    }

    /// Build the rule set, rejecting duplicate names.
    pub fn build(self) -> RuleResult<RuleSet> {
        for (i, rule) in self.rules.iter().enumerate() {
            if self.rules[..i].iter().any(|r| r.name() == rule.name()) {
                return Err(RuleError::duplicate_rule(rule.name()));
            }
        }
        Ok(RuleSet { rules: self.rules })
    }
}
