//! Expectations checked after each connection.

use tether_core::{Node, Value};
use tether_rule::DispatchOutcome;

use crate::error::{ScenarioError, ScenarioResult};

/// What a connection step is expected to do to its child.
#[derive(Debug, Default)]
pub struct Expectation {
    /// `Some(None)` expects no match; `Some(Some(rule))` expects that rule.
    pub fired: Option<Option<String>>,
    pub applied: Option<bool>,
    pub params: Vec<(String, Value)>,
    pub absent: Vec<String>,
    /// The child must come out exactly as it went in.
    pub untouched: bool,
    /// Only the listed params may differ from the child that went in.
    pub only_listed: bool,
}

impl Expectation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect the named rule to fire.
    pub fn fires(mut self, rule: impl Into<String>) -> Self {
        self.fired = Some(Some(rule.into()));
        self
    }

    /// Expect no rule to match; implies the child is untouched.
    pub fn no_match(mut self) -> Self {
        self.fired = Some(None);
        self.untouched = true;
        self
    }

    /// Expect the fired mutation to report whether it changed the child.
    pub fn applied(mut self, applied: bool) -> Self {
        self.applied = Some(applied);
        self
    }

    /// Expect a parameter value on the child afterwards.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Expect a parameter to be missing on the child afterwards.
    pub fn absent(mut self, name: impl Into<String>) -> Self {
        self.absent.push(name.into());
        self
    }

    pub fn untouched(mut self) -> Self {
        self.untouched = true;
        self
    }

    /// Fail if any parameter other than those given with [`Expectation::param`] changed.
    pub fn only_listed(mut self) -> Self {
        self.only_listed = true;
        self
    }

    /// Check the outcome and the child before and after the connection.
    pub fn verify(
        &self,
        scenario: &str,
        step: &str,
        outcome: &DispatchOutcome,
        before: &Node,
        after: &Node,
    ) -> ScenarioResult<()> {
        let fail = |message: String| Err(ScenarioError::expectation_failed(scenario, step, message));

        if let Some(ref expected) = self.fired {
            let actual = outcome.rule();
            if actual != expected.as_deref() {
                return fail(format!("expected rule {:?}, got {:?}", expected, actual));
            }
        }

        if let Some(expected) = self.applied {
            match outcome {
                DispatchOutcome::Fired { applied, .. } if *applied == expected => {}
                other => return fail(format!("expected applied={}, got {:?}", expected, other)),
            }
        }

        for (name, value) in &self.params {
            if after.get_param(name) != Some(value) {
                return fail(format!(
                    "expected {} = {}, got {:?}",
                    name,
                    value,
                    after.get_param(name)
                ));
            }
        }

        for name in &self.absent {
            if let Some(value) = after.get_param(name) {
                return fail(format!("expected {} to be absent, got {}", name, value));
            }
        }

        if self.untouched && after != before {
            return fail(format!("expected child untouched, got {:?}", after.parameters));
        }

        if self.only_listed {
            for (name, value) in &after.parameters {
                let listed = self.params.iter().any(|(n, _)| n == name);
                if !listed && before.get_param(name) != Some(value) {
                    return fail(format!("unexpected change to {}", name));
                }
            }
            for name in before.parameters.keys() {
                let listed = self.params.iter().any(|(n, _)| n == name);
                if !listed && after.get_param(name).is_none() {
                    return fail(format!("unexpected removal of {}", name));
                }
            }
        }

        Ok(())
    }
}
