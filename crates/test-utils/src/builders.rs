#![allow(dead_code)]

use mmake::rules::{RawRuleFile, Rule, RuleStore};

/// Builder for `RuleStore` to simplify test setup.
///
/// Rules keep the order they are added in, so the first one is the default
/// goal.
pub struct RuleStoreBuilder {
    rules: Vec<Rule>,
}

impl RuleStoreBuilder {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Shorthand for a rule whose command is `touch <target>`.
    pub fn with_touch_rule(self, target: &str, prerequisites: &[&str]) -> Self {
        self.with_rule(RuleBuilder::new(target).after_all(prerequisites).build())
    }

    /// Validated store; panics on duplicate targets or cycles.
    pub fn build(self) -> RuleStore {
        RuleStore::try_from(RawRuleFile { rule: self.rules })
            .expect("Failed to build valid rule store from builder")
    }

    /// Store without validation, for exercising the planner's own guards.
    pub fn build_unchecked(self) -> RuleStore {
        RuleStore::from_rules(self.rules)
    }
}

impl Default for RuleStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Rule`. The command defaults to `touch <target>`.
pub struct RuleBuilder {
    rule: Rule,
}

impl RuleBuilder {
    pub fn new(target: &str) -> Self {
        Self {
            rule: Rule {
                target: target.to_string(),
                prerequisites: vec![],
                command: vec!["touch".to_string(), target.to_string()],
            },
        }
    }

    pub fn after(mut self, prerequisite: &str) -> Self {
        self.rule.prerequisites.push(prerequisite.to_string());
        self
    }

    pub fn after_all(mut self, prerequisites: &[&str]) -> Self {
        self.rule
            .prerequisites
            .extend(prerequisites.iter().map(|p| p.to_string()));
        self
    }

    pub fn command(mut self, tokens: &[&str]) -> Self {
        self.rule.command = tokens.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn build(self) -> Rule {
        self.rule
    }
}
