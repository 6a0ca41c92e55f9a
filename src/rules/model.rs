// src/rules/model.rs

use std::collections::HashMap;

use serde::Deserialize;

/// A single rule: how to produce `target` once its prerequisites are current.
///
/// In a TOML manifest this is one `[[rule]]` table:
///
/// ```toml
/// [[rule]]
/// target = "app"
/// prerequisites = ["main.o", "util.o"]
/// command = ["cc", "-o", "app", "main.o", "util.o"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rule {
    pub target: String,

    /// Prerequisites in declaration order.
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Program followed by its arguments. Never run through a shell.
    pub command: Vec<String>,
}

impl Rule {
    pub fn new<P, C>(target: impl Into<String>, prerequisites: P, command: C) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            target: target.into(),
            prerequisites: prerequisites.into_iter().map(Into::into).collect(),
            command: command.into_iter().map(Into::into).collect(),
        }
    }
}

/// Rules exactly as read from a file, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRuleFile {
    #[serde(default)]
    pub rule: Vec<Rule>,
}

/// Read-only, declaration-ordered collection of rules.
#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    rules: Vec<Rule>,
    index: HashMap<String, usize>,
}

impl RuleStore {
    /// Build a store without validation.
    ///
    /// If a target is declared twice the first declaration wins. Prefer
    /// `RuleStore::try_from(RawRuleFile)` for anything read from disk.
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        let mut index = HashMap::with_capacity(rules.len());
        for (i, rule) in rules.iter().enumerate() {
            index.entry(rule.target.clone()).or_insert(i);
        }
        Self { rules, index }
    }

    pub fn rule(&self, target: &str) -> Option<&Rule> {
        self.index.get(target).map(|&i| &self.rules[i])
    }

    pub fn contains(&self, target: &str) -> bool {
        self.index.contains_key(target)
    }

    /// Target of the first declared rule, used when no goal is given.
    pub fn default_target(&self) -> Option<&str> {
        self.rules.first().map(|r| r.target.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
