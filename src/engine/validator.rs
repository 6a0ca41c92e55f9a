// src/engine/validator.rs

use crate::errors::{MmakeError, Result};
use crate::rules::RuleStore;

/// Check that every explicitly requested goal has a rule.
///
/// Stops at the first goal without one. Goals that only exist as files are
/// rejected here even though they would be fine as prerequisites.
pub fn validate_targets(rules: &RuleStore, targets: &[String]) -> Result<()> {
    match targets.iter().find(|t| !rules.contains(t)) {
        Some(missing) => Err(MmakeError::RuleNotFound(missing.clone())),
        None => Ok(()),
    }
}

/// Goals to build: the explicit targets, or else the first declared rule.
///
/// Empty when nothing was requested and the rule file has no rules.
pub fn resolve_goals(rules: &RuleStore, explicit: &[String]) -> Vec<String> {
    if !explicit.is_empty() {
        return explicit.to_vec();
    }
    rules
        .default_target()
        .map(|t| vec![t.to_string()])
        .unwrap_or_default()
}
