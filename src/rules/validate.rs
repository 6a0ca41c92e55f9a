// src/rules/validate.rs

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::errors::{MmakeError, Result};
use crate::rules::model::{RawRuleFile, Rule, RuleStore};

impl TryFrom<RawRuleFile> for RuleStore {
    type Error = MmakeError;

    fn try_from(raw: RawRuleFile) -> std::result::Result<Self, Self::Error> {
        validate_rules(&raw.rule)?;
        Ok(RuleStore::from_rules(raw.rule))
    }
}

/// Semantic checks shared by both rule-file formats.
///
/// Prerequisites without a rule are fine: they may name source files.
pub fn validate_rules(rules: &[Rule]) -> Result<()> {
    validate_rule_shapes(rules)?;
    validate_unique_targets(rules)?;
    validate_acyclic(rules)?;
    Ok(())
}

fn validate_rule_shapes(rules: &[Rule]) -> Result<()> {
    for rule in rules {
        if rule.target.is_empty() {
            return Err(MmakeError::InvalidRules(
                "rule with an empty target name".to_string(),
            ));
        }
        if rule.target.contains(char::is_whitespace) {
            return Err(MmakeError::InvalidRules(format!(
                "target name '{}' must not contain whitespace",
                rule.target
            )));
        }
        for prereq in &rule.prerequisites {
            if prereq.is_empty() || prereq.contains(char::is_whitespace) {
                return Err(MmakeError::InvalidRules(format!(
                    "rule '{}' has an invalid prerequisite name '{prereq}'",
                    rule.target
                )));
            }
        }
        if rule.command.first().is_none_or(|program| program.is_empty()) {
            return Err(MmakeError::InvalidRules(format!(
                "rule '{}' has an empty command",
                rule.target
            )));
        }
    }
    Ok(())
}

fn validate_unique_targets(rules: &[Rule]) -> Result<()> {
    let mut seen = HashSet::new();
    for rule in rules {
        if !seen.insert(rule.target.as_str()) {
            return Err(MmakeError::InvalidRules(format!(
                "target '{}' is declared more than once",
                rule.target
            )));
        }
    }
    Ok(())
}

fn validate_acyclic(rules: &[Rule]) -> Result<()> {
    // Edge direction: target -> prerequisite.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for rule in rules {
        graph.add_node(rule.target.as_str());
        for prereq in &rule.prerequisites {
            graph.add_edge(rule.target.as_str(), prereq.as_str(), ());
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(MmakeError::DependencyCycle(cycle_through(
            &graph,
            cycle.node_id(),
        ))),
    }
}

/// Find a path `start -> ... -> start` to show the user.
fn cycle_through(graph: &DiGraphMap<&str, ()>, start: &str) -> Vec<String> {
    fn walk<'a>(
        graph: &DiGraphMap<&'a str, ()>,
        start: &'a str,
        node: &'a str,
        path: &mut Vec<&'a str>,
        visited: &mut HashSet<&'a str>,
    ) -> bool {
        for next in graph.neighbors(node) {
            if next == start {
                path.push(start);
                return true;
            }
            if visited.insert(next) {
                path.push(next);
                if walk(graph, start, next, path, visited) {
                    return true;
                }
                path.pop();
            }
        }
        false
    }

    let Some(start) = graph.nodes().find(|n| *n == start) else {
        return vec![start.to_string()];
    };
    let mut path = vec![start];
    let mut visited = HashSet::from([start]);
    walk(graph, start, start, &mut path, &mut visited);
    path.into_iter().map(str::to_string).collect()
}
