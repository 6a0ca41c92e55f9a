// src/rules/mod.rs

//! Rule store: the target -> (prerequisites, command) graph.
//!
//! Responsibilities:
//! - Define the rule data model and the ordered store (`model.rs`).
//! - Parse the tab-indented `mmakefile` format (`parser.rs`).
//! - Load a rule file from disk in either format (`loader.rs`).
//! - Validate duplicates, empty commands and cycles (`validate.rs`).

pub mod loader;
pub mod model;
pub mod parser;
pub mod validate;

pub use loader::{DEFAULT_RULE_FILE, RuleFileFormat, load_and_validate, load_from_path};
pub use model::{RawRuleFile, Rule, RuleStore};
pub use parser::parse_mmakefile;
