// src/rules/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::{MmakeError, Result};
use crate::rules::model::{RawRuleFile, RuleStore};
use crate::rules::parser::parse_mmakefile;

/// Rule file used when `-f` is not given.
pub const DEFAULT_RULE_FILE: &str = "mmakefile";

/// On-disk syntax of a rule file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFileFormat {
    /// Tab-indented `mmakefile` text.
    Mmakefile,
    /// `[[rule]]` tables in TOML.
    Toml,
}

impl RuleFileFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => RuleFileFormat::Toml,
            _ => RuleFileFormat::Mmakefile,
        }
    }

    pub fn parse(self, source: &str) -> Result<RawRuleFile> {
        match self {
            RuleFileFormat::Mmakefile => parse_mmakefile(source),
            RuleFileFormat::Toml => Ok(toml::from_str(source)?),
        }
    }
}

/// Read and parse a rule file without semantic validation.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawRuleFile> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| MmakeError::RuleFileIo {
        path: path.to_path_buf(),
        source,
    })?;

    let format = RuleFileFormat::from_path(path);
    debug!(path = %path.display(), ?format, "parsing rule file");
    format.parse(&source)
}

/// Load a rule file and validate it into a [`RuleStore`].
///
/// This is the entry point the binary uses; it rejects duplicate targets,
/// empty commands and dependency cycles before anything is built.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<RuleStore> {
    let raw = load_from_path(&path)?;
    let store = RuleStore::try_from(raw)?;
    debug!(rules = store.len(), "rule file loaded");
    Ok(store)
}
