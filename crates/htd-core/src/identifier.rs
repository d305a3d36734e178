//! Full identifiers used as portal lookup keys.

use std::fmt;

use crate::sequence::Suffix;

/// `prefix + branch code + suffix`, e.g. `23071A` + `66` + `A5`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    prefix: String,
    branch: String,
    suffix: Suffix,
    full: String,
}

impl Identifier {
    pub fn new(prefix: &str, branch: &str, suffix: Suffix) -> Self {
        let full = format!("{}{}{}", prefix, branch, suffix);
        Self {
            prefix: prefix.to_string(),
            branch: branch.to_string(),
            suffix,
            full,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn suffix(&self) -> Suffix {
        self.suffix
    }

    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}
