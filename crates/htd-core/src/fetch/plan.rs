//! Phase one: validate input and build the batch.

use std::path::{Path, PathBuf};

use crate::filename::{self, FileLayout};
use crate::identifier::Identifier;
use crate::sequence::{self, SequenceBounds, SequenceError};

/// Raw batch input, as collected from flags or prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchRequest {
    pub prefix: String,
    pub branch: String,
    pub bounds: SequenceBounds,
}

/// Validated, ordered identifiers for one run.
#[derive(Debug, Clone)]
pub struct BatchPlan {
    prefix: String,
    branch: String,
    identifiers: Vec<Identifier>,
}

impl BatchPlan {
    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn first(&self) -> Option<&Identifier> {
        self.identifiers.first()
    }

    pub fn last(&self) -> Option<&Identifier> {
        self.identifiers.last()
    }

    /// Where this batch's files are saved.
    pub fn target_dir(&self, output_dir: &Path, layout: FileLayout) -> PathBuf {
        filename::batch_dir(output_dir, &self.prefix, &self.branch, layout)
    }
}

/// Builds the identifier list. No network or filesystem access.
pub fn plan(request: &BatchRequest) -> Result<BatchPlan, SequenceError> {
    let prefix = request.prefix.trim();
    let branch = request.branch.trim();
    let identifiers = sequence::generate(&request.bounds)?
        .into_iter()
        .map(|suffix| Identifier::new(prefix, branch, suffix))
        .collect::<Vec<_>>();

    tracing::debug!(count = identifiers.len(), prefix, branch, "planned batch");

    Ok(BatchPlan {
        prefix: prefix.to_string(),
        branch: branch.to_string(),
        identifiers,
    })
}
