//! Deterministic output names for saved hall tickets.
//!
//! The name is the only de-duplication marker: a file that already exists
//! under the derived name is never fetched again.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::identifier::Identifier;

/// Characters that are replaced with `_` in ticket labels.
const RESERVED: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

const EXTENSION: &str = "pdf";

/// How saved files are laid out under the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileLayout {
    /// `{output}/{identifier}_{label}.pdf`
    #[default]
    Flat,
    /// `{output}/{prefix}_{branch}/{prefix}_{branch}_{suffix}_{label}.pdf`
    BatchFolder,
}

/// Replaces each of `\ / : * ? " < > |` with `_`. Nothing else changes.
pub fn sanitize_label(label: &str) -> String {
    label
        .chars()
        .map(|c| if RESERVED.contains(&c) { '_' } else { c })
        .collect()
}

/// Directory that receives a batch's files.
pub fn batch_dir(output_dir: &Path, prefix: &str, branch: &str, layout: FileLayout) -> PathBuf {
    match layout {
        FileLayout::Flat => output_dir.to_path_buf(),
        FileLayout::BatchFolder => output_dir.join(format!("{}_{}", prefix, branch)),
    }
}

/// File name (no directory) for one ticket of `id`.
pub fn document_filename(id: &Identifier, label: &str, layout: FileLayout) -> String {
    let label = sanitize_label(label);
    match layout {
        FileLayout::Flat => format!("{}_{}.{}", id, label, EXTENSION),
        FileLayout::BatchFolder => format!(
            "{}_{}_{}_{}.{}",
            id.prefix(),
            id.branch(),
            id.suffix(),
            label,
            EXTENSION
        ),
    }
}
