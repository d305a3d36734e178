//! Per-identifier outcomes and the run summary.

use std::fmt;
use std::path::PathBuf;

use super::FetchFailure;
use crate::identifier::Identifier;

/// Result of handling one ticket descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketOutcome {
    Downloaded { path: PathBuf, bytes: usize },
    /// File already on disk; no download request was made.
    AlreadyDownloaded { path: PathBuf },
    DownloadFailed { label: String, status: u32 },
}

/// How one identifier's lookup ended, short of an unexpected failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierOutcome {
    /// List lookup returned a non-success status.
    NetworkFailure { status: u32 },
    /// List body was not a ticket list (the portal answers unknown ids with HTML).
    InvalidIdentifier,
    NoDocuments,
    /// Tickets were listed and every one was handled; see `IdentifierReport::tickets`.
    Documents,
}

#[derive(Debug)]
pub struct IdentifierReport {
    pub identifier: Identifier,
    /// Tickets handled before `result` was decided. Kept on failure too, so
    /// documents saved before an unexpected error are still reported.
    pub tickets: Vec<TicketOutcome>,
    pub result: Result<IdentifierOutcome, FetchFailure>,
}

impl IdentifierReport {
    /// Console lines for this identifier: one per handled ticket, then one for
    /// the overall result unless every ticket was handled.
    pub fn status_lines(&self) -> Vec<String> {
        let id = &self.identifier;
        let mut lines: Vec<String> = self
            .tickets
            .iter()
            .map(|t| match t {
                TicketOutcome::Downloaded { path, bytes } => {
                    format!("[ok]    {}: downloaded {} ({} bytes)", id, file_name(path), bytes)
                }
                TicketOutcome::AlreadyDownloaded { path } => {
                    format!("[skip]  {}: already downloaded {}", id, file_name(path))
                }
                TicketOutcome::DownloadFailed { label, status } => {
                    format!("[fail]  {}: failed to download {:?} (HTTP {})", id, label, status)
                }
            })
            .collect();

        let last = match &self.result {
            Err(e) => Some(format!("[error] {}: unexpected error - {}", id, e)),
            Ok(IdentifierOutcome::NetworkFailure { status }) => Some(format!(
                "[warn]  {}: network error or bad request (HTTP {})",
                id, status
            )),
            Ok(IdentifierOutcome::InvalidIdentifier) => {
                Some(format!("[warn]  {}: not found (invalid identifier)", id))
            }
            Ok(IdentifierOutcome::NoDocuments) => {
                Some(format!("[warn]  {}: no hall tickets available", id))
            }
            Ok(IdentifierOutcome::Documents) => None,
        };
        lines.extend(last);
        lines
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Counts of every outcome kind across a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Confirmation declined; nothing was attempted.
    pub cancelled: bool,
    pub identifiers: usize,
    pub downloaded: usize,
    pub skipped: usize,
    pub download_failed: usize,
    pub network_failures: usize,
    pub invalid_identifiers: usize,
    pub no_documents: usize,
    pub errors: usize,
}

impl RunSummary {
    pub fn cancelled() -> Self {
        Self {
            cancelled: true,
            ..Self::default()
        }
    }

    pub fn record(&mut self, report: &IdentifierReport) {
        self.identifiers += 1;
        match &report.result {
            Err(_) => self.errors += 1,
            Ok(IdentifierOutcome::NetworkFailure { .. }) => self.network_failures += 1,
            Ok(IdentifierOutcome::InvalidIdentifier) => self.invalid_identifiers += 1,
            Ok(IdentifierOutcome::NoDocuments) => self.no_documents += 1,
            Ok(IdentifierOutcome::Documents) => {}
        }
        for t in &report.tickets {
            match t {
                TicketOutcome::Downloaded { .. } => self.downloaded += 1,
                TicketOutcome::AlreadyDownloaded { .. } => self.skipped += 1,
                TicketOutcome::DownloadFailed { .. } => self.download_failed += 1,
            }
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cancelled {
            return write!(f, "Cancelled.");
        }
        write!(
            f,
            "Batch finished: {} identifiers, {} downloaded, {} already present, {} failed downloads, \
             {} network errors, {} not found, {} without tickets, {} unexpected errors",
            self.identifiers,
            self.downloaded,
            self.skipped,
            self.download_failed,
            self.network_failures,
            self.invalid_identifiers,
            self.no_documents,
            self.errors
        )
    }
}
