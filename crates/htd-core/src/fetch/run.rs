//! Phase two: the sequential fetch-and-save loop.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread;

use super::{BatchPlan, FetchFailure, IdentifierOutcome, IdentifierReport, RunSummary, TicketOutcome};
use crate::config::HtdConfig;
use crate::filename::{self, FileLayout};
use crate::identifier::Identifier;
use crate::portal::{self, PortalClient};

/// Runs the batch. With `confirmed == false` nothing is touched and a
/// cancelled summary is returned.
///
/// `on_report` is called once per identifier, in order, as soon as it is done.
/// Only setup problems (output directory, HTTP handle) return `Err`; every
/// per-identifier failure is reported and the loop continues.
pub fn execute<F>(
    plan: &BatchPlan,
    confirmed: bool,
    cfg: &HtdConfig,
    mut on_report: F,
) -> Result<RunSummary>
where
    F: FnMut(&IdentifierReport),
{
    if !confirmed {
        tracing::info!("batch of {} identifiers cancelled", plan.len());
        return Ok(RunSummary::cancelled());
    }

    let target_dir = plan.target_dir(&cfg.output_dir, cfg.layout);
    fs::create_dir_all(&target_dir)
        .with_context(|| format!("failed to create output dir {}", target_dir.display()))?;

    let mut client = PortalClient::new(cfg).context("failed to set up HTTP client")?;
    let delay = cfg.delay();

    tracing::info!(
        count = plan.len(),
        dir = %target_dir.display(),
        "starting batch"
    );

    let mut summary = RunSummary::default();
    for identifier in plan.identifiers() {
        thread::sleep(delay);
        let mut tickets = Vec::new();
        let result = process_identifier(
            &mut client,
            identifier,
            &target_dir,
            cfg.layout,
            &mut tickets,
        );
        if let Err(e) = &result {
            tracing::warn!(identifier = %identifier, "unexpected error: {}", e);
        }
        let report = IdentifierReport {
            identifier: identifier.clone(),
            tickets,
            result,
        };
        summary.record(&report);
        on_report(&report);
    }

    tracing::info!("{}", summary);
    Ok(summary)
}

/// Handled tickets go into `outcomes` as they complete, so they survive an
/// error on a later ticket.
fn process_identifier(
    client: &mut PortalClient,
    identifier: &Identifier,
    target_dir: &Path,
    layout: FileLayout,
    outcomes: &mut Vec<TicketOutcome>,
) -> Result<IdentifierOutcome, FetchFailure> {
    let response = client.list_tickets(identifier.as_str())?;
    if !response.is_success() {
        tracing::warn!(identifier = %identifier, status = response.status, "list lookup failed");
        return Ok(IdentifierOutcome::NetworkFailure {
            status: response.status,
        });
    }

    let tickets = match portal::parse_ticket_list(&response.body) {
        Ok(tickets) => tickets,
        Err(e) => {
            tracing::debug!(identifier = %identifier, "list body is not a ticket list: {}", e);
            return Ok(IdentifierOutcome::InvalidIdentifier);
        }
    };
    if tickets.is_empty() {
        return Ok(IdentifierOutcome::NoDocuments);
    }

    outcomes.reserve(tickets.len());
    for ticket in &tickets {
        let path = target_dir.join(filename::document_filename(identifier, &ticket.label, layout));
        if path.exists() {
            outcomes.push(TicketOutcome::AlreadyDownloaded { path });
            continue;
        }

        let document = client.download(&ticket.ticket_id)?;
        if document.is_success() {
            save_document(&path, &document.body)?;
            tracing::info!(identifier = %identifier, path = %path.display(), "saved");
            outcomes.push(TicketOutcome::Downloaded {
                path,
                bytes: document.body.len(),
            });
        } else {
            tracing::warn!(
                identifier = %identifier,
                ticket = %ticket.ticket_id,
                status = document.status,
                "download failed"
            );
            outcomes.push(TicketOutcome::DownloadFailed {
                label: ticket.label.clone(),
                status: document.status,
            });
        }
    }

    Ok(IdentifierOutcome::Documents)
}

/// Writes to `{path}.part`, syncs, then renames into place. The final name
/// only appears once the body is complete, so a crash mid-write never leaves
/// a file that a later run would skip as already downloaded.
fn save_document(path: &Path, body: &[u8]) -> Result<(), FetchFailure> {
    let temp_path = part_path(path);

    let mut file = fs::File::create(&temp_path).map_err(io_err(&temp_path))?;
    file.write_all(body).map_err(io_err(&temp_path))?;
    file.sync_all().map_err(io_err(&temp_path))?;
    drop(file);

    fs::rename(&temp_path, path).map_err(io_err(path))
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> FetchFailure {
    let path = path.to_path_buf();
    move |source| FetchFailure::Io { path, source }
}

fn part_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_path_appends_suffix() {
        assert_eq!(
            part_path(Path::new("/out/23071A6605_Mid.pdf")),
            PathBuf::from("/out/23071A6605_Mid.pdf.part")
        );
    }

    #[test]
    fn save_document_leaves_no_part_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        save_document(&path, b"%PDF-1.4").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.4");
        assert!(!part_path(&path).exists());
    }

    #[test]
    fn save_document_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("doc.pdf");
        let err = save_document(&path, b"x").unwrap_err();
        assert!(matches!(err, FetchFailure::Io { .. }));
    }
}
