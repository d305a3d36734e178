//! `htd fetch` – confirm, then download every hall ticket in the range.

use anyhow::Result;
use htd_core::config::HtdConfig;
use htd_core::fetch;
use std::io::{BufRead, Write};

use super::plan::print_preview;
use crate::cli::prompt::Prompter;
use crate::cli::request::resolve_request;
use crate::cli::RangeArgs;

pub fn run_fetch<R: BufRead, W: Write>(
    cfg: &HtdConfig,
    range: &RangeArgs,
    yes: bool,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let request = resolve_request(range, cfg, prompter)?;
    // Invalid bounds stop here, before any network activity.
    let plan = fetch::plan(&request)?;
    print_preview(&plan, &plan.target_dir(&cfg.output_dir, cfg.layout));

    let confirmed = yes || prompter.confirm("\nType 'y' to start downloading: ")?;
    let summary = fetch::execute(&plan, confirmed, cfg, |report| {
        for line in report.status_lines() {
            println!("{}", line);
        }
    })?;

    println!("{}", summary);
    Ok(())
}
