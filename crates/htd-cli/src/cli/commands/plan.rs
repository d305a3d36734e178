//! `htd plan` – show the identifiers a fetch would process.

use anyhow::Result;
use htd_core::config::HtdConfig;
use htd_core::fetch::{self, BatchPlan};
use std::io::{BufRead, Write};
use std::path::Path;

use crate::cli::prompt::Prompter;
use crate::cli::request::resolve_request;
use crate::cli::RangeArgs;

pub fn run_plan<R: BufRead, W: Write>(
    cfg: &HtdConfig,
    range: &RangeArgs,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let request = resolve_request(range, cfg, prompter)?;
    let plan = fetch::plan(&request)?;
    print_preview(&plan, &plan.target_dir(&cfg.output_dir, cfg.layout));
    for id in plan.identifiers() {
        println!("{}", id);
    }
    Ok(())
}

pub(super) fn print_preview(plan: &BatchPlan, target_dir: &Path) {
    println!("Prepared {} identifiers.", plan.len());
    if let (Some(first), Some(last)) = (plan.first(), plan.last()) {
        println!("  From: {}", first);
        println!("  To:   {}", last);
    }
    println!("Saving to: {}", target_dir.display());
}
