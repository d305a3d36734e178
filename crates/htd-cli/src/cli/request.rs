//! Builds a batch request from flags, prompting for what is missing.

use anyhow::{bail, Result};
use htd_core::config::HtdConfig;
use htd_core::fetch::BatchRequest;
use htd_core::sequence::SequenceBounds;
use std::io::{BufRead, Write};

use super::prompt::Prompter;
use super::RangeArgs;

pub fn resolve_request<R: BufRead, W: Write>(
    range: &RangeArgs,
    cfg: &HtdConfig,
    prompter: &mut Prompter<R, W>,
) -> Result<BatchRequest> {
    let interactive = range.branch.is_none();

    let branch = match &range.branch {
        Some(b) => b.trim().to_string(),
        None => prompter.ask("Enter branch code (e.g. 66, 05, 12): ")?,
    };
    if branch.is_empty() {
        bail!("branch code is required");
    }

    let prefix = match &range.prefix {
        Some(p) => p.trim().to_string(),
        None if interactive => {
            let answer = prompter.ask(&format!("Prefix [{}]: ", cfg.prefix))?;
            if answer.is_empty() {
                cfg.prefix.clone()
            } else {
                answer
            }
        }
        None => cfg.prefix.clone(),
    };

    if interactive && (range.start.is_none() || range.end.is_none()) {
        prompter.say("Enter the suffixes (e.g. 01, 99, A0, K6)")?;
    }
    let start = match &range.start {
        Some(s) => Some(s.clone()),
        None if interactive => Some(prompter.ask("Start number (e.g. 01): ")?),
        None => None,
    };
    let end = match &range.end {
        Some(e) => Some(e.clone()),
        None if interactive => Some(prompter.ask("End number   (e.g. K6): ")?),
        None => None,
    };

    Ok(BatchRequest {
        prefix,
        branch,
        bounds: SequenceBounds {
            start,
            end,
            limit: range.limit.clone(),
        },
    })
}
