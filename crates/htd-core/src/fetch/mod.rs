//! Batch planning and the sequential fetch-and-save loop.
//!
//! Two phases: [`plan`] validates the range and builds the identifier list
//! without touching the network; [`execute`] runs the loop once the caller
//! has confirmed.

mod error;
mod plan;
mod report;
mod run;

pub use error::FetchFailure;
pub use plan::{plan, BatchPlan, BatchRequest};
pub use report::{IdentifierOutcome, IdentifierReport, RunSummary, TicketOutcome};
pub use run::execute;
