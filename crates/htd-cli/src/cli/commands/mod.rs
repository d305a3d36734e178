//! CLI command handlers. Each command is in its own file.

mod fetch;
mod plan;

pub use fetch::run_fetch;
pub use plan::run_plan;
