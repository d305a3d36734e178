//! Identifier suffix sequencing.
//!
//! The full range is `01`..`99` followed by `A0`..`Z9`. A batch selects an
//! inclusive slice of it, optionally truncated at a letter/digit limit
//! (e.g. `K6`).

mod error;
mod range;
mod suffix;

pub use error::SequenceError;
pub use range::{full_sequence, generate, SequenceBounds};
pub use suffix::{Suffix, SuffixIter};
