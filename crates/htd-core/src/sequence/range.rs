//! Bounded slices of the suffix range.

use super::{SequenceError, Suffix};

/// User-supplied range selection. Every field is optional raw input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceBounds {
    /// First suffix, inclusive. Defaults to `01`.
    pub start: Option<String>,
    /// Last suffix, inclusive. Defaults to the last element of the range.
    pub end: Option<String>,
    /// Letter+digit ceiling truncating the range (e.g. `K6`).
    pub limit: Option<String>,
}

/// Full ascending range, truncated at `limit` if given.
pub fn full_sequence(limit: Option<Suffix>) -> Vec<Suffix> {
    let ceiling = limit.unwrap_or(Suffix::LAST);
    Suffix::all().take_while(|s| *s <= ceiling).collect()
}

/// Produces the suffixes between the bounds, inclusive.
///
/// Bounds are validated against the (limited) range; a bound that is well
/// formed but lies beyond the limit is still an invalid bound.
pub fn generate(bounds: &SequenceBounds) -> Result<Vec<Suffix>, SequenceError> {
    let limit = match non_empty(&bounds.limit) {
        Some(raw) => {
            let parsed: Suffix = raw
                .parse()
                .map_err(|_| SequenceError::InvalidLimit(raw.trim().to_string()))?;
            if !parsed.is_alnum() {
                return Err(SequenceError::InvalidLimit(raw.trim().to_string()));
            }
            Some(parsed)
        }
        None => None,
    };
    let master = full_sequence(limit);

    let position = |raw: Option<&str>, default: usize| -> Result<usize, SequenceError> {
        match raw {
            None => Ok(default),
            Some(raw) => {
                let suffix: Suffix = raw.parse()?;
                master
                    .iter()
                    .position(|s| *s == suffix)
                    .ok_or_else(|| SequenceError::InvalidBound(raw.trim().to_string()))
            }
        }
    };

    let start_index = position(non_empty(&bounds.start), 0)?;
    let end_index = position(non_empty(&bounds.end), master.len() - 1)?;

    if start_index > end_index {
        return Err(SequenceError::StartAfterEnd {
            start: master[start_index],
            end: master[end_index],
        });
    }

    Ok(master[start_index..=end_index].to_vec())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
