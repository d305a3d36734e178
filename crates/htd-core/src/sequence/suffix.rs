//! A single identifier suffix and its total order.

use std::fmt;
use std::str::FromStr;

use super::SequenceError;

/// Tail of an identifier.
///
/// Variant order drives the derived `Ord`: every numeric suffix sorts before
/// every letter+digit suffix, and letter+digit suffixes compare by
/// `(letter, digit)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suffix {
    /// `01`..`99`.
    Numeric(u8),
    /// `A0`..`Z9`.
    Alnum { letter: char, digit: u8 },
}

impl Suffix {
    pub const FIRST: Suffix = Suffix::Numeric(1);
    pub const LAST: Suffix = Suffix::Alnum {
        letter: 'Z',
        digit: 9,
    };

    /// Parses user input. Trims, upper-cases, and zero-pads digit-only input
    /// to two digits, so `"5"` becomes `05` and `"k6"` becomes `K6`.
    pub fn parse(input: &str) -> Result<Self, SequenceError> {
        let raw = input.trim().to_ascii_uppercase();
        let invalid = || SequenceError::InvalidBound(input.trim().to_string());

        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            if raw.len() > 2 {
                return Err(invalid());
            }
            let n: u8 = raw.parse().map_err(|_| invalid())?;
            return if (1..=99).contains(&n) {
                Ok(Suffix::Numeric(n))
            } else {
                Err(invalid())
            };
        }

        let mut chars = raw.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(letter), Some(d), None) if letter.is_ascii_uppercase() && d.is_ascii_digit() => {
                Ok(Suffix::Alnum {
                    letter,
                    digit: d as u8 - b'0',
                })
            }
            _ => Err(invalid()),
        }
    }

    pub fn is_alnum(&self) -> bool {
        matches!(self, Suffix::Alnum { .. })
    }

    /// Successor in the full range; `None` after `Z9`.
    pub fn next(self) -> Option<Suffix> {
        match self {
            Suffix::Numeric(n) if n < 99 => Some(Suffix::Numeric(n + 1)),
            Suffix::Numeric(_) => Some(Suffix::Alnum {
                letter: 'A',
                digit: 0,
            }),
            Suffix::Alnum { letter, digit } if digit < 9 => Some(Suffix::Alnum {
                letter,
                digit: digit + 1,
            }),
            Suffix::Alnum { letter: 'Z', .. } => None,
            Suffix::Alnum { letter, .. } => Some(Suffix::Alnum {
                letter: (letter as u8 + 1) as char,
                digit: 0,
            }),
        }
    }

    /// Iterates the full range starting at `FIRST`.
    pub fn all() -> SuffixIter {
        SuffixIter {
            next: Some(Suffix::FIRST),
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suffix::Numeric(n) => write!(f, "{:02}", n),
            Suffix::Alnum { letter, digit } => write!(f, "{}{}", letter, digit),
        }
    }
}

impl FromStr for Suffix {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suffix::parse(s)
    }
}

/// Ascending iterator over suffixes.
#[derive(Debug, Clone)]
pub struct SuffixIter {
    next: Option<Suffix>,
}

impl Iterator for SuffixIter {
    type Item = Suffix;

    fn next(&mut self) -> Option<Suffix> {
        let current = self.next?;
        self.next = current.next();
        Some(current)
    }
}
