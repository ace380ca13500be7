//! Pattern and table error types.

use thiserror::Error;

/// Error produced by the strict bit-pattern parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A character other than `0`, `1`, `x`, `?`, `_` or space.
    #[error("invalid character {ch:?} at offset {pos} in bit pattern")]
    InvalidChar { ch: char, pos: usize },

    /// More than 64 significant characters.
    #[error("bit pattern is {width} bits wide, at most 64 supported")]
    TooWide { width: u32 },
}

/// Error returned when an entry cannot be inserted into a table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Pattern width differs from the width fixed by the first entry.
    #[error(
        "pattern {pattern:?} is {found} bits wide, table expects {expected}"
    )]
    WidthMismatch {
        expected: u32,
        found: u32,
        pattern: String,
    },
}
