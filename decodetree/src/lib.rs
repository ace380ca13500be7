//! Fixed-width bit-pattern matching for instruction decoders.
//!
//! A [`BitPattern`] is written as a string of `0`/`1` (fixed bits) and
//! `x`/`?` (don't-care), most significant bit first, with `_` and
//! spaces usable as visual separators:
//!
//! ```text
//! "0000000000 0100000 ????? ????? ?????"
//! ```
//!
//! A [`DecodeTable`] keeps `(pattern, entry)` pairs of one common width
//! and resolves a word to the first entry whose pattern matches.

pub mod error;

pub use error::{PatternError, TableError};

/// Widest pattern the 64-bit match word can hold.
pub const MAX_WIDTH: u32 = 64;

// ── Bit-pattern parsing ─────────────────────────────────────────

pub fn is_bit_char(c: char) -> bool {
    matches!(c, '0' | '1' | 'x' | '?')
}

pub fn is_separator(c: char) -> bool {
    matches!(c, '_' | ' ')
}

/// Fixed-width predicate over a 64-bit word.
///
/// `fixedmask` has a 1 in every fixed-bit position and `fixedbits`
/// holds the required values there. Positions at or beyond `width`
/// are always don't-care.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitPattern {
    fixedbits: u64,
    fixedmask: u64,
    width: u32,
}

impl BitPattern {
    /// Parse `text`, reporting malformed input through `log` and
    /// carrying on. Bad characters are skipped; bits past position 63
    /// are dropped so only the low 64 bits constrain the match.
    pub fn new(text: &str) -> Self {
        let (pat, errors) = scan(text);
        for e in &errors {
            log::warn!("BitPattern {text:?}: {e}");
        }
        pat
    }

    /// Parse `text`, failing on the first malformed character or on a
    /// pattern wider than [`MAX_WIDTH`].
    pub fn try_parse(text: &str) -> Result<Self, PatternError> {
        let (pat, mut errors) = scan(text);
        if errors.is_empty() {
            Ok(pat)
        } else {
            Err(errors.remove(0))
        }
    }

    pub fn bits(&self) -> u64 {
        self.fixedbits
    }

    pub fn mask(&self) -> u64 {
        self.fixedmask
    }

    /// Number of `0`/`1`/`x`/`?` characters in the source text.
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn matches(&self, data: u64) -> bool {
        data & self.fixedmask == self.fixedbits
    }

    /// True if at least one word satisfies both patterns.
    pub fn overlaps(&self, other: &BitPattern) -> bool {
        (self.fixedbits ^ other.fixedbits) & self.fixedmask & other.fixedmask
            == 0
    }
}

/// Scan right to left so the last character lands on bit 0.
fn scan(text: &str) -> (BitPattern, Vec<PatternError>) {
    let mut fixedbits: u64 = 0;
    let mut fixedmask: u64 = 0;
    let mut width: u32 = 0;
    let mut errors = Vec::new();

    let nchars = text.chars().count();
    for (i, c) in text.chars().rev().enumerate() {
        // 64-bit shift; anything past bit 63 has nowhere to go.
        let bit = 1u64.checked_shl(width).unwrap_or(0);
        if is_separator(c) {
            continue;
        }
        if !is_bit_char(c) {
            errors.push(PatternError::InvalidChar {
                ch: c,
                pos: nchars - 1 - i,
            });
            continue;
        }
        match c {
            '0' => fixedmask |= bit,
            '1' => {
                fixedbits |= bit;
                fixedmask |= bit;
            }
            _ => {}
        }
        width += 1;
    }
    if width > MAX_WIDTH {
        errors.push(PatternError::TooWide { width });
    }
    let pat = BitPattern {
        fixedbits,
        fixedmask,
        width,
    };
    (pat, errors)
}

// ── Decode table ───────────────────────────────────────────────

/// Ordered `(pattern, entry)` list resolved by first match.
///
/// Overlapping patterns are accepted; the entry registered first wins.
/// [`DecodeTable::overlapping_pairs`] reports overlaps for callers that
/// want to prove their table disjoint.
#[derive(Clone, Debug)]
pub struct DecodeTable<E> {
    entries: Vec<(BitPattern, E)>,
    width: u32,
}

impl<E> Default for DecodeTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> DecodeTable<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            width: 0,
        }
    }

    /// Insert `entry` under `pattern`.
    ///
    /// The first insertion fixes the table width. Later insertions of a
    /// different width are rejected and `entry` is dropped.
    pub fn add(&mut self, pattern: &str, entry: E) -> Result<(), TableError> {
        let pat = BitPattern::new(pattern);
        if self.entries.is_empty() {
            self.width = pat.width();
        } else if pat.width() != self.width {
            let err = TableError::WidthMismatch {
                expected: self.width,
                found: pat.width(),
                pattern: pattern.to_string(),
            };
            log::warn!("DecodeTable: {err}");
            return Err(err);
        }
        self.entries.push((pat, entry));
        Ok(())
    }

    /// First entry whose pattern matches `insn`, in insertion order.
    pub fn decode(&self, insn: u64) -> Option<&E> {
        self.entries
            .iter()
            .find(|(pat, _)| pat.matches(insn))
            .map(|(_, e)| e)
    }

    /// Width fixed by the first insertion, 0 while empty.
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BitPattern, &E)> {
        self.entries.iter().map(|(p, e)| (p, e))
    }

    /// Index pairs `(i, j)`, `i < j`, whose patterns share a word.
    /// For each pair, entry `j` is shadowed by `i` on the shared words.
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (i, (a, _)) in self.entries.iter().enumerate() {
            for (j, (b, _)) in self.entries.iter().enumerate().skip(i + 1) {
                if a.overlaps(b) {
                    out.push((i, j));
                }
            }
        }
        out
    }
}
