//! Typed token model shared by the encoders and the formatter.

use std::fmt;

use thiserror::Error;

/// Most tokens any encoding produces: mnemonic plus three operands.
pub const MAX_TOKENS: usize = 4;

/// Which instruction field a general-purpose register came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GprRole {
    /// `rd`, bits [4:0].
    Dest,
    /// `rj`, usually bits [9:5].
    Src1,
    /// `rk`, usually bits [14:10].
    Src2,
}

/// One rendered element of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    Name(&'static str),
    Gpr(u8, GprRole),
    Uimm32(u32),
    Simm32(i32),
    Uimm64(u64),
    Simm64(i64),
    /// Displacement from the instruction's own address.
    PcOff(i64),
    /// Base register of a memory operand.
    BaseReg(u8),
    /// Displacement from the preceding `BaseReg`.
    AddrOff(i64),
}

/// A token list longer than [`MAX_TOKENS`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("token sequence holds at most {MAX_TOKENS} tokens, got {len}")]
pub struct TokenOverflow {
    pub len: usize,
}

// Fills unused slots; never visible through the public API.
const EMPTY: Token = Token::Name("");

/// Mnemonic followed by up to three operands.
///
/// Storage is a fixed `[Token; MAX_TOKENS]`, so no sequence can grow
/// past the bound. The end of the sequence is its length; there is no
/// sentinel token.
#[derive(Clone, Copy)]
pub struct TokenSeq {
    slots: [Token; MAX_TOKENS],
    len: u8,
}

impl TokenSeq {
    pub fn new() -> Self {
        Self {
            slots: [EMPTY; MAX_TOKENS],
            len: 0,
        }
    }

    // ── Fixed-arity constructors ────────────────────────────────

    pub fn op0(name: &'static str) -> Self {
        Self::fill(&[Token::Name(name)])
    }

    pub fn op1(name: &'static str, a: Token) -> Self {
        Self::fill(&[Token::Name(name), a])
    }

    pub fn op2(name: &'static str, a: Token, b: Token) -> Self {
        Self::fill(&[Token::Name(name), a, b])
    }

    pub fn op3(name: &'static str, a: Token, b: Token, c: Token) -> Self {
        Self::fill(&[Token::Name(name), a, b, c])
    }

    // Callers guarantee `toks.len() <= MAX_TOKENS`.
    fn fill(toks: &[Token]) -> Self {
        let mut seq = Self::new();
        seq.slots[..toks.len()].copy_from_slice(toks);
        seq.len = toks.len() as u8;
        seq
    }

    /// The leading `Name`, if any.
    pub fn mnemonic(&self) -> Option<&'static str> {
        match self.as_slice().first() {
            Some(Token::Name(n)) => Some(*n),
            _ => None,
        }
    }

    /// Everything after the mnemonic.
    pub fn operands(&self) -> &[Token] {
        let toks = self.as_slice();
        match toks.first() {
            Some(Token::Name(_)) => &toks[1..],
            _ => toks,
        }
    }

    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.as_slice().iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.slots[..self.len()]
    }
}

impl Default for TokenSeq {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for TokenSeq {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for TokenSeq {}

impl fmt::Debug for TokenSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a> IntoIterator for &'a TokenSeq {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<&[Token]> for TokenSeq {
    type Error = TokenOverflow;

    fn try_from(toks: &[Token]) -> Result<Self, Self::Error> {
        if toks.len() > MAX_TOKENS {
            return Err(TokenOverflow { len: toks.len() });
        }
        Ok(Self::fill(toks))
    }
}

impl TryFrom<Vec<Token>> for TokenSeq {
    type Error = TokenOverflow;

    fn try_from(toks: Vec<Token>) -> Result<Self, Self::Error> {
        Self::try_from(toks.as_slice())
    }
}
