//! Encoding classes and their token generators.
//!
//! Field positions follow the LoongArch manual: `[hi:lo]` inclusive,
//! bit 31 most significant.

use super::token::{GprRole, Token, TokenSeq};

/// `jirl r0, r1, 0`, printed as `ret` when aliases are on.
pub const RET_INSN: u32 = 0x4c00_0020;

// -- Field extraction --

/// Unsigned field `insn[hi:lo]`.
///
/// Requires `lo <= hi <= 31`. Out-of-range arguments trip a debug
/// assertion; release builds clamp them and never panic.
#[inline]
pub fn bits(insn: u32, hi: u32, lo: u32) -> u64 {
    debug_assert!(lo <= hi && hi < 32, "bad field [{hi}:{lo}]");
    let width = hi.saturating_sub(lo).min(63);
    let mask = u64::MAX >> (63 - width);
    u64::from(insn).checked_shr(lo).unwrap_or(0) & mask
}

/// Sign-extend the low `from` bits of `val`.
///
/// Requires `1 <= from <= 64`. In release builds `from == 0` yields 0
/// and `from > 64` is treated as 64.
#[inline]
pub fn sext(val: u64, from: u32) -> i64 {
    debug_assert!((1..=64).contains(&from), "bad sign bit {from}");
    if from == 0 {
        return 0;
    }
    let shift = 64 - from.min(64);
    ((val << shift) as i64) >> shift
}

/// Signed field `insn[hi:lo]`.
#[inline]
pub fn simm(insn: u32, hi: u32, lo: u32) -> i64 {
    sext(bits(insn, hi, lo), hi.saturating_sub(lo) + 1)
}

fn gpr(insn: u32, hi: u32, lo: u32) -> u8 {
    bits(insn, hi, lo) as u8
}

/// `offs[25:0]` of `b`/`bl`: low half in [25:10], high part in [9:0].
pub fn offs26(insn: u32) -> i64 {
    sext(bits(insn, 9, 0) << 16 | bits(insn, 25, 10), 26) << 2
}

// -- Encoding classes --

/// Field layout of one instruction, with its static mnemonic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// rd, rj, rk
    ThreeReg(&'static str),
    /// rd, rj, si12
    TwoRegImm12(&'static str),
    /// rd, rj, si14
    TwoRegImm14(&'static str),
    /// rd, rj, ui5
    ShiftImmW(&'static str),
    /// rd, ui20 << 12
    UpperImm20(&'static str),
    /// rj, rd, offs16 << 2
    Branch(&'static str),
    Jirl,
    B,
    Bl,
    /// rd, si12(rj)
    Load(&'static str),
    /// rd, si12(rj)
    Store(&'static str),
    Break,
}

impl Encoding {
    /// Static mnemonic. `None` for the jumps, whose printed name
    /// depends on alias resolution.
    pub fn mnemonic(&self) -> Option<&'static str> {
        match *self {
            Encoding::ThreeReg(n)
            | Encoding::TwoRegImm12(n)
            | Encoding::TwoRegImm14(n)
            | Encoding::ShiftImmW(n)
            | Encoding::UpperImm20(n)
            | Encoding::Branch(n)
            | Encoding::Load(n)
            | Encoding::Store(n) => Some(n),
            Encoding::Break => Some("break"),
            Encoding::Jirl | Encoding::B | Encoding::Bl => None,
        }
    }

    /// Build the token sequence for `insn`. `inst_alias` selects the
    /// pseudo-instruction spellings (`ret`, `call`).
    pub fn tokens(&self, insn: u32, inst_alias: bool) -> TokenSeq {
        match *self {
            Encoding::ThreeReg(n) => three_reg(n, insn),
            Encoding::TwoRegImm12(n) => two_reg_imm(n, insn, 21),
            Encoding::TwoRegImm14(n) => two_reg_imm(n, insn, 23),
            Encoding::ShiftImmW(n) => shift_imm_w(n, insn),
            Encoding::UpperImm20(n) => upper_imm20(n, insn),
            Encoding::Branch(n) => branch(n, insn),
            Encoding::Jirl => jirl(insn, inst_alias),
            Encoding::B => b(insn),
            Encoding::Bl => bl(insn, inst_alias),
            Encoding::Load(n) => load(n, insn),
            Encoding::Store(n) => store(n, insn),
            Encoding::Break => brk(insn),
        }
    }
}

// -- Per-class generators --

fn three_reg(name: &'static str, insn: u32) -> TokenSeq {
    TokenSeq::op3(
        name,
        Token::Gpr(gpr(insn, 4, 0), GprRole::Dest),
        Token::Gpr(gpr(insn, 9, 5), GprRole::Src1),
        Token::Gpr(gpr(insn, 14, 10), GprRole::Src2),
    )
}

fn two_reg_imm(name: &'static str, insn: u32, imm_hi: u32) -> TokenSeq {
    TokenSeq::op3(
        name,
        Token::Gpr(gpr(insn, 4, 0), GprRole::Dest),
        Token::Gpr(gpr(insn, 9, 5), GprRole::Src1),
        Token::Simm32(simm(insn, imm_hi, 10) as i32),
    )
}

fn shift_imm_w(name: &'static str, insn: u32) -> TokenSeq {
    TokenSeq::op3(
        name,
        Token::Gpr(gpr(insn, 4, 0), GprRole::Dest),
        Token::Gpr(gpr(insn, 9, 5), GprRole::Src1),
        Token::Uimm32(bits(insn, 14, 10) as u32),
    )
}

fn upper_imm20(name: &'static str, insn: u32) -> TokenSeq {
    TokenSeq::op2(
        name,
        Token::Gpr(gpr(insn, 4, 0), GprRole::Dest),
        Token::Uimm32((bits(insn, 24, 5) << 12) as u32),
    )
}

fn branch(name: &'static str, insn: u32) -> TokenSeq {
    TokenSeq::op3(
        name,
        Token::Gpr(gpr(insn, 9, 5), GprRole::Src1),
        Token::Gpr(gpr(insn, 4, 0), GprRole::Src2),
        Token::PcOff(simm(insn, 25, 10) << 2),
    )
}

fn jirl(insn: u32, inst_alias: bool) -> TokenSeq {
    if inst_alias && insn == RET_INSN {
        return TokenSeq::op0("ret");
    }
    TokenSeq::op3(
        "jirl",
        Token::Gpr(gpr(insn, 4, 0), GprRole::Dest),
        Token::Gpr(gpr(insn, 9, 5), GprRole::Src1),
        Token::PcOff(simm(insn, 24, 10)),
    )
}

fn b(insn: u32) -> TokenSeq {
    TokenSeq::op1("b", Token::PcOff(offs26(insn)))
}

fn bl(insn: u32, inst_alias: bool) -> TokenSeq {
    let name = if inst_alias { "call" } else { "bl" };
    TokenSeq::op1(name, Token::PcOff(offs26(insn)))
}

fn load(name: &'static str, insn: u32) -> TokenSeq {
    TokenSeq::op3(
        name,
        Token::Gpr(gpr(insn, 4, 0), GprRole::Dest),
        Token::BaseReg(gpr(insn, 9, 5)),
        Token::AddrOff(simm(insn, 21, 10)),
    )
}

// Same layout as a load; the rd field is the value being stored.
fn store(name: &'static str, insn: u32) -> TokenSeq {
    TokenSeq::op3(
        name,
        Token::Gpr(gpr(insn, 4, 0), GprRole::Src1),
        Token::BaseReg(gpr(insn, 9, 5)),
        Token::AddrOff(simm(insn, 21, 10)),
    )
}

fn brk(insn: u32) -> TokenSeq {
    TokenSeq::op1("break", Token::Uimm32(bits(insn, 14, 0) as u32))
}
