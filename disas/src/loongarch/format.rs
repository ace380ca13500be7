//! Token-to-text rendering.

use super::token::{Token, TokenSeq, MAX_TOKENS};
use super::DisasConfig;

// -- Register ABI names --

const GPR_ALIAS: [&str; 32] = [
    "zero", "ra", "tp", "sp", "a0", "a1", "a2", "a3", "a4", "a5", "a6", "a7",
    "t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7", "t8", "u0", "fp", "s0",
    "s1", "s2", "s3", "s4", "s5", "s6", "s7", "s8",
];

/// Renders tokens under one configuration.
#[derive(Clone, Copy, Debug)]
pub struct Formatter<'a> {
    cfg: &'a DisasConfig,
}

impl<'a> Formatter<'a> {
    pub fn new(cfg: &'a DisasConfig) -> Self {
        Self { cfg }
    }

    /// `r4`, `$r4`, `a0` or `$a0`. Indices past 31 render empty.
    pub fn gpr(&self, index: u8) -> String {
        let Some(alias) = GPR_ALIAS.get(usize::from(index)) else {
            return String::new();
        };
        let prefix = if self.cfg.reg_prefix { "$" } else { "" };
        if self.cfg.reg_alias {
            format!("{prefix}{alias}")
        } else {
            format!("{prefix}r{index}")
        }
    }

    pub fn uimm(&self, imm: u64) -> String {
        if self.cfg.imm_hex {
            format!("{imm:#x}")
        } else {
            imm.to_string()
        }
    }

    /// Negative values keep the sign outside the radix prefix.
    pub fn simm(&self, imm: i64) -> String {
        if !self.cfg.imm_hex {
            imm.to_string()
        } else if imm < 0 {
            format!("-{:#x}", imm.unsigned_abs())
        } else {
            format!("{imm:#x}")
        }
    }

    /// Absolute target of a pc-relative offset.
    pub fn pc(&self, pc: u64, off: i64) -> String {
        if self.cfg.mode32 {
            let target = (pc as u32).wrapping_add(off as u32);
            self.uimm(u64::from(target))
        } else {
            self.uimm(pc.wrapping_add(off as u64))
        }
    }

    /// `off(base)` memory operand.
    pub fn base_off(&self, base: u8, off: i64) -> String {
        let off = if self.cfg.mode32 {
            i64::from(off as i32)
        } else {
            off
        };
        format!("{}({})", self.simm(off), self.gpr(base))
    }

    pub fn token(&self, pc: u64, tok: &Token) -> String {
        match *tok {
            Token::Name(n) => n.to_string(),
            Token::Gpr(r, _) | Token::BaseReg(r) => self.gpr(r),
            Token::Uimm32(v) => self.uimm(u64::from(v)),
            Token::Simm32(v) => self.simm(i64::from(v)),
            Token::Uimm64(v) => self.uimm(v),
            Token::Simm64(v) | Token::AddrOff(v) => self.simm(v),
            Token::PcOff(off) => self.pc(pc, off),
        }
    }

    /// Mnemonic, a space, then operands joined by `", "`.
    ///
    /// A `BaseReg` directly followed by an `AddrOff` is fused into one
    /// `off(base)` operand.
    pub fn tokens(&self, pc: u64, seq: &TokenSeq) -> String {
        let mut out = String::new();
        if let Some(name) = seq.mnemonic() {
            out.push_str(name);
        }
        let mut operands: Vec<String> = Vec::with_capacity(MAX_TOKENS);
        let mut it = seq.operands().iter().peekable();
        while let Some(tok) = it.next() {
            if let Token::BaseReg(base) = *tok {
                if let Some(&&Token::AddrOff(off)) = it.peek() {
                    it.next();
                    operands.push(self.base_off(base, off));
                    continue;
                }
            }
            operands.push(self.token(pc, tok));
        }
        if !operands.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&operands.join(", "));
        }
        out
    }
}
