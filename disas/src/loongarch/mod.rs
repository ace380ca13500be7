//! LoongArch disassembler: LA32/LA64 base integer subset.
//!
//! Covers the 3R ALU and multiply/divide group, 2RI12 immediates,
//! `ll.w`/`sc.w`, word shifts by immediate, `lu12i.w`/`pcaddu12i`,
//! conditional and unconditional branches, byte/half/word loads and
//! stores, and `break`.

mod encoding;
mod format;
mod insns;
mod token;

use std::sync::OnceLock;

use la_decodetree::DecodeTable;

pub use encoding::{bits, offs26, sext, simm, Encoding, RET_INSN};
pub use format::Formatter;
pub use insns::LOONGARCH_INSNS;
pub use token::{GprRole, Token, TokenOverflow, TokenSeq, MAX_TOKENS};

/// Output options. Only rendering is affected; matching never is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisasConfig {
    /// Immediates in `0x` hex instead of decimal.
    pub imm_hex: bool,
    /// ABI register names (`a0`) instead of `r4`.
    pub reg_alias: bool,
    /// `$` before register names.
    pub reg_prefix: bool,
    /// Pseudo-instruction spellings (`ret`, `call`).
    pub inst_alias: bool,
    /// Compute branch targets and memory offsets in 32 bits.
    pub mode32: bool,
}

impl Default for DisasConfig {
    fn default() -> Self {
        Self {
            imm_hex: false,
            reg_alias: false,
            reg_prefix: false,
            inst_alias: true,
            mode32: false,
        }
    }
}

/// Decode table plus rendering options.
///
/// The table is filled once from [`LOONGARCH_INSNS`] and never changes,
/// so a shared `&Disassembler` can be used from several threads.
/// Setters need `&mut self`.
#[derive(Clone, Debug)]
pub struct Disassembler {
    table: DecodeTable<Encoding>,
    config: DisasConfig,
}

impl Default for Disassembler {
    fn default() -> Self {
        Self::new()
    }
}

impl Disassembler {
    pub fn new() -> Self {
        Self::with_config(DisasConfig::default())
    }

    pub fn with_config(config: DisasConfig) -> Self {
        let mut table = DecodeTable::new();
        for &(pattern, enc) in LOONGARCH_INSNS {
            if let Err(e) = table.add(pattern, enc) {
                log::error!("loongarch: {enc:?} not registered: {e}");
            }
        }
        Self { table, config }
    }

    pub fn config(&self) -> &DisasConfig {
        &self.config
    }

    pub fn set_imm_hex(&mut self, hex: bool) {
        self.config.imm_hex = hex;
    }

    pub fn set_reg_alias(&mut self, alias: bool) {
        self.config.reg_alias = alias;
    }

    pub fn set_reg_prefix(&mut self, prefix: bool) {
        self.config.reg_prefix = prefix;
    }

    pub fn set_inst_alias(&mut self, alias: bool) {
        self.config.inst_alias = alias;
    }

    pub fn set_mode32(&mut self, mode32: bool) {
        self.config.mode32 = mode32;
    }

    /// Number of registered instruction patterns.
    pub fn insn_count(&self) -> usize {
        self.table.len()
    }

    pub fn table(&self) -> &DecodeTable<Encoding> {
        &self.table
    }

    /// Encoding class of `insn`, if any pattern matches.
    pub fn lookup(&self, insn: u32) -> Option<&Encoding> {
        self.table.decode(u64::from(insn))
    }

    /// Token form of `insn`; `None` if no pattern matches.
    pub fn disassemble_to_tokens(&self, insn: u32) -> Option<TokenSeq> {
        let enc = self.lookup(insn)?;
        Some(enc.tokens(insn, self.config.inst_alias))
    }

    /// Assembly text for `insn` at `pc`. Empty when nothing matches.
    pub fn disassemble(&self, insn: u32, pc: u64) -> String {
        match self.disassemble_to_tokens(insn) {
            Some(tokens) => {
                let text = Formatter::new(&self.config).tokens(pc, &tokens);
                log::trace!("{pc:#x}: {insn:#010x} {text}");
                text
            }
            None => {
                log::trace!("{pc:#x}: {insn:#010x} no match");
                String::new()
            }
        }
    }

    /// Disassemble one little-endian instruction from `data`.
    ///
    /// Returns `(text, length)`. Unknown words print as `.word`.
    pub fn print_insn(&self, pc: u64, data: &[u8]) -> (String, usize) {
        let Some(word) = data.get(..4) else {
            return (".byte ???".into(), 0);
        };
        let insn = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
        let text = self.disassemble(insn, pc);
        if text.is_empty() {
            (format!(".word {insn:#010x}"), 4)
        } else {
            (text, 4)
        }
    }
}

/// Disassemble one LoongArch instruction at `pc` with default options.
///
/// `data` must contain at least 4 bytes.
/// Returns `(assembly_text, instruction_length_in_bytes)`.
pub fn print_insn_loongarch(pc: u64, data: &[u8]) -> (String, usize) {
    static DEFAULT: OnceLock<Disassembler> = OnceLock::new();
    DEFAULT.get_or_init(Disassembler::new).print_insn(pc, data)
}
