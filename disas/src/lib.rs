//! LoongArch disassembler.
//!
//! Decodes 32-bit LoongArch instruction words into a typed token
//! sequence and renders the tokens as assembly text. The decoder is a
//! first-match [`la_decodetree::DecodeTable`] populated once from a
//! static instruction list.

pub mod loongarch;

pub use loongarch::{
    print_insn_loongarch, DisasConfig, Disassembler, Encoding, GprRole,
    Token, TokenSeq,
};
