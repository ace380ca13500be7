//! LoongArch instruction list, in decode-table registration order.
//!
//! Lookup is first-match: if two patterns ever overlap, the earlier
//! line wins. The current list is pairwise disjoint.

use super::encoding::Encoding::{self, *};

pub static LOONGARCH_INSNS: &[(&str, Encoding)] = &[
    // 3R
    ("0000000000 0100000 ????? ????? ?????", ThreeReg("add.w")),
    ("0000000000 0100001 ????? ????? ?????", ThreeReg("add.d")),
    ("0000000000 0100010 ????? ????? ?????", ThreeReg("sub.w")),
    ("0000000000 0100011 ????? ????? ?????", ThreeReg("sub.d")),
    ("0000000000 0100100 ????? ????? ?????", ThreeReg("slt")),
    ("0000000000 0100101 ????? ????? ?????", ThreeReg("sltu")),
    ("0000000000 0100110 ????? ????? ?????", ThreeReg("maskeqz")),
    ("0000000000 0100111 ????? ????? ?????", ThreeReg("masknez")),
    ("0000000000 0101000 ????? ????? ?????", ThreeReg("nor")),
    ("0000000000 0101001 ????? ????? ?????", ThreeReg("and")),
    ("0000000000 0101010 ????? ????? ?????", ThreeReg("or")),
    ("0000000000 0101011 ????? ????? ?????", ThreeReg("xor")),
    ("0000000000 0101100 ????? ????? ?????", ThreeReg("orn")),
    ("0000000000 0101101 ????? ????? ?????", ThreeReg("andn")),
    ("0000000000 0101110 ????? ????? ?????", ThreeReg("sll.w")),
    ("0000000000 0101111 ????? ????? ?????", ThreeReg("srl.w")),
    ("0000000000 0110000 ????? ????? ?????", ThreeReg("sra.w")),
    ("0000000000 0110001 ????? ????? ?????", ThreeReg("sll.d")),
    ("0000000000 0110010 ????? ????? ?????", ThreeReg("srl.d")),
    ("0000000000 0110011 ????? ????? ?????", ThreeReg("sra.d")),
    ("0000000000 0111000 ????? ????? ?????", ThreeReg("mul.w")),
    ("0000000000 0111001 ????? ????? ?????", ThreeReg("mulh.w")),
    // Manual spelling; some tools print mulhu.w.
    ("0000000000 0111010 ????? ????? ?????", ThreeReg("mulh.wu")),
    ("0000000000 1000000 ????? ????? ?????", ThreeReg("div.w")),
    ("0000000000 1000001 ????? ????? ?????", ThreeReg("mod.w")),
    ("0000000000 1000010 ????? ????? ?????", ThreeReg("div.wu")),
    ("0000000000 1000011 ????? ????? ?????", ThreeReg("mod.wu")),
    // 2RI12
    ("000000 1010 ???????????? ????? ?????", TwoRegImm12("addi.w")),
    ("000000 1000 ???????????? ????? ?????", TwoRegImm12("slti")),
    // Manual spelling; some tools print sltiu.
    ("000000 1001 ???????????? ????? ?????", TwoRegImm12("sltui")),
    ("000000 1101 ???????????? ????? ?????", TwoRegImm12("andi")),
    ("000000 1110 ???????????? ????? ?????", TwoRegImm12("ori")),
    ("000000 1111 ???????????? ????? ?????", TwoRegImm12("xori")),
    // 2RI14
    ("00100000 ?????????????? ????? ?????", TwoRegImm14("ll.w")),
    ("00100001 ?????????????? ????? ?????", TwoRegImm14("sc.w")),
    // shift by ui5
    ("00000000010000 001 ????? ????? ?????", ShiftImmW("slli.w")),
    ("00000000010001 001 ????? ????? ?????", ShiftImmW("srli.w")),
    ("00000000010010 001 ????? ????? ?????", ShiftImmW("srai.w")),
    // 1RI20
    ("0001010 ???????????????????? ?????", UpperImm20("lu12i.w")),
    ("0001110 ???????????????????? ?????", UpperImm20("pcaddu12i")),
    // branches
    ("010110 ???????????????? ????? ?????", Branch("beq")),
    ("010111 ???????????????? ????? ?????", Branch("bne")),
    ("011000 ???????????????? ????? ?????", Branch("blt")),
    ("011001 ???????????????? ????? ?????", Branch("bge")),
    ("011010 ???????????????? ????? ?????", Branch("bltu")),
    ("011011 ???????????????? ????? ?????", Branch("bgeu")),
    ("010011 ???????????????? ????? ?????", Jirl),
    ("010100 ???????????????? ??????????", B),
    ("010101 ???????????????? ??????????", Bl),
    // loads and stores
    ("0010100000 ???????????? ????? ?????", Load("ld.b")),
    ("0010100001 ???????????? ????? ?????", Load("ld.h")),
    ("0010100010 ???????????? ????? ?????", Load("ld.w")),
    ("0010101000 ???????????? ????? ?????", Load("ld.bu")),
    ("0010101001 ???????????? ????? ?????", Load("ld.hu")),
    ("0010100100 ???????????? ????? ?????", Store("st.b")),
    ("0010100101 ???????????? ????? ?????", Store("st.h")),
    ("0010100110 ???????????? ????? ?????", Store("st.w")),
    // misc
    ("00000000001010100 ???????????????", Break),
];
