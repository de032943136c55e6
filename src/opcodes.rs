//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that serves as the
//! single source of truth for all 6510 instruction information.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502/6510 opcodes
//! - **105 undocumented opcodes** - Given real mnemonics and deterministic semantics
//!
//! Each opcode entry includes:
//! - Opcode byte (equal to its index in the table)
//! - Mnemonic, which doubles as the dispatch tag for the instruction handler
//! - Addressing mode
//! - Instruction size in bytes
//! - Base cycle cost (excluding page-crossing and branch penalties)
//! - Legality flag
//!
//! Base cycle counts for undocumented opcodes follow the NMOS timing tables
//! used by the common test corpora.

use crate::addressing::AddressingMode;
use std::fmt;

/// Instruction mnemonic.
///
/// One variant per distinct operation. Undocumented encodings that behave
/// like a documented instruction (the extra NOPs, `$EB` SBC) reuse the
/// documented variant and are told apart by [`OpcodeMetadata::legal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    // Documented
    ADC,
    AND,
    ASL,
    BCC,
    BCS,
    BEQ,
    BIT,
    BMI,
    BNE,
    BPL,
    BRK,
    BVC,
    BVS,
    CLC,
    CLD,
    CLI,
    CLV,
    CMP,
    CPX,
    CPY,
    DEC,
    DEX,
    DEY,
    EOR,
    INC,
    INX,
    INY,
    JMP,
    JSR,
    LDA,
    LDX,
    LDY,
    LSR,
    NOP,
    ORA,
    PHA,
    PHP,
    PLA,
    PLP,
    ROL,
    ROR,
    RTI,
    RTS,
    SBC,
    SEC,
    SED,
    SEI,
    STA,
    STX,
    STY,
    TAX,
    TAY,
    TSX,
    TXA,
    TXS,
    TYA,

    // Undocumented
    /// AND then copy N into C.
    ANC,
    /// AND then LSR A (a.k.a. ASR).
    ALR,
    /// AND then ROR A with adder-derived V/C.
    ARR,
    /// `X = (A & X) - operand`, carry = no borrow (a.k.a. AXS).
    SBX,
    /// Load A and X.
    LAX,
    /// Store `A & X`.
    SAX,
    /// DEC memory then CMP.
    DCP,
    /// INC memory then SBC (a.k.a. ISB).
    ISC,
    /// ASL memory then ORA (a.k.a. ASO).
    SLO,
    /// LSR memory then EOR (a.k.a. LSE).
    SRE,
    /// ROL memory then AND.
    RLA,
    /// ROR memory then ADC.
    RRA,
    /// `A = X = SP = memory & SP`. Best-effort.
    LAS,
    /// `SP = A & X`, store `SP & (H+1)` (a.k.a. SHS). Best-effort.
    TAS,
    /// `A = (A | magic) & X & operand` (a.k.a. ANE). Best-effort.
    XAA,
    /// `A = X = (A | magic) & operand`. Best-effort.
    LXA,
    /// Store `A & X & (H+1)` (a.k.a. AHX). Best-effort.
    SHA,
    /// Store `X & (H+1)`. Best-effort.
    SHX,
    /// Store `Y & (H+1)`. Best-effort.
    SHY,
    /// Halts the processor (a.k.a. KIL).
    JAM,
}

impl Mnemonic {
    /// Three-letter instruction name.
    pub fn as_str(self) -> &'static str {
        use Mnemonic::*;
        match self {
            ADC => "ADC",
            AND => "AND",
            ASL => "ASL",
            BCC => "BCC",
            BCS => "BCS",
            BEQ => "BEQ",
            BIT => "BIT",
            BMI => "BMI",
            BNE => "BNE",
            BPL => "BPL",
            BRK => "BRK",
            BVC => "BVC",
            BVS => "BVS",
            CLC => "CLC",
            CLD => "CLD",
            CLI => "CLI",
            CLV => "CLV",
            CMP => "CMP",
            CPX => "CPX",
            CPY => "CPY",
            DEC => "DEC",
            DEX => "DEX",
            DEY => "DEY",
            EOR => "EOR",
            INC => "INC",
            INX => "INX",
            INY => "INY",
            JMP => "JMP",
            JSR => "JSR",
            LDA => "LDA",
            LDX => "LDX",
            LDY => "LDY",
            LSR => "LSR",
            NOP => "NOP",
            ORA => "ORA",
            PHA => "PHA",
            PHP => "PHP",
            PLA => "PLA",
            PLP => "PLP",
            ROL => "ROL",
            ROR => "ROR",
            RTI => "RTI",
            RTS => "RTS",
            SBC => "SBC",
            SEC => "SEC",
            SED => "SED",
            SEI => "SEI",
            STA => "STA",
            STX => "STX",
            STY => "STY",
            TAX => "TAX",
            TAY => "TAY",
            TSX => "TSX",
            TXA => "TXA",
            TXS => "TXS",
            TYA => "TYA",
            ANC => "ANC",
            ALR => "ALR",
            ARR => "ARR",
            SBX => "SBX",
            LAX => "LAX",
            SAX => "SAX",
            DCP => "DCP",
            ISC => "ISC",
            SLO => "SLO",
            SRE => "SRE",
            RLA => "RLA",
            RRA => "RRA",
            LAS => "LAS",
            TAS => "TAS",
            XAA => "XAA",
            LXA => "LXA",
            SHA => "SHA",
            SHX => "SHX",
            SHY => "SHY",
            JAM => "JAM",
        }
    }

    /// True for instructions that set PC themselves instead of advancing it
    /// by the instruction size.
    pub fn is_control_flow(self) -> bool {
        use Mnemonic::*;
        matches!(
            self,
            BCC | BCS | BEQ | BMI | BNE | BPL | BVC | BVS | JMP | JSR | RTS | RTI | BRK | JAM
        )
    }

    /// True for opcodes whose result depends on analog effects on real
    /// silicon. These run a fixed approximation and are excluded from
    /// hardware-trace conformance.
    pub fn is_unstable(self) -> bool {
        use Mnemonic::*;
        matches!(self, XAA | LXA | LAS | TAS | SHA | SHX | SHY)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a single 6510 opcode.
///
/// # Examples
///
/// ```
/// use lib6510::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::LDA);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert!(lda_imm.legal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Opcode byte.
    pub opcode: u8,

    /// Instruction mnemonic; selects the handler.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands), 1-3.
    pub size_bytes: u8,

    /// Base cycle cost (before page-crossing and branch penalties).
    pub base_cycles: u8,

    /// False for undocumented encodings.
    pub legal: bool,
}

impl OpcodeMetadata {
    const fn new(
        opcode: u8,
        mnemonic: Mnemonic,
        addressing_mode: AddressingMode,
        base_cycles: u8,
        legal: bool,
    ) -> Self {
        Self {
            opcode,
            mnemonic,
            addressing_mode,
            size_bytes: 1 + addressing_mode.operand_bytes(),
            base_cycles,
            legal,
        }
    }
}

const fn op(opcode: u8, mnemonic: Mnemonic, mode: AddressingMode, cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata::new(opcode, mnemonic, mode, cycles, true)
}

const fn ill(opcode: u8, mnemonic: Mnemonic, mode: AddressingMode, cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata::new(opcode, mnemonic, mode, cycles, false)
}

use AddressingMode::{
    Absolute as ABS, AbsoluteX as ABX, AbsoluteY as ABY, Accumulator as ACC, Immediate as IMM,
    Implied as IMP, IndexedIndirect as IZX, Indirect as IND, IndirectIndexed as IZY,
    Relative as REL, ZeroPage as ZP0, ZeroPageX as ZPX, ZeroPageY as ZPY,
};
use Mnemonic::*;

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use lib6510::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.base_cycles, 7);
///
/// let slo = &OPCODE_TABLE[0x03];
/// assert!(!slo.legal);
/// assert_eq!(slo.mnemonic.as_str(), "SLO");
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    op(0x00, BRK, IMP, 7),
    op(0x01, ORA, IZX, 6),
    ill(0x02, JAM, IMP, 2),
    ill(0x03, SLO, IZX, 8),
    ill(0x04, NOP, ZP0, 3),
    op(0x05, ORA, ZP0, 3),
    op(0x06, ASL, ZP0, 5),
    ill(0x07, SLO, ZP0, 5),
    op(0x08, PHP, IMP, 3),
    op(0x09, ORA, IMM, 2),
    op(0x0A, ASL, ACC, 2),
    ill(0x0B, ANC, IMM, 2),
    ill(0x0C, NOP, ABS, 4),
    op(0x0D, ORA, ABS, 4),
    op(0x0E, ASL, ABS, 6),
    ill(0x0F, SLO, ABS, 6),
    // 0x10
    op(0x10, BPL, REL, 2),
    op(0x11, ORA, IZY, 5),
    ill(0x12, JAM, IMP, 2),
    ill(0x13, SLO, IZY, 8),
    ill(0x14, NOP, ZPX, 4),
    op(0x15, ORA, ZPX, 4),
    op(0x16, ASL, ZPX, 6),
    ill(0x17, SLO, ZPX, 6),
    op(0x18, CLC, IMP, 2),
    op(0x19, ORA, ABY, 4),
    ill(0x1A, NOP, IMP, 2),
    ill(0x1B, SLO, ABY, 7),
    ill(0x1C, NOP, ABX, 4),
    op(0x1D, ORA, ABX, 4),
    op(0x1E, ASL, ABX, 7),
    ill(0x1F, SLO, ABX, 7),
    // 0x20
    op(0x20, JSR, ABS, 6),
    op(0x21, AND, IZX, 6),
    ill(0x22, JAM, IMP, 2),
    ill(0x23, RLA, IZX, 8),
    op(0x24, BIT, ZP0, 3),
    op(0x25, AND, ZP0, 3),
    op(0x26, ROL, ZP0, 5),
    ill(0x27, RLA, ZP0, 5),
    op(0x28, PLP, IMP, 4),
    op(0x29, AND, IMM, 2),
    op(0x2A, ROL, ACC, 2),
    ill(0x2B, ANC, IMM, 2),
    op(0x2C, BIT, ABS, 4),
    op(0x2D, AND, ABS, 4),
    op(0x2E, ROL, ABS, 6),
    ill(0x2F, RLA, ABS, 6),
    // 0x30
    op(0x30, BMI, REL, 2),
    op(0x31, AND, IZY, 5),
    ill(0x32, JAM, IMP, 2),
    ill(0x33, RLA, IZY, 8),
    ill(0x34, NOP, ZPX, 4),
    op(0x35, AND, ZPX, 4),
    op(0x36, ROL, ZPX, 6),
    ill(0x37, RLA, ZPX, 6),
    op(0x38, SEC, IMP, 2),
    op(0x39, AND, ABY, 4),
    ill(0x3A, NOP, IMP, 2),
    ill(0x3B, RLA, ABY, 7),
    ill(0x3C, NOP, ABX, 4),
    op(0x3D, AND, ABX, 4),
    op(0x3E, ROL, ABX, 7),
    ill(0x3F, RLA, ABX, 7),
    // 0x40
    op(0x40, RTI, IMP, 6),
    op(0x41, EOR, IZX, 6),
    ill(0x42, JAM, IMP, 2),
    ill(0x43, SRE, IZX, 8),
    ill(0x44, NOP, ZP0, 3),
    op(0x45, EOR, ZP0, 3),
    op(0x46, LSR, ZP0, 5),
    ill(0x47, SRE, ZP0, 5),
    op(0x48, PHA, IMP, 3),
    op(0x49, EOR, IMM, 2),
    op(0x4A, LSR, ACC, 2),
    ill(0x4B, ALR, IMM, 2),
    op(0x4C, JMP, ABS, 3),
    op(0x4D, EOR, ABS, 4),
    op(0x4E, LSR, ABS, 6),
    ill(0x4F, SRE, ABS, 6),
    // 0x50
    op(0x50, BVC, REL, 2),
    op(0x51, EOR, IZY, 5),
    ill(0x52, JAM, IMP, 2),
    ill(0x53, SRE, IZY, 8),
    ill(0x54, NOP, ZPX, 4),
    op(0x55, EOR, ZPX, 4),
    op(0x56, LSR, ZPX, 6),
    ill(0x57, SRE, ZPX, 6),
    op(0x58, CLI, IMP, 2),
    op(0x59, EOR, ABY, 4),
    ill(0x5A, NOP, IMP, 2),
    ill(0x5B, SRE, ABY, 7),
    ill(0x5C, NOP, ABX, 4),
    op(0x5D, EOR, ABX, 4),
    op(0x5E, LSR, ABX, 7),
    ill(0x5F, SRE, ABX, 7),
    // 0x60
    op(0x60, RTS, IMP, 6),
    op(0x61, ADC, IZX, 6),
    ill(0x62, JAM, IMP, 2),
    ill(0x63, RRA, IZX, 8),
    ill(0x64, NOP, ZP0, 3),
    op(0x65, ADC, ZP0, 3),
    op(0x66, ROR, ZP0, 5),
    ill(0x67, RRA, ZP0, 5),
    op(0x68, PLA, IMP, 4),
    op(0x69, ADC, IMM, 2),
    op(0x6A, ROR, ACC, 2),
    ill(0x6B, ARR, IMM, 2),
    op(0x6C, JMP, IND, 5),
    op(0x6D, ADC, ABS, 4),
    op(0x6E, ROR, ABS, 6),
    ill(0x6F, RRA, ABS, 6),
    // 0x70
    op(0x70, BVS, REL, 2),
    op(0x71, ADC, IZY, 5),
    ill(0x72, JAM, IMP, 2),
    ill(0x73, RRA, IZY, 8),
    ill(0x74, NOP, ZPX, 4),
    op(0x75, ADC, ZPX, 4),
    op(0x76, ROR, ZPX, 6),
    ill(0x77, RRA, ZPX, 6),
    op(0x78, SEI, IMP, 2),
    op(0x79, ADC, ABY, 4),
    ill(0x7A, NOP, IMP, 2),
    ill(0x7B, RRA, ABY, 7),
    ill(0x7C, NOP, ABX, 4),
    op(0x7D, ADC, ABX, 4),
    op(0x7E, ROR, ABX, 7),
    ill(0x7F, RRA, ABX, 7),
    // 0x80
    ill(0x80, NOP, IMM, 2),
    op(0x81, STA, IZX, 6),
    ill(0x82, NOP, IMM, 2),
    ill(0x83, SAX, IZX, 6),
    op(0x84, STY, ZP0, 3),
    op(0x85, STA, ZP0, 3),
    op(0x86, STX, ZP0, 3),
    ill(0x87, SAX, ZP0, 3),
    op(0x88, DEY, IMP, 2),
    ill(0x89, NOP, IMM, 2),
    op(0x8A, TXA, IMP, 2),
    ill(0x8B, XAA, IMM, 2),
    op(0x8C, STY, ABS, 4),
    op(0x8D, STA, ABS, 4),
    op(0x8E, STX, ABS, 4),
    ill(0x8F, SAX, ABS, 4),
    // 0x90
    op(0x90, BCC, REL, 2),
    op(0x91, STA, IZY, 6),
    ill(0x92, JAM, IMP, 2),
    ill(0x93, SHA, IZY, 6),
    op(0x94, STY, ZPX, 4),
    op(0x95, STA, ZPX, 4),
    op(0x96, STX, ZPY, 4),
    ill(0x97, SAX, ZPY, 4),
    op(0x98, TYA, IMP, 2),
    op(0x99, STA, ABY, 5),
    op(0x9A, TXS, IMP, 2),
    ill(0x9B, TAS, ABY, 5),
    ill(0x9C, SHY, ABX, 5),
    op(0x9D, STA, ABX, 5),
    ill(0x9E, SHX, ABY, 5),
    ill(0x9F, SHA, ABY, 5),
    // 0xA0
    op(0xA0, LDY, IMM, 2),
    op(0xA1, LDA, IZX, 6),
    op(0xA2, LDX, IMM, 2),
    ill(0xA3, LAX, IZX, 6),
    op(0xA4, LDY, ZP0, 3),
    op(0xA5, LDA, ZP0, 3),
    op(0xA6, LDX, ZP0, 3),
    ill(0xA7, LAX, ZP0, 3),
    op(0xA8, TAY, IMP, 2),
    op(0xA9, LDA, IMM, 2),
    op(0xAA, TAX, IMP, 2),
    ill(0xAB, LXA, IMM, 2),
    op(0xAC, LDY, ABS, 4),
    op(0xAD, LDA, ABS, 4),
    op(0xAE, LDX, ABS, 4),
    ill(0xAF, LAX, ABS, 4),
    // 0xB0
    op(0xB0, BCS, REL, 2),
    op(0xB1, LDA, IZY, 5),
    ill(0xB2, JAM, IMP, 2),
    ill(0xB3, LAX, IZY, 5),
    op(0xB4, LDY, ZPX, 4),
    op(0xB5, LDA, ZPX, 4),
    op(0xB6, LDX, ZPY, 4),
    ill(0xB7, LAX, ZPY, 4),
    op(0xB8, CLV, IMP, 2),
    op(0xB9, LDA, ABY, 4),
    op(0xBA, TSX, IMP, 2),
    ill(0xBB, LAS, ABY, 4),
    op(0xBC, LDY, ABX, 4),
    op(0xBD, LDA, ABX, 4),
    op(0xBE, LDX, ABY, 4),
    ill(0xBF, LAX, ABY, 4),
    // 0xC0
    op(0xC0, CPY, IMM, 2),
    op(0xC1, CMP, IZX, 6),
    ill(0xC2, NOP, IMM, 2),
    ill(0xC3, DCP, IZX, 8),
    op(0xC4, CPY, ZP0, 3),
    op(0xC5, CMP, ZP0, 3),
    op(0xC6, DEC, ZP0, 5),
    ill(0xC7, DCP, ZP0, 5),
    op(0xC8, INY, IMP, 2),
    op(0xC9, CMP, IMM, 2),
    op(0xCA, DEX, IMP, 2),
    ill(0xCB, SBX, IMM, 2),
    op(0xCC, CPY, ABS, 4),
    op(0xCD, CMP, ABS, 4),
    op(0xCE, DEC, ABS, 6),
    ill(0xCF, DCP, ABS, 6),
    // 0xD0
    op(0xD0, BNE, REL, 2),
    op(0xD1, CMP, IZY, 5),
    ill(0xD2, JAM, IMP, 2),
    ill(0xD3, DCP, IZY, 8),
    ill(0xD4, NOP, ZPX, 4),
    op(0xD5, CMP, ZPX, 4),
    op(0xD6, DEC, ZPX, 6),
    ill(0xD7, DCP, ZPX, 6),
    op(0xD8, CLD, IMP, 2),
    op(0xD9, CMP, ABY, 4),
    ill(0xDA, NOP, IMP, 2),
    ill(0xDB, DCP, ABY, 7),
    ill(0xDC, NOP, ABX, 4),
    op(0xDD, CMP, ABX, 4),
    op(0xDE, DEC, ABX, 7),
    ill(0xDF, DCP, ABX, 7),
    // 0xE0
    op(0xE0, CPX, IMM, 2),
    op(0xE1, SBC, IZX, 6),
    ill(0xE2, NOP, IMM, 2),
    ill(0xE3, ISC, IZX, 8),
    op(0xE4, CPX, ZP0, 3),
    op(0xE5, SBC, ZP0, 3),
    op(0xE6, INC, ZP0, 5),
    ill(0xE7, ISC, ZP0, 5),
    op(0xE8, INX, IMP, 2),
    op(0xE9, SBC, IMM, 2),
    op(0xEA, NOP, IMP, 2),
    ill(0xEB, SBC, IMM, 2),
    op(0xEC, CPX, ABS, 4),
    op(0xED, SBC, ABS, 4),
    op(0xEE, INC, ABS, 6),
    ill(0xEF, ISC, ABS, 6),
    // 0xF0
    op(0xF0, BEQ, REL, 2),
    op(0xF1, SBC, IZY, 5),
    ill(0xF2, JAM, IMP, 2),
    ill(0xF3, ISC, IZY, 8),
    ill(0xF4, NOP, ZPX, 4),
    op(0xF5, SBC, ZPX, 4),
    op(0xF6, INC, ZPX, 6),
    ill(0xF7, ISC, ZPX, 6),
    op(0xF8, SED, IMP, 2),
    op(0xF9, SBC, ABY, 4),
    ill(0xFA, NOP, IMP, 2),
    ill(0xFB, ISC, ABY, 7),
    ill(0xFC, NOP, ABX, 4),
    op(0xFD, SBC, ABX, 4),
    op(0xFE, INC, ABX, 7),
    ill(0xFF, ISC, ABX, 7),
];
