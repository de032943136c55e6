//! 6510 Disassembler Module
//!
//! Converts binary machine code into human-readable assembly mnemonics.
//! Every one of the 256 opcodes decodes; undocumented ones are marked and
//! printed with a `*` prefix (`*SLO ($10,X)`).

pub mod decoder;
pub mod formatter;

use crate::addressing::AddressingMode;

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "SLO"), or ".byte" for raw data
    pub mnemonic: &'static str,

    /// False for undocumented opcodes
    pub legal: bool,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// Base cycle cost (excluding page-crossing penalties)
    pub base_cycles: u8,
}

impl Instruction {
    /// A single raw byte that could not be decoded as an instruction.
    pub fn data_byte(address: u16, byte: u8) -> Self {
        Self {
            address,
            opcode: byte,
            mnemonic: ".byte",
            legal: true,
            addressing_mode: AddressingMode::Implied,
            operand_bytes: vec![byte],
            size_bytes: 1,
            base_cycles: 0,
        }
    }

    /// True for `.byte` records.
    pub fn is_data(&self) -> bool {
        self.mnemonic == ".byte"
    }
}

/// Options controlling disassembly output
#[derive(Debug, Clone, Copy)]
pub struct DisassemblyOptions {
    /// Starting address for disassembly (affects address display)
    pub start_address: u16,

    /// Decode undocumented opcodes. When false they come out as `.byte`.
    pub decode_illegal: bool,
}

impl Default for DisassemblyOptions {
    fn default() -> Self {
        Self {
            start_address: 0x0000,
            decode_illegal: true,
        }
    }
}

/// Disassemble a byte slice into a vector of instructions
///
/// An instruction whose operand bytes run past the end of the slice is
/// emitted as `.byte` records instead.
///
/// # Examples
///
/// ```
/// use lib6510::{disassemble, format_instruction, DisassemblyOptions};
///
/// let code = [0xA9, 0x42, 0x03, 0x10, 0x8D];
/// let lines: Vec<String> = disassemble(&code, DisassemblyOptions::default())
///     .iter()
///     .map(format_instruction)
///     .collect();
///
/// assert_eq!(lines, vec!["LDA #$42", "*SLO ($10,X)", ".byte $8D"]);
/// ```
pub fn disassemble(bytes: &[u8], options: DisassemblyOptions) -> Vec<Instruction> {
    disassemble_iter(bytes, options).collect()
}

/// Lazily disassemble a byte slice, one instruction per `next()`.
///
/// Decoding stops as soon as the caller stops pulling, so
/// `disassemble_iter(ram, options).take(n)` touches only the first `n`
/// instructions.
///
/// # Examples
///
/// ```
/// use lib6510::{disassemble_iter, DisassemblyOptions};
///
/// let ram = [0xEA; 0x10000];
/// let first: Vec<u16> = disassemble_iter(&ram, DisassemblyOptions::default())
///     .take(3)
///     .map(|instr| instr.address)
///     .collect();
///
/// assert_eq!(first, vec![0x0000, 0x0001, 0x0002]);
/// ```
pub fn disassemble_iter(bytes: &[u8], options: DisassemblyOptions) -> Disassembly<'_> {
    Disassembly {
        bytes,
        offset: 0,
        address: options.start_address,
        decode_illegal: options.decode_illegal,
    }
}

/// Iterator returned by [`disassemble_iter`].
#[derive(Debug, Clone)]
pub struct Disassembly<'a> {
    bytes: &'a [u8],
    offset: usize,
    address: u16,
    decode_illegal: bool,
}

impl Iterator for Disassembly<'_> {
    type Item = Instruction;

    fn next(&mut self) -> Option<Instruction> {
        let rest = self.bytes.get(self.offset..).filter(|rest| !rest.is_empty())?;
        let decoded = decoder::decode_instruction(rest, self.address)
            .filter(|instr| instr.legal || self.decode_illegal);

        let instr = match decoded {
            Some(instr) => instr,
            None => Instruction::data_byte(self.address, rest[0]),
        };

        self.offset += instr.size_bytes as usize;
        self.address = self.address.wrapping_add(instr.size_bytes as u16);
        Some(instr)
    }
}
