//! # Instruction Trace
//!
//! Fixed-width, one-line-per-instruction trace in the layout used by the
//! widely shared `nestest`-style golden logs, so a run can be diffed byte for
//! byte against a reference trace:
//!
//! ```text
//! C000  4C F5 C5  JMP $C5F5                       A:00 X:00 Y:00 P:24 SP:FD
//! C72A  B5 80     LDA $80,X @ 82 = 4F             A:00 X:02 Y:00 P:26 SP:FB
//! C6BD  04 A9    *NOP $A9 = 00                    A:AA X:97 Y:4E P:EF SP:F5
//! ```
//!
//! Columns: PC, up to three instruction bytes in an 8-wide field, a `*`
//! marker for undocumented opcodes, then the disassembly padded to 31
//! characters, then the registers as they are *before* the instruction runs.
//!
//! Operands are annotated with what the instruction will touch: the resolved
//! address after indexing or indirection, and the byte currently stored there.
//! Building a line only reads memory through `&self`, so producing it never
//! disturbs the machine.

use crate::addressing::{resolve, AddressingMode};
use crate::disassembler::formatter::operand_syntax;
use crate::opcodes::{Mnemonic, OPCODE_TABLE};
use crate::{MemoryBus, CPU};

/// Mnemonic as spelled in golden logs, which name ISC `ISB`.
fn trace_mnemonic(mnemonic: Mnemonic) -> &'static str {
    match mnemonic {
        Mnemonic::ISC => "ISB",
        other => other.as_str(),
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Formats the instruction at PC as a golden-log trace line.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib6510::{FlatMemory, MemoryBus, RESET_VECTOR, CPU};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.set_vector(RESET_VECTOR, 0xC000);
    /// memory.load(0xC000, &[0x4C, 0xF5, 0xC5]).unwrap();
    /// let cpu = CPU::new(memory);
    ///
    /// assert_eq!(
    ///     cpu.trace_line(),
    ///     "C000  4C F5 C5  JMP $C5F5                       A:00 X:00 Y:00 P:24 SP:FF"
    /// );
    /// ```
    pub fn trace_line(&self) -> String {
        let pc = self.pc;
        let opcode = self.memory.read(pc);
        let metadata = &OPCODE_TABLE[opcode as usize];

        let raw: Vec<u8> = (0..metadata.size_bytes as u16)
            .map(|i| self.memory.read(pc.wrapping_add(i)))
            .collect();
        let bytes = raw
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ");

        let operand = self.annotated_operand(metadata.mnemonic, metadata.addressing_mode, &raw[1..]);
        let name = trace_mnemonic(metadata.mnemonic);
        let text = if operand.is_empty() {
            name.to_string()
        } else {
            format!("{} {}", name, operand)
        };
        let marker = if metadata.legal { ' ' } else { '*' };

        format!(
            "{:04X}  {:<8} {}{:<31} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
            pc,
            bytes,
            marker,
            text,
            self.a,
            self.x,
            self.y,
            self.status(),
            self.sp
        )
    }

    fn annotated_operand(&self, mnemonic: Mnemonic, mode: AddressingMode, operand: &[u8]) -> String {
        let syntax = operand_syntax(mode, operand, self.pc);
        let ea = resolve(&self.memory, mode, self.pc, self.x, self.y);
        let value = self.memory.read(ea.address);

        match mode {
            AddressingMode::Implied
            | AddressingMode::Accumulator
            | AddressingMode::Immediate
            | AddressingMode::Relative => syntax,
            AddressingMode::Absolute if matches!(mnemonic, Mnemonic::JMP | Mnemonic::JSR) => syntax,
            AddressingMode::ZeroPage | AddressingMode::Absolute => {
                format!("{} = {:02X}", syntax, value)
            }
            AddressingMode::ZeroPageX | AddressingMode::ZeroPageY => {
                format!("{} @ {:02X} = {:02X}", syntax, ea.address, value)
            }
            AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => {
                format!("{} @ {:04X} = {:02X}", syntax, ea.address, value)
            }
            AddressingMode::Indirect => format!("{} = {:04X}", syntax, ea.address),
            AddressingMode::IndexedIndirect => format!(
                "{} @ {:02X} = {:04X} = {:02X}",
                syntax, ea.base, ea.address, value
            ),
            AddressingMode::IndirectIndexed => format!(
                "{} = {:04X} @ {:04X} = {:02X}",
                syntax, ea.base, ea.address, value
            ),
        }
    }
}
