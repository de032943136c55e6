//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6510 processor
//! and the resolver that turns an instruction's operand bytes into an
//! effective address.
//!
//! Resolution is a pure function of memory, PC and the index registers, so the
//! same code serves instruction execution and the trace formatter. The CPU
//! wrappers at the bottom of this file record the page-crossing result in the
//! per-step scratch state.

use crate::{MemoryBus, CPU};

/// 6510 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndexedIndirect, IndirectIndexed
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within page 0.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within page 0.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// May incur +1 cycle penalty on read-class instructions if a page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// May incur +1 cycle penalty on read-class instructions if a page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Reproduces the NMOS page-wrap bug: JMP ($10FF) reads $10FF and $1000.
    Indirect,

    /// Indexed indirect: `($nn,X)`. X is added to the zero-page pointer, then
    /// the pointer is dereferenced.
    IndexedIndirect,

    /// Indirect indexed: `($nn),Y`. The zero-page pointer is dereferenced,
    /// then Y is added to the result.
    ///
    /// May incur +1 cycle penalty on read-class instructions if a page boundary is crossed.
    IndirectIndexed,

    /// Signed 8-bit displacement from the address of the next instruction.
    ///
    /// Example: BEQ label
    Relative,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
            _ => 1,
        }
    }
}

/// Result of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveAddress {
    /// Final address the instruction operates on.
    pub address: u16,

    /// Address before the last indexing step: the operand for indexed modes,
    /// the zero-page pointer slot for `($nn,X)`, the JMP pointer for
    /// `($nnnn)`, and PC+2 for relative branches.
    pub base: u16,

    /// True if `address` lies in a different page from `base`.
    pub page_crossed: bool,
}

impl EffectiveAddress {
    fn direct(address: u16) -> Self {
        Self {
            address,
            base: address,
            page_crossed: false,
        }
    }

    fn indexed(base: u16, index: u8) -> Self {
        let address = base.wrapping_add(index as u16);
        Self {
            address,
            base,
            page_crossed: (base & 0xFF00) != (address & 0xFF00),
        }
    }

    fn indexed_signed(base: u16, offset: i8) -> Self {
        let address = base.wrapping_add_signed(offset as i16);
        Self {
            address,
            base,
            page_crossed: (base & 0xFF00) != (address & 0xFF00),
        }
    }
}

/// Reads a little-endian pointer from zero page. The high byte wraps to $00
/// when the pointer sits at $FF.
pub(crate) fn zero_page_word<M: MemoryBus>(memory: &M, pointer: u8) -> u16 {
    let lo = memory.read(pointer as u16);
    let hi = memory.read(pointer.wrapping_add(1) as u16);
    u16::from_le_bytes([lo, hi])
}

/// Reads a little-endian word at `addr`, crossing pages normally.
pub(crate) fn read_word<M: MemoryBus>(memory: &M, addr: u16) -> u16 {
    let lo = memory.read(addr);
    let hi = memory.read(addr.wrapping_add(1));
    u16::from_le_bytes([lo, hi])
}

/// Resolves the instruction at `pc` without side effects.
///
/// For `Implied` and `Accumulator` the returned address is meaningless and
/// set to `pc`.
pub fn resolve<M: MemoryBus>(
    memory: &M,
    mode: AddressingMode,
    pc: u16,
    x: u8,
    y: u8,
) -> EffectiveAddress {
    let byte = || memory.read(pc.wrapping_add(1));
    let word = || read_word(memory, pc.wrapping_add(1));

    match mode {
        AddressingMode::Implied | AddressingMode::Accumulator => EffectiveAddress::direct(pc),
        AddressingMode::Immediate => EffectiveAddress::direct(pc.wrapping_add(1)),
        AddressingMode::ZeroPage => EffectiveAddress::direct(byte() as u16),
        AddressingMode::ZeroPageX => {
            let zp = byte();
            EffectiveAddress {
                address: zp.wrapping_add(x) as u16,
                base: zp as u16,
                page_crossed: false,
            }
        }
        AddressingMode::ZeroPageY => {
            let zp = byte();
            EffectiveAddress {
                address: zp.wrapping_add(y) as u16,
                base: zp as u16,
                page_crossed: false,
            }
        }
        AddressingMode::Absolute => EffectiveAddress::direct(word()),
        AddressingMode::AbsoluteX => EffectiveAddress::indexed(word(), x),
        AddressingMode::AbsoluteY => EffectiveAddress::indexed(word(), y),
        AddressingMode::Indirect => {
            let pointer = word();
            let lo = memory.read(pointer);
            // High byte never carries into the next page
            let hi_addr = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
            let hi = memory.read(hi_addr);
            EffectiveAddress {
                address: u16::from_le_bytes([lo, hi]),
                base: pointer,
                page_crossed: false,
            }
        }
        AddressingMode::IndexedIndirect => {
            let pointer = byte().wrapping_add(x);
            EffectiveAddress {
                address: zero_page_word(memory, pointer),
                base: pointer as u16,
                page_crossed: false,
            }
        }
        AddressingMode::IndirectIndexed => {
            EffectiveAddress::indexed(zero_page_word(memory, byte()), y)
        }
        AddressingMode::Relative => {
            let next = pc.wrapping_add(2);
            let offset = byte() as i8;
            EffectiveAddress::indexed_signed(next, offset)
        }
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves the current instruction's effective address and records
    /// whether indexing crossed a page.
    ///
    /// Used by stores and read-modify-write instructions, which never take the
    /// conditional page-crossing cycle.
    pub(crate) fn effective_address(&mut self, mode: AddressingMode) -> u16 {
        let ea = resolve(&self.memory, mode, self.pc, self.x, self.y);
        self.page_crossed = ea.page_crossed;
        ea.address
    }

    /// Like [`effective_address`](Self::effective_address), but also returns
    /// the un-indexed base address.
    pub(crate) fn effective_address_with_base(&mut self, mode: AddressingMode) -> EffectiveAddress {
        let ea = resolve(&self.memory, mode, self.pc, self.x, self.y);
        self.page_crossed = ea.page_crossed;
        ea
    }

    /// Fetches the operand value for a read-class instruction.
    ///
    /// Adds the page-crossing cycle when an indexed mode crosses a page.
    pub(crate) fn read_operand(&mut self, mode: AddressingMode) -> u8 {
        match mode {
            AddressingMode::Accumulator => self.a,
            _ => {
                let addr = self.effective_address(mode);
                if self.page_crossed {
                    self.extra_cycles += 1;
                }
                self.memory.read(addr)
            }
        }
    }
}
