//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - JSR / RTS: Call and return from subroutine
//! - BRK / RTI: Software interrupt and return from interrupt
//! - NOP: No operation (documented and undocumented encodings)
//!
//! Everything here except NOP sets PC itself.
//!
//! BRK is a software interrupt that:
//! 1. Pushes PC+2 to the stack (high byte first, then low byte)
//! 2. Pushes processor status to stack with B flag set
//! 3. Sets the I (interrupt disable) flag
//! 4. Loads PC from IRQ vector at $FFFE/F

use crate::addressing::{read_word, AddressingMode};
use crate::interrupts::IRQ_VECTOR;
use crate::status;
use crate::{MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Addressing modes:
/// - Absolute (0x4C): JMP $1234 - Jump to address $1234
/// - Indirect (0x6C): JMP ($1234) - Jump to address stored at $1234/$1235
///
/// Note: The Indirect addressing mode has a hardware bug in the NMOS parts:
/// if the low byte of the pointer is 0xFF, the high byte is read from the
/// start of the same page. `JMP ($10FF)` reads $10FF and $1000, not $1100.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.pc = cpu.effective_address(mode);
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR (PC+2), then jumps.
///
/// # Examples
///
/// ```
/// use lib6510::{CPU, FlatMemory, MemoryBus, RESET_VECTOR};
///
/// let mut memory = FlatMemory::new();
/// memory.set_vector(RESET_VECTOR, 0x8000);
/// memory.load(0x8000, &[0x20, 0x00, 0x90]).unwrap(); // JSR $9000
/// memory.write(0x9000, 0x60); // RTS
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.step(), 6);
/// assert_eq!(cpu.pc(), 0x9000);
/// assert_eq!(cpu.memory().read(0x01FF), 0x80);
/// assert_eq!(cpu.memory().read(0x01FE), 0x02);
///
/// assert_eq!(cpu.step(), 6);
/// assert_eq!(cpu.pc(), 0x8003);
/// ```
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let target = cpu.effective_address(mode);
    let return_address = cpu.pc.wrapping_add(2);
    cpu.push_word(return_address);
    cpu.pc = target;
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pc = cpu.pull_word().wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls P (B discarded, reserved forced) and then PC. Unlike RTS, the pulled
/// PC is used as is.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let p = cpu.pull();
    cpu.set_status(status::pulled(p));
    cpu.pc = cpu.pull_word();
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// Cycle timing: 7 cycles (fixed)
///
/// The byte after BRK is skipped on return, so BRK behaves as a two-byte
/// instruction.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    let return_address = cpu.pc.wrapping_add(2);
    cpu.push_word(return_address);
    let p = status::pushed(cpu.status(), true);
    cpu.push(p);
    cpu.flag_i = true;
    cpu.pc = read_word(&cpu.memory, IRQ_VECTOR);
}

/// Executes NOP.
///
/// Undocumented NOPs with an operand still perform the read, so the
/// AbsoluteX forms take the page-crossing cycle.
pub(crate) fn execute_nop<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    if mode != AddressingMode::Implied {
        cpu.read_operand(mode);
    }
}
