//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC / SEC: Clear / Set Carry
//! - CLI / SEI: Clear / Set Interrupt Disable
//! - CLD / SED: Clear / Set Decimal Mode
//! - CLV: Clear Overflow
//!
//! These instructions use implied addressing mode, execute in 2 cycles and
//! touch no other flag.

use crate::{MemoryBus, CPU};

/// Executes the CLC (Clear Carry Flag) instruction.
///
/// # Examples
///
/// ```
/// use lib6510::{CPU, FlatMemory, MemoryBus, RESET_VECTOR};
///
/// let mut memory = FlatMemory::new();
/// memory.set_vector(RESET_VECTOR, 0x8000);
/// memory.write(0x8000, 0x18); // CLC
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_flag_c(true);
///
/// assert_eq!(cpu.step(), 2);
/// assert!(!cpu.flag_c());
/// assert_eq!(cpu.pc(), 0x8001);
/// ```
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_c = false;
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_c = true;
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
///
/// A pending IRQ is taken at the start of the next step.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_i = false;
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_i = true;
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_d = false;
}

/// Executes the SED (Set Decimal Mode) instruction.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_d = true;
}

/// Executes the CLV (Clear Overflow Flag) instruction.
///
/// There is no SEV; V is set only by ADC, SBC, BIT, PLP, RTI and ARR.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_v = false;
}
