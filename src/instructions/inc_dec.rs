//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC / DEC: Memory ± 1
//! - INX / DEX: X ± 1
//! - INY / DEY: Y ± 1
//!
//! All wrap at the byte boundary and set N and Z. C is never affected.

use super::modify;
use crate::addressing::AddressingMode;
use crate::{MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    modify(cpu, mode, |cpu, value| {
        let result = value.wrapping_add(1);
        cpu.set_nz(result);
        result
    });
}

/// Executes the DEC (Decrement Memory) instruction.
///
/// # Examples
///
/// ```
/// use lib6510::{CPU, FlatMemory, MemoryBus, RESET_VECTOR};
///
/// let mut memory = FlatMemory::new();
/// memory.set_vector(RESET_VECTOR, 0x8000);
/// memory.load(0x8000, &[0xC6, 0x10]).unwrap(); // DEC $10
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.step(), 5);
/// assert_eq!(cpu.memory().read(0x0010), 0xFF);
/// assert!(cpu.flag_n());
/// ```
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    modify(cpu, mode, |cpu, value| {
        let result = value.wrapping_sub(1);
        cpu.set_nz(result);
        result
    });
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_nz(cpu.x);
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_nz(cpu.y);
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_nz(cpu.x);
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_nz(cpu.y);
}
