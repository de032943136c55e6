//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each operates on the accumulator or on memory. C receives the bit shifted
//! out; N and Z follow the result.

use super::modify;
use crate::addressing::AddressingMode;
use crate::{MemoryBus, CPU};

/// Shifts `value` left, bit 7 into C.
pub(crate) fn asl_value<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    cpu.flag_c = value & 0x80 != 0;
    let result = value << 1;
    cpu.set_nz(result);
    result
}

/// Shifts `value` right, bit 0 into C. N always ends up clear.
pub(crate) fn lsr_value<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    cpu.flag_c = value & 0x01 != 0;
    let result = value >> 1;
    cpu.set_nz(result);
    result
}

/// Rotates `value` left through C.
pub(crate) fn rol_value<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    let carry_in = cpu.flag_c as u8;
    cpu.flag_c = value & 0x80 != 0;
    let result = (value << 1) | carry_in;
    cpu.set_nz(result);
    result
}

/// Rotates `value` right through C.
pub(crate) fn ror_value<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    let carry_in = (cpu.flag_c as u8) << 7;
    cpu.flag_c = value & 0x01 != 0;
    let result = (value >> 1) | carry_in;
    cpu.set_nz(result);
    result
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// # Examples
///
/// ```
/// use lib6510::{CPU, FlatMemory, MemoryBus, RESET_VECTOR};
///
/// let mut memory = FlatMemory::new();
/// memory.set_vector(RESET_VECTOR, 0x8000);
/// memory.write(0x8000, 0x0A); // ASL A
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_a(0x81);
///
/// assert_eq!(cpu.step(), 2);
/// assert_eq!(cpu.a(), 0x02);
/// assert!(cpu.flag_c());
/// ```
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    modify(cpu, mode, asl_value);
}

/// Executes the LSR (Logical Shift Right) instruction.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    modify(cpu, mode, lsr_value);
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    modify(cpu, mode, rol_value);
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    modify(cpu, mode, ror_value);
}
