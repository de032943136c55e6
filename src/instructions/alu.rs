//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND / ORA / EOR: Bitwise logic into the accumulator
//! - CMP / CPX / CPY: Compare register with memory
//! - BIT: Test bits in memory against the accumulator
//!
//! ADC and SBC honour the D flag with NMOS decimal-mode behaviour. The value
//! level helpers ([`add_with_carry`], [`subtract_with_borrow`], [`compare`])
//! are shared with the undocumented read-modify-write opcodes.

use crate::addressing::AddressingMode;
use crate::{MemoryBus, CPU};

/// Adds `value` and C to A, in binary or decimal mode according to D.
///
/// # Flag Behavior
///
/// Binary mode:
/// - C: Set if the unsigned sum exceeds 0xFF
/// - V: `(!(A ^ M) & (A ^ R) & 0x80) != 0`
/// - N, Z: From the result
///
/// Decimal mode (NMOS):
/// - Z: From the binary sum
/// - N, V: From the intermediate result after the low nibble is corrected
/// - C: Set if the BCD sum exceeds 99
pub(crate) fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry = cpu.flag_c as u16;

    let binary = a as u16 + value as u16 + carry;

    if !cpu.flag_d {
        let result = binary as u8;
        cpu.flag_c = binary > 0xFF;
        cpu.flag_v = (!(a ^ value) & (a ^ result) & 0x80) != 0;
        cpu.a = result;
        cpu.set_nz(result);
        return;
    }

    let mut lo = (a & 0x0F) as u16 + (value & 0x0F) as u16 + carry;
    let mut hi = (a >> 4) as u16 + (value >> 4) as u16;
    if lo > 0x09 {
        lo += 0x06;
    }
    if lo > 0x0F {
        hi += 1;
    }

    cpu.flag_z = binary & 0xFF == 0;
    cpu.flag_n = hi & 0x08 != 0;
    let intermediate = (hi << 4) as u8;
    cpu.flag_v = (!(a ^ value) & (a ^ intermediate) & 0x80) != 0;

    if hi > 0x09 {
        hi += 0x06;
    }
    cpu.flag_c = hi > 0x0F;
    cpu.a = (((hi << 4) | (lo & 0x0F)) & 0xFF) as u8;
}

/// Subtracts `value` and the borrow (inverted C) from A.
///
/// All flags come from the binary difference, in both modes. In decimal mode
/// only the value left in A is BCD-corrected.
///
/// - C: Set if no borrow was needed
/// - V: `((A ^ M) & (A ^ R) & 0x80) != 0`
/// - N, Z: From the binary result
pub(crate) fn subtract_with_borrow<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let borrow = (!cpu.flag_c) as i16;

    let binary = a as i16 - value as i16 - borrow;
    let result = binary as u8;

    cpu.flag_c = binary >= 0;
    cpu.flag_v = ((a ^ value) & (a ^ result) & 0x80) != 0;
    cpu.set_nz(result);

    if !cpu.flag_d {
        cpu.a = result;
        return;
    }

    let mut lo = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
    let mut hi = (a >> 4) as i16 - (value >> 4) as i16;
    if lo < 0 {
        lo -= 0x06;
        hi -= 1;
    }
    if hi < 0 {
        hi -= 0x06;
    }
    cpu.a = (((hi << 4) | (lo & 0x0F)) & 0xFF) as u8;
}

/// Compares `register` with `value`: C = register >= value, N and Z from the
/// difference. V is untouched.
pub(crate) fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    cpu.flag_c = register >= value;
    cpu.set_nz(register.wrapping_sub(value));
}

/// Executes the ADC (Add with Carry) instruction.
///
/// # Examples
///
/// ```
/// use lib6510::{CPU, FlatMemory, MemoryBus, RESET_VECTOR};
///
/// let mut memory = FlatMemory::new();
/// memory.set_vector(RESET_VECTOR, 0x8000);
/// memory.load(0x8000, &[0xF8, 0x69, 0x50]).unwrap(); // SED; ADC #$50
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_a(0x50);
/// cpu.step();
/// cpu.step();
///
/// // 50 + 50 = 100 in BCD
/// assert_eq!(cpu.a(), 0x00);
/// assert!(cpu.flag_c());
/// ```
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    add_with_carry(cpu, value);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Also serves the undocumented `$EB` encoding.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    subtract_with_borrow(cpu, value);
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.a &= value;
    cpu.set_nz(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.a |= value;
    cpu.set_nz(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.a ^= value;
    cpu.set_nz(cpu.a);
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    let register = cpu.a;
    compare(cpu, register, value);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    let register = cpu.x;
    compare(cpu, register, value);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    let register = cpu.y;
    compare(cpu, register, value);
}

/// Executes the BIT (Bit Test) instruction.
///
/// - Z: Set if `A & M` is zero
/// - N: Bit 7 of M
/// - V: Bit 6 of M
///
/// A is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.flag_z = cpu.a & value == 0;
    cpu.flag_n = value & 0x80 != 0;
    cpu.flag_v = value & 0x40 != 0;
}
