//! # Undocumented Instructions
//!
//! The NMOS 6510 decodes every opcode byte. The undocumented ones fall out of
//! the instruction decoder enabling two documented operations at once, which
//! is why most of them are a read-modify-write followed by an ALU operation on
//! the same value.
//!
//! - **Combined RMW + ALU**: SLO, RLA, SRE, RRA, DCP, ISC
//! - **Immediate ALU**: ANC, ALR, ARR, SBX
//! - **Load / store**: LAX, SAX
//! - **Unstable**: XAA, LXA, LAS, TAS, SHA, SHX, SHY
//! - **JAM**: halts the instruction stream
//!
//! The unstable group depends on analog bus effects on real silicon. They run
//! a fixed approximation here (magic constant 0x00 for XAA/LXA, `& (H+1)` with
//! no address corruption for the SH* stores) and are best-effort only.

use super::alu::{add_with_carry, compare, subtract_with_borrow};
use super::modify;
use super::shifts::{asl_value, lsr_value, rol_value, ror_value};
use crate::addressing::AddressingMode;
use crate::{MemoryBus, CPU};

/// Value ORed into A by XAA and LXA before the AND.
const UNSTABLE_MAGIC: u8 = 0x00;

// ========== Combined RMW + ALU ==========

/// SLO: ASL memory, then ORA with the result.
pub(crate) fn execute_slo<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let result = modify(cpu, mode, asl_value);
    cpu.a |= result;
    cpu.set_nz(cpu.a);
}

/// RLA: ROL memory, then AND with the result.
pub(crate) fn execute_rla<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let result = modify(cpu, mode, rol_value);
    cpu.a &= result;
    cpu.set_nz(cpu.a);
}

/// SRE: LSR memory, then EOR with the result.
pub(crate) fn execute_sre<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let result = modify(cpu, mode, lsr_value);
    cpu.a ^= result;
    cpu.set_nz(cpu.a);
}

/// RRA: ROR memory, then ADC the result. The carry out of the ROR feeds the
/// addition.
pub(crate) fn execute_rra<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let result = modify(cpu, mode, ror_value);
    add_with_carry(cpu, result);
}

/// DCP: DEC memory, then CMP with the result.
///
/// # Examples
///
/// ```
/// use lib6510::{CPU, FlatMemory, MemoryBus, RESET_VECTOR};
///
/// let mut memory = FlatMemory::new();
/// memory.set_vector(RESET_VECTOR, 0x8000);
/// memory.load(0x8000, &[0xC7, 0x10]).unwrap(); // DCP $10
/// memory.write(0x0010, 0x43);
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_a(0x42);
/// assert_eq!(cpu.step(), 5);
/// assert_eq!(cpu.memory().read(0x0010), 0x42);
/// assert!(cpu.flag_z());
/// assert!(cpu.flag_c());
/// ```
pub(crate) fn execute_dcp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let result = modify(cpu, mode, |_, value| value.wrapping_sub(1));
    let a = cpu.a;
    compare(cpu, a, result);
}

/// ISC: INC memory, then SBC the result.
pub(crate) fn execute_isc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let result = modify(cpu, mode, |_, value| value.wrapping_add(1));
    subtract_with_borrow(cpu, result);
}

// ========== Immediate ALU ==========

/// ANC: AND immediate, then copy N into C.
pub(crate) fn execute_anc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.a &= value;
    cpu.set_nz(cpu.a);
    cpu.flag_c = cpu.flag_n;
}

/// ALR: AND immediate, then LSR A.
pub(crate) fn execute_alr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    let masked = cpu.a & value;
    cpu.a = lsr_value(cpu, masked);
}

/// ARR: AND immediate, then ROR A, with C and V taken from the adder.
///
/// Binary mode: C = bit 6 of the result, V = bit 6 XOR bit 5.
/// Decimal mode: N, Z and V as in binary mode, then each nibble of the
/// rotated value is BCD-fixed up from the unrotated AND result, and C is set
/// when the high nibble needed fixing.
pub(crate) fn execute_arr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    let masked = cpu.a & value;
    let carry_in = (cpu.flag_c as u8) << 7;
    let result = (masked >> 1) | carry_in;

    cpu.set_nz(result);
    cpu.flag_v = (result ^ (result << 1)) & 0x40 != 0;

    if !cpu.flag_d {
        cpu.flag_c = result & 0x40 != 0;
        cpu.a = result;
        return;
    }

    let mut fixed = result;
    if (masked & 0x0F) + (masked & 0x01) > 0x05 {
        fixed = (fixed & 0xF0) | (fixed.wrapping_add(0x06) & 0x0F);
    }
    if (masked & 0xF0) as u16 + (masked & 0x10) as u16 > 0x50 {
        fixed = fixed.wrapping_add(0x60);
        cpu.flag_c = true;
    } else {
        cpu.flag_c = false;
    }
    cpu.a = fixed;
}

/// SBX: `X = (A & X) - immediate`, C = no borrow. Ignores D and leaves V alone.
pub(crate) fn execute_sbx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    let masked = cpu.a & cpu.x;
    cpu.flag_c = masked >= value;
    cpu.x = masked.wrapping_sub(value);
    cpu.set_nz(cpu.x);
}

// ========== Load / Store ==========

/// LAX: load A and X with the same value.
pub(crate) fn execute_lax<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.a = value;
    cpu.x = value;
    cpu.set_nz(value);
}

/// SAX: store `A & X`. No flags.
pub(crate) fn execute_sax<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.effective_address(mode);
    cpu.memory.write(addr, cpu.a & cpu.x);
}

// ========== Unstable ==========

/// LAS: `A = X = SP = memory & SP`. Best-effort.
pub(crate) fn execute_las<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode) & cpu.sp;
    cpu.a = value;
    cpu.x = value;
    cpu.sp = value;
    cpu.set_nz(value);
}

/// XAA: `A = (A | magic) & X & immediate`. Best-effort.
pub(crate) fn execute_xaa<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.a = (cpu.a | UNSTABLE_MAGIC) & cpu.x & value;
    cpu.set_nz(cpu.a);
}

/// LXA: `A = X = (A | magic) & immediate`. Best-effort.
pub(crate) fn execute_lxa<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    let result = (cpu.a | UNSTABLE_MAGIC) & value;
    cpu.a = result;
    cpu.x = result;
    cpu.set_nz(result);
}

/// Stores `value & (H+1)`, where H is the high byte of the un-indexed base.
fn store_and_high<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, value: u8) {
    let ea = cpu.effective_address_with_base(mode);
    let high = ((ea.base >> 8) as u8).wrapping_add(1);
    cpu.memory.write(ea.address, value & high);
}

/// TAS: `SP = A & X`, then store `SP & (H+1)`. Best-effort.
pub(crate) fn execute_tas<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.sp = cpu.a & cpu.x;
    let value = cpu.sp;
    store_and_high(cpu, mode, value);
}

/// SHA: store `A & X & (H+1)`. Best-effort.
pub(crate) fn execute_sha<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.a & cpu.x;
    store_and_high(cpu, mode, value);
}

/// SHX: store `X & (H+1)`. Best-effort.
pub(crate) fn execute_shx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.x;
    store_and_high(cpu, mode, value);
}

/// SHY: store `Y & (H+1)`. Best-effort.
pub(crate) fn execute_shy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.y;
    store_and_high(cpu, mode, value);
}

// ========== JAM ==========

/// JAM: the processor locks up on this opcode.
///
/// PC stays put, so every later step re-executes the JAM for its 2 cycles
/// until an interrupt or reset moves PC away.
pub(crate) fn execute_jam<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    if !cpu.jammed {
        log::warn!("JAM ${:02X} at ${:04X}: CPU halted", opcode, cpu.pc);
        cpu.jammed = true;
    }
}
