//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6510 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP.

use crate::status;
use crate::{MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
///
/// # Examples
///
/// ```
/// use lib6510::{CPU, FlatMemory, MemoryBus, RESET_VECTOR};
///
/// let mut memory = FlatMemory::new();
/// memory.set_vector(RESET_VECTOR, 0x8000);
/// memory.write(0x8000, 0x48); // PHA
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_a(0x42);
///
/// assert_eq!(cpu.step(), 3);
/// assert_eq!(cpu.memory().read(0x01FF), 0x42);
/// assert_eq!(cpu.sp(), 0xFE);
/// ```
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push(cpu.a);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy always has B and the reserved bit set.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let p = status::pushed(cpu.status(), true);
    cpu.push(p);
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Flags: N and Z from the pulled value.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pull();
    cpu.a = value;
    cpu.set_nz(value);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Bits 4 (B) and 5 (reserved) of the pulled byte have no effect.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pull();
    cpu.set_status(status::pulled(value));
}
