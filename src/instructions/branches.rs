//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Branch if Carry Clear / Set
//! - BEQ / BNE: Branch if Equal (Z set) / Not Equal
//! - BMI / BPL: Branch if Minus (N set) / Plus
//! - BVC / BVS: Branch if Overflow Clear / Set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset
//! measured from the address of the following instruction.
//! Cycle timing varies based on whether the branch is taken and whether a page boundary is crossed.

use crate::addressing::AddressingMode;
use crate::{MemoryBus, CPU};

/// Executes a conditional branch taken when `taken` holds for the current flags.
///
/// Cycle timing:
/// - 2 cycles if branch not taken
/// - 3 cycles if branch taken to same page
/// - 4 cycles if branch taken to different page
///
/// No flags are affected.
///
/// # Examples
///
/// ```
/// use lib6510::{CPU, FlatMemory, MemoryBus, RESET_VECTOR};
///
/// let mut memory = FlatMemory::new();
/// memory.set_vector(RESET_VECTOR, 0x80F0);
/// memory.write(0x80F0, 0x90); // BCC +$20
/// memory.write(0x80F1, 0x20);
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.step(), 4); // taken, crosses into $81xx
/// assert_eq!(cpu.pc(), 0x8112);
/// ```
pub(crate) fn execute_branch<M: MemoryBus>(cpu: &mut CPU<M>, taken: fn(&CPU<M>) -> bool) {
    let target = cpu.effective_address_with_base(AddressingMode::Relative);

    if taken(cpu) {
        cpu.extra_cycles += 1;
        if target.page_crossed {
            cpu.extra_cycles += 1;
        }
        cpu.pc = target.address;
    } else {
        // Not taken: fall through to the next instruction
        cpu.pc = target.base;
    }
}
