//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states, memory contents and interrupt
//! line levels, then runs a few steps to find edge cases and crashes.

#![no_main]

use arbitrary::Arbitrary;
use lib6510::{FlatMemory, MemoryBus, CPU, INTERRUPT_CYCLES, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Packed P register
    status: u8,
    nmi: bool,
    irq: bool,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Small region of memory for testing absolute addressing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.set_vector(RESET_VECTOR, 0x8000);
    memory.set_vector(IRQ_VECTOR, 0x9000);
    memory.set_vector(NMI_VECTOR, 0xA000);

    let _ = memory.load(0x8000, &input.memory.instruction_bytes);
    let _ = memory.load(0x0000, &input.memory.zero_page);
    let _ = memory.load(0x0100, &input.memory.stack_page);
    let _ = memory.load(0x4000, &input.memory.main_memory);

    let mut cpu = CPU::new(memory);

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);
    cpu.set_nmi_line(input.cpu_state.nmi);
    cpu.set_irq_line(input.cpu_state.irq);
    cpu.set_trace(input.steps % 2 == 0);

    let mut total: u64 = 0;
    for _ in 0..=(input.steps % 8) {
        let cycles = cpu.step();

        // Longest instruction is 7 base + 1 page cross (or 2+1+1 for a
        // branch); interrupt service is exactly 7
        assert!((1..=8).contains(&cycles) || cycles == INTERRUPT_CYCLES);
        total += cycles as u64;

        // Live P never shows B, always shows the reserved bit
        assert_eq!(cpu.status() & 0x30, 0x20);
    }

    assert_eq!(cpu.cycles(), total);
});
