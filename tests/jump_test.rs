//! Tests for JMP, JSR, RTS, BRK and RTI.

use lib6510::{FlatMemory, MemoryBus, CPU, IRQ_VECTOR, RESET_VECTOR};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_vector(RESET_VECTOR, 0x8000);
    CPU::new(memory)
}

fn load(cpu: &mut CPU<FlatMemory>, program: &[u8]) {
    cpu.memory_mut().load(0x8000, program).unwrap();
}

// ========== JMP ==========

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x4C, 0x34, 0x12]);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_jmp_indirect() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x6C, 0x00, 0x02]);
    cpu.memory_mut().load(0x0200, &[0xCD, 0xAB]).unwrap();

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.pc(), 0xABCD);
}

#[test]
fn test_jmp_indirect_page_wrap_bug() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x6C, 0xFF, 0x02]);
    cpu.memory_mut().write(0x02FF, 0x34);
    cpu.memory_mut().write(0x0200, 0x12);
    cpu.memory_mut().write(0x0300, 0x99);

    cpu.step();
    // High byte comes from $0200, not $0300
    assert_eq!(cpu.pc(), 0x1234);
}

// ========== JSR / RTS ==========

#[test]
fn test_jsr_pushes_last_byte_address() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x20, 0x00, 0x90]);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.memory().read(0x01FF), 0x80);
    assert_eq!(cpu.memory().read(0x01FE), 0x02);
}

#[test]
fn test_jsr_rts_round_trip() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x20, 0x00, 0x90, 0xEA]);
    cpu.memory_mut().write(0x9000, 0x60);

    cpu.step();
    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_rts_leaves_flags() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x20, 0x00, 0x90]);
    cpu.memory_mut().write(0x9000, 0x60);
    cpu.set_status(0xC3);

    cpu.step();
    cpu.step();
    assert_eq!(cpu.status(), 0xE3);
}

// ========== BRK / RTI ==========

#[test]
fn test_brk_pushes_pc_plus_two_and_break() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x00, 0xEA]);
    cpu.memory_mut().set_vector(IRQ_VECTOR, 0x9000);
    cpu.set_flag_i(false);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.pc(), 0x9000);
    assert!(cpu.flag_i());
    assert_eq!(cpu.sp(), 0xFC);
    assert_eq!(cpu.memory().read(0x01FF), 0x80);
    assert_eq!(cpu.memory().read(0x01FE), 0x02);
    // N V - B D I Z C, pushed with B and the reserved bit
    assert_eq!(cpu.memory().read(0x01FD), 0x31);
}

#[test]
fn test_brk_ignores_interrupt_disable() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x00]);
    cpu.memory_mut().set_vector(IRQ_VECTOR, 0x9000);
    cpu.set_flag_i(true);

    cpu.step();
    assert_eq!(cpu.pc(), 0x9000);
}

#[test]
fn test_brk_rti_round_trip() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x00, 0xFF, 0xEA]);
    cpu.memory_mut().set_vector(IRQ_VECTOR, 0x9000);
    cpu.memory_mut().write(0x9000, 0x40);
    cpu.set_status(0x81);

    cpu.step();
    assert_eq!(cpu.step(), 6);
    // BRK skips its padding byte
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.status(), 0xA1);
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_rti_does_not_add_one() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x40]);
    cpu.set_sp(0xFC);
    cpu.memory_mut().load(0x01FD, &[0x00, 0x34, 0x12]).unwrap();

    cpu.step();
    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.status(), 0x20);
}
