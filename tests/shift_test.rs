//! Tests for ASL, LSR, ROL and ROR on the accumulator and memory.

use lib6510::{FlatMemory, MemoryBus, CPU, RESET_VECTOR};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_vector(RESET_VECTOR, 0x8000);
    CPU::new(memory)
}

fn load(cpu: &mut CPU<FlatMemory>, program: &[u8]) {
    cpu.memory_mut().load(0x8000, program).unwrap();
}

// ========== ASL ==========

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x0A]);
    cpu.set_a(0x81);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_asl_zero_page() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x06, 0x10]);
    cpu.memory_mut().write(0x0010, 0x40);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.memory().read(0x0010), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_asl_absolute_x_fixed_cost() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x1E, 0xFF, 0x02, 0x1E, 0x00, 0x02]);
    cpu.set_x(0x01);
    cpu.memory_mut().write(0x0300, 0x80);
    cpu.memory_mut().write(0x0201, 0x01);

    // Read-modify-write pays the same 7 cycles with or without a page cross
    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.memory().read(0x0300), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());

    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.memory().read(0x0201), 0x02);
}

// ========== LSR ==========

#[test]
fn test_lsr_accumulator() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x4A]);
    cpu.set_a(0x01);
    cpu.set_flag_n(true);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lsr_absolute() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x4E, 0x00, 0x02]);
    cpu.memory_mut().write(0x0200, 0xFE);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.memory().read(0x0200), 0x7F);
    assert!(!cpu.flag_c());
}

// ========== ROL ==========

#[test]
fn test_rol_accumulator_carry_in() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x2A]);
    cpu.set_a(0x80);
    cpu.set_flag_c(true);

    cpu.step();
    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
}

#[test]
fn test_rol_zero_page_x() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x36, 0x10]);
    cpu.set_x(0x01);
    cpu.memory_mut().write(0x0011, 0x40);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.memory().read(0x0011), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

// ========== ROR ==========

#[test]
fn test_ror_accumulator_carry_in() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x6A]);
    cpu.set_a(0x01);
    cpu.set_flag_c(true);

    cpu.step();
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_zero_page() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x66, 0x10]);
    cpu.memory_mut().write(0x0010, 0x02);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.memory().read(0x0010), 0x01);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
}
