//! Tests for register transfers and the flag set/clear instructions.

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

// ========== Transfers ==========

#[test]
fn test_tax_tay() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xAA, 0xA8]);
    cpu.set_a(0x80);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.y(), 0x80);
}

#[test]
fn test_txa_tya_zero() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x8A, 0x98]);
    cpu.set_a(0x55);
    cpu.set_x(0x00);
    cpu.set_y(0x33);

    cpu.step();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());

    cpu.step();
    assert_eq!(cpu.a(), 0x33);
    assert!(!cpu.flag_z());
}

#[test]
fn test_tsx_sets_flags() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xBA]);

    cpu.step();
    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag_n());
}

#[test]
fn test_txs_leaves_flags() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x9A]);
    cpu.set_x(0x00);
    let status = cpu.status();

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.status(), status);
}

// ========== Flag instructions ==========

#[test]
fn test_set_and_clear_carry() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x38, 0x18]);

    assert_eq!(cpu.step(), 2);
    assert!(cpu.flag_c());
    assert_eq!(cpu.step(), 2);
    assert!(!cpu.flag_c());
}

#[test]
fn test_set_and_clear_interrupt_disable() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x58, 0x78]);
    assert!(cpu.flag_i());

    cpu.step();
    assert!(!cpu.flag_i());
    cpu.step();
    assert!(cpu.flag_i());
}

#[test]
fn test_set_and_clear_decimal() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xF8, 0xD8]);

    cpu.step();
    assert!(cpu.flag_d());
    cpu.step();
    assert!(!cpu.flag_d());
}

#[test]
fn test_clv() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xB8]);
    cpu.set_flag_v(true);

    assert_eq!(cpu.step(), 2);
    assert!(!cpu.flag_v());
}

#[test]
fn test_flag_instructions_touch_only_their_bit() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x38]);
    cpu.set_status(0x00);

    cpu.step();
    assert_eq!(cpu.status(), 0x21);
}
