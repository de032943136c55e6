//! Tests for the load and store instructions (LDA, LDX, LDY, STA, STX, STY).
//!
//! Tests cover:
//! - Every addressing mode for LDA and STA
//! - Flag updates (Z, N) on loads, none on stores
//! - Cycle counts including page crossing penalties

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

// ========== LDA ==========

#[test]
fn test_lda_immediate() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xA9, 0x42]);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_lda_flags() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xA9, 0x00, 0xA9, 0x80]);

    cpu.step();
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());

    cpu.step();
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_lda_zero_page() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xA5, 0x10]);
    cpu.memory_mut().write(0x0010, 0x37);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.a(), 0x37);
}

#[test]
fn test_lda_zero_page_x_wraps() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xB5, 0xF0]);
    cpu.set_x(0x20);
    cpu.memory_mut().write(0x0010, 0x99);

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.a(), 0x99);
}

#[test]
fn test_lda_absolute() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xAD, 0x34, 0x12]);
    cpu.memory_mut().write(0x1234, 0x55);

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.a(), 0x55);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_lda_absolute_x_same_page() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xBD, 0x00, 0x12]);
    cpu.set_x(0x10);
    cpu.memory_mut().write(0x1210, 0x66);

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.a(), 0x66);
}

#[test]
fn test_lda_absolute_x_page_cross() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xBD, 0xFF, 0x12]);
    cpu.set_x(0x01);
    cpu.memory_mut().write(0x1300, 0x77);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.a(), 0x77);
}

#[test]
fn test_lda_absolute_y_page_cross() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xB9, 0x80, 0x12]);
    cpu.set_y(0x80);
    cpu.memory_mut().write(0x1300, 0x78);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.a(), 0x78);
}

#[test]
fn test_lda_indexed_indirect() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xA1, 0x20]);
    cpu.set_x(0x04);
    cpu.memory_mut().load(0x0024, &[0x74, 0x20]).unwrap();
    cpu.memory_mut().write(0x2074, 0x88);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.a(), 0x88);
}

#[test]
fn test_lda_indirect_indexed() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xB1, 0x86]);
    cpu.set_y(0x10);
    cpu.memory_mut().load(0x0086, &[0x28, 0x40]).unwrap();
    cpu.memory_mut().write(0x4038, 0x99);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.a(), 0x99);
}

#[test]
fn test_lda_indirect_indexed_page_cross() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xB1, 0x86]);
    cpu.set_y(0xFF);
    cpu.memory_mut().load(0x0086, &[0x01, 0x40]).unwrap();
    cpu.memory_mut().write(0x4100, 0x9A);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.a(), 0x9A);
}

#[test]
fn test_lda_leaves_other_flags() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xA9, 0x00]);
    cpu.set_flag_c(true);
    cpu.set_flag_v(true);
    cpu.set_flag_d(true);

    cpu.step();
    assert!(cpu.flag_c());
    assert!(cpu.flag_v());
    assert!(cpu.flag_d());
    assert!(cpu.flag_i());
}

// ========== LDX / LDY ==========

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xB6, 0x10]);
    cpu.set_y(0x05);
    cpu.memory_mut().write(0x0015, 0xC0);

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.x(), 0xC0);
    assert!(cpu.flag_n());
}

#[test]
fn test_ldx_absolute_y_page_cross() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xBE, 0xF0, 0x20]);
    cpu.set_y(0x20);
    cpu.memory_mut().write(0x2110, 0x01);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.x(), 0x01);
}

#[test]
fn test_ldy_immediate_zero() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xA0, 0x00]);
    cpu.set_y(0x12);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_ldy_absolute_x() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xBC, 0x00, 0x30]);
    cpu.set_x(0x02);
    cpu.memory_mut().write(0x3002, 0x7F);

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.y(), 0x7F);
}

// ========== Stores ==========

#[test]
fn test_sta_zero_page() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x85, 0x10]);
    cpu.set_a(0x42);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.memory().read(0x0010), 0x42);
}

#[test]
fn test_sta_does_not_touch_flags() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x8D, 0x00, 0x02]);
    cpu.set_a(0x00);
    let before = cpu.status();

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.status(), before);
}

#[test]
fn test_sta_absolute_x_no_page_penalty() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x9D, 0xFF, 0x02, 0x9D, 0x00, 0x02]);
    cpu.set_a(0x5A);
    cpu.set_x(0x01);

    // Crossing and not crossing cost the same 5 cycles
    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.memory().read(0x0300), 0x5A);
    assert_eq!(cpu.memory().read(0x0201), 0x5A);
}

#[test]
fn test_sta_indirect_indexed() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x91, 0x40]);
    cpu.set_a(0x33);
    cpu.set_y(0xFF);
    cpu.memory_mut().load(0x0040, &[0x01, 0x03]).unwrap();

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.memory().read(0x0400), 0x33);
}

#[test]
fn test_stx_zero_page_y() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x96, 0xFF]);
    cpu.set_x(0xAB);
    cpu.set_y(0x02);

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.memory().read(0x0001), 0xAB);
}

#[test]
fn test_sty_absolute() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x8C, 0x00, 0x04]);
    cpu.set_y(0xCD);

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.memory().read(0x0400), 0xCD);
}
