//! Integration tests for NMI and IRQ handling.
//!
//! These tests verify:
//! - Edge-triggered NMI latching and priority over IRQ
//! - Level-sensitive IRQ masked by the I flag
//! - The 7-cycle service sequence and the pushed status byte
//! - IRQ sources on the memory bus

use lib6510::{FlatMemory, MemoryBus, CPU, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};

/// Helper function to create a CPU with reset vector at 0x8000, NMI handler
/// at 0x9000 and IRQ handler at 0xA000. Both handlers are a bare RTI.
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_vector(RESET_VECTOR, 0x8000);
    memory.set_vector(NMI_VECTOR, 0x9000);
    memory.set_vector(IRQ_VECTOR, 0xA000);
    memory.write(0x9000, 0x40);
    memory.write(0xA000, 0x40);
    for addr in 0x8000..0x8010 {
        memory.write(addr, 0xEA);
    }
    CPU::new(memory)
}

// ========== NMI ==========

#[test]
fn test_nmi_service_sequence() {
    let mut cpu = setup_cpu();
    cpu.assert_nmi();

    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.cycles(), 7);
    assert_eq!(cpu.sp(), 0xFC);
    assert_eq!(cpu.memory().read(0x01FF), 0x80);
    assert_eq!(cpu.memory().read(0x01FE), 0x00);
    assert!(cpu.flag_i());
}

#[test]
fn test_nmi_ignores_interrupt_disable() {
    let mut cpu = setup_cpu();
    assert!(cpu.flag_i());
    cpu.assert_nmi();

    cpu.step();
    assert_eq!(cpu.pc(), 0x9000);
}

#[test]
fn test_nmi_pushes_status_without_break() {
    let mut cpu = setup_cpu();
    cpu.set_status(0xC3);
    cpu.assert_nmi();

    cpu.step();
    let pushed = cpu.memory().read(0x01FD);
    assert_eq!(pushed & 0x10, 0x00);
    assert_eq!(pushed & 0x20, 0x20);
    assert_eq!(pushed, 0xE3);
}

#[test]
fn test_nmi_is_edge_triggered() {
    let mut cpu = setup_cpu();
    cpu.assert_nmi();
    cpu.step();
    assert_eq!(cpu.pc(), 0x9000);

    // Line still held: the handler's RTI runs, then the main program resumes
    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.pc(), 0x8001);

    // A fresh edge latches a new NMI
    cpu.release_nmi();
    cpu.assert_nmi();
    assert!(cpu.nmi_pending());
    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.pc(), 0x9000);
}

#[test]
fn test_nmi_latched_even_if_released_before_step() {
    let mut cpu = setup_cpu();
    cpu.assert_nmi();
    cpu.release_nmi();

    assert!(cpu.nmi_pending());
    assert_eq!(cpu.step(), 7);
}

#[test]
fn test_nmi_wins_over_irq() {
    let mut cpu = setup_cpu();
    cpu.set_flag_i(false);
    cpu.assert_irq();
    cpu.assert_nmi();

    cpu.step();
    assert_eq!(cpu.pc(), 0x9000);
    // I is now set, so the IRQ waits until the handler returns
    cpu.step();
    assert_eq!(cpu.pc(), 0x8000);
    cpu.step();
    assert_eq!(cpu.pc(), 0xA000);
}

// ========== IRQ ==========

#[test]
fn test_irq_masked_by_interrupt_disable() {
    let mut cpu = setup_cpu();
    cpu.assert_irq();

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.pc(), 0x8001);
    assert!(cpu.irq_pending());

    cpu.set_flag_i(false);
    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.pc(), 0xA000);
}

#[test]
fn test_irq_is_level_sensitive() {
    let mut cpu = setup_cpu();
    cpu.set_flag_i(false);
    cpu.assert_irq();

    cpu.step();
    assert_eq!(cpu.pc(), 0xA000);

    // RTI restores I clear; the line is still low, so the IRQ is taken again
    cpu.step();
    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.pc(), 0xA000);

    cpu.clear_irq();
    cpu.step();
    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_cli_then_irq() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x58); // CLI
    cpu.assert_irq();

    assert_eq!(cpu.step(), 2);
    assert!(!cpu.flag_i());
    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.pc(), 0xA000);
    assert_eq!(cpu.memory().read(0x01FD) & 0x14, 0x00);
}

// ========== Reset ==========

#[test]
fn test_nmi_held_across_reset_does_not_retrigger() {
    let mut cpu = setup_cpu();
    cpu.assert_nmi();
    assert_eq!(cpu.step(), 7);

    cpu.reset();
    assert!(!cpu.nmi_pending());

    // Line never went high: no new edge, the NOP at the reset vector runs
    cpu.assert_nmi();
    assert!(!cpu.nmi_pending());
    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.pc(), 0x8001);

    cpu.release_nmi();
    cpu.assert_nmi();
    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.pc(), 0x9000);
}

#[test]
fn test_reset_drops_unserviced_nmi() {
    let mut cpu = setup_cpu();
    cpu.assert_nmi();
    cpu.release_nmi();

    cpu.reset();
    assert!(!cpu.nmi_pending());
    assert_eq!(cpu.step(), 2);
}

#[test]
fn test_irq_held_across_reset_stays_pending() {
    let mut cpu = setup_cpu();
    cpu.assert_irq();

    cpu.reset();
    assert!(cpu.irq_pending());

    // Reset sets I, so the IRQ waits for CLI
    assert_eq!(cpu.step(), 2);
    cpu.set_flag_i(false);
    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.pc(), 0xA000);
}

// ========== Bus IRQ sources ==========

/// Flat RAM with one timer-like chip that holds IRQ low until acknowledged by
/// a write to its control register.
struct TimerBus {
    ram: Vec<u8>,
    irq_latched: bool,
}

impl TimerBus {
    const CONTROL_REG: u16 = 0xDC0D;

    fn new() -> Self {
        Self {
            ram: vec![0; 0x10000],
            irq_latched: false,
        }
    }
}

impl MemoryBus for TimerBus {
    fn read(&self, addr: u16) -> u8 {
        self.ram[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        if addr == Self::CONTROL_REG {
            self.irq_latched = false;
        }
        self.ram[addr as usize] = value;
    }

    fn irq_active(&self) -> bool {
        self.irq_latched
    }
}

fn setup_timer_cpu() -> CPU<TimerBus> {
    let mut bus = TimerBus::new();
    bus.write(0xFFFC, 0x00);
    bus.write(0xFFFD, 0x80);
    bus.write(0xFFFE, 0x00);
    bus.write(0xFFFF, 0xA0);
    // Handler: STA $DC0D; RTI
    bus.write(0xA000, 0x8D);
    bus.write(0xA001, 0x0D);
    bus.write(0xA002, 0xDC);
    bus.write(0xA003, 0x40);
    for addr in 0x8000..0x8010 {
        bus.write(addr, 0xEA);
    }
    CPU::new(bus)
}

#[test]
fn test_bus_irq_serviced() {
    let mut cpu = setup_timer_cpu();
    cpu.set_flag_i(false);
    cpu.memory_mut().irq_latched = true;
    assert!(cpu.irq_pending());

    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.pc(), 0xA000);
}

#[test]
fn test_bus_irq_acknowledged_by_handler() {
    let mut cpu = setup_timer_cpu();
    cpu.set_flag_i(false);
    cpu.step(); // NOP
    cpu.memory_mut().irq_latched = true;

    assert_eq!(cpu.step(), 7); // service
    assert_eq!(cpu.step(), 4); // STA $DC0D acknowledges
    assert!(!cpu.irq_pending());
    assert_eq!(cpu.step(), 6); // RTI
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.step(), 2); // NOP, no re-entry
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_bus_and_host_lines_are_shared() {
    let mut cpu = setup_timer_cpu();
    cpu.assert_irq();
    cpu.memory_mut().irq_latched = true;

    cpu.clear_irq();
    assert!(cpu.irq_pending());

    cpu.memory_mut().irq_latched = false;
    assert!(!cpu.irq_pending());
}
