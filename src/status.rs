//! # Processor Status Register
//!
//! Bit layout of the P register (NV-BDIZC) and the packing rules used when P
//! travels to and from the stack.
//!
//! The CPU keeps each flag as its own `bool` so instruction handlers can read
//! and write them directly. P only exists as a byte when it is pushed (PHP,
//! BRK, interrupts), pulled (PLP, RTI) or shown to the host.
//!
//! Two bits never exist as real latches:
//! - **Reserved (bit 5)** always reads back as 1.
//! - **Break (bit 4)** is only present in pushed copies. PHP and BRK push it
//!   set, a hardware IRQ or NMI pushes it clear, and PLP/RTI discard it.

/// Carry (bit 0).
pub const FLAG_C: u8 = 0b0000_0001;

/// Zero (bit 1).
pub const FLAG_Z: u8 = 0b0000_0010;

/// Interrupt disable (bit 2).
pub const FLAG_I: u8 = 0b0000_0100;

/// Decimal mode (bit 3).
pub const FLAG_D: u8 = 0b0000_1000;

/// Break (bit 4). Pushed copies only.
pub const FLAG_B: u8 = 0b0001_0000;

/// Reserved (bit 5). Always 1.
pub const FLAG_RESERVED: u8 = 0b0010_0000;

/// Overflow (bit 6).
pub const FLAG_V: u8 = 0b0100_0000;

/// Negative (bit 7).
pub const FLAG_N: u8 = 0b1000_0000;

/// P at power-on and after reset: reserved | interrupt-disable.
pub const POWER_ON_STATUS: u8 = FLAG_RESERVED | FLAG_I;

/// Returns the N and Z flags implied by a result byte.
#[inline]
pub(crate) fn nz(value: u8) -> (bool, bool) {
    (value & 0x80 != 0, value == 0)
}

/// The copy of P written to the stack.
///
/// `brk` is true for PHP and BRK, false for hardware IRQ/NMI.
#[inline]
pub(crate) fn pushed(status: u8, brk: bool) -> u8 {
    let status = status | FLAG_RESERVED;
    if brk {
        status | FLAG_B
    } else {
        status & !FLAG_B
    }
}

/// Normalises a byte pulled from the stack into a live P value.
#[inline]
pub(crate) fn pulled(value: u8) -> u8 {
    (value | FLAG_RESERVED) & !FLAG_B
}
