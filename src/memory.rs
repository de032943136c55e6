//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the
//! host machine's memory map. The host owns bank switching, memory-mapped chips
//! and ROM images; the CPU only ever sees byte reads and writes.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6510 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Unmapped reads may return garbage
//! - Writes to ROM/unmapped regions may be ignored
//! - Simple signatures for WASM compatibility

use crate::Error;

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementations of this trait provide the memory backend for the CPU.
/// The CPU accesses all memory (RAM, ROM, I/O) through this abstraction.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads, and lets the
///   trace formatter peek at operands without disturbing the machine
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: 6510 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use lib6510::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic. If the address is unmapped,
    /// implementations may return garbage data (matching hardware behavior).
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. If the address is read-only or unmapped,
    /// implementations may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Checks if a bus-mapped peripheral is holding the IRQ line low.
    ///
    /// The IRQ line is **level-sensitive** and **shared**: the CPU ORs this
    /// with the line state set through [`CPU::assert_irq`](crate::CPU::assert_irq)
    /// at the start of every step.
    ///
    /// Returns `false` by default, for buses without interrupt sources.
    ///
    /// # Performance
    ///
    /// Called before EVERY instruction, so keep it O(1).
    fn irq_active(&self) -> bool {
        false
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are mapped to a single contiguous RAM
/// array. Used by the test suites and by hosts that run bare test ROMs.
///
/// # Examples
///
/// ```
/// use lib6510::{FlatMemory, MemoryBus, RESET_VECTOR, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.set_vector(RESET_VECTOR, 0x8000);
/// memory.load(0x8000, &[0xA9, 0x42]).unwrap(); // LDA #$42
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.step(), 2);
/// assert_eq!(cpu.a(), 0x42);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `image` into memory starting at `address`.
    ///
    /// Fails without writing anything if the image would run past $FFFF.
    pub fn load(&mut self, address: u16, image: &[u8]) -> Result<(), Error> {
        let start = address as usize;
        let end = start + image.len();
        if end > self.data.len() {
            return Err(Error::ImageOutOfRange {
                address,
                len: image.len(),
            });
        }
        self.data[start..end].copy_from_slice(image);
        Ok(())
    }

    /// Writes a little-endian vector (reset, NMI or IRQ) pointing at `target`.
    pub fn set_vector(&mut self, vector: u16, target: u16) {
        let [lo, hi] = target.to_le_bytes();
        self.write(vector, lo);
        self.write(vector.wrapping_add(1), hi);
    }

    /// Borrows the full 64KB image.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_load_image() {
        let mut mem = FlatMemory::new();
        mem.load(0xFFFE, &[0x01, 0x02]).unwrap();
        assert_eq!(mem.read(0xFFFE), 0x01);
        assert_eq!(mem.read(0xFFFF), 0x02);
    }

    #[test]
    fn test_load_image_out_of_range() {
        let mut mem = FlatMemory::new();
        let err = mem.load(0xFFFF, &[0x01, 0x02]).unwrap_err();
        assert_eq!(
            err,
            Error::ImageOutOfRange {
                address: 0xFFFF,
                len: 2
            }
        );
        // Nothing written on failure
        assert_eq!(mem.read(0xFFFF), 0x00);
    }

    #[test]
    fn test_set_vector() {
        let mut mem = FlatMemory::new();
        mem.set_vector(0xFFFC, 0xC0DE);
        assert_eq!(mem.read(0xFFFC), 0xDE);
        assert_eq!(mem.read(0xFFFD), 0xC0);
        assert!(!mem.irq_active());
    }
}
