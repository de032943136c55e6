//! # Trap Table
//!
//! Host-registered hooks that fire when PC reaches a given address, before the
//! instruction there is fetched. Test harnesses use them to intercept ROM entry
//! points (character output, load/save) without patching ROM contents.
//!
//! The table has a fixed capacity chosen at construction. Registering an
//! address that is already present replaces its handler; registering a new
//! address when the table is full fails.

use crate::{MemoryBus, CPU};

/// Trap callback. Receives the CPU and the address that triggered it, and may
/// change any CPU state, including PC.
pub type TrapHandler<M> = Box<dyn FnMut(&mut CPU<M>, u16)>;

struct TrapEntry<M: MemoryBus> {
    address: u16,
    // None while the handler is running
    handler: Option<TrapHandler<M>>,
}

/// Bounded, insertion-ordered table of `(address, handler)` entries.
pub struct TrapTable<M: MemoryBus> {
    entries: Vec<TrapEntry<M>>,
    capacity: usize,
}

impl<M: MemoryBus> TrapTable<M> {
    /// Creates an empty table holding at most `capacity` addresses.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Adds or replaces the handler for `address`.
    ///
    /// Returns `false` if `address` is new and the table is full.
    pub fn register(&mut self, address: u16, handler: TrapHandler<M>) -> bool {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.address == address) {
            entry.handler = Some(handler);
            return true;
        }
        if self.entries.len() >= self.capacity {
            log::warn!(
                "trap table full ({} entries), rejecting ${:04X}",
                self.capacity,
                address
            );
            return false;
        }
        self.entries.push(TrapEntry {
            address,
            handler: Some(handler),
        });
        true
    }

    /// Removes the entry for `address`. Returns `false` if there was none.
    pub fn remove(&mut self, address: u16) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.address != address);
        self.entries.len() != before
    }

    /// True if a trap is registered at `address`.
    pub fn contains(&self, address: u16) -> bool {
        self.entries.iter().any(|e| e.address == address)
    }

    /// Number of registered addresses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no traps are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of addresses.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn take(&mut self, address: u16) -> Option<TrapHandler<M>> {
        self.entries
            .iter_mut()
            .find(|e| e.address == address)
            .and_then(|e| e.handler.take())
    }

    fn restore(&mut self, address: u16, handler: TrapHandler<M>) {
        // The handler may have removed or replaced its own entry
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.address == address && e.handler.is_none())
        {
            entry.handler = Some(handler);
        }
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Registers `handler` to run whenever PC reaches `address`.
    ///
    /// Returns `false` if the table is full and `address` is not already
    /// registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib6510::{FlatMemory, MemoryBus, RESET_VECTOR, CPU};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.set_vector(RESET_VECTOR, 0x8000);
    /// memory.write(0x8000, 0x00); // BRK, never reached
    /// memory.write(0x9000, 0xEA); // NOP
    /// let mut cpu = CPU::new(memory);
    ///
    /// // Redirect to $9000; the same step then executes the NOP there
    /// let redirect = |cpu: &mut CPU<FlatMemory>, _addr: u16| cpu.set_pc(0x9000);
    /// assert!(cpu.register_trap(0x8000, Box::new(redirect)));
    /// assert_eq!(cpu.step(), 2);
    /// assert_eq!(cpu.pc(), 0x9001);
    /// ```
    pub fn register_trap(&mut self, address: u16, handler: TrapHandler<M>) -> bool {
        self.traps.register(address, handler)
    }

    /// Removes the trap at `address`. Returns `false` if there was none.
    pub fn remove_trap(&mut self, address: u16) -> bool {
        self.traps.remove(address)
    }

    /// Number of registered traps.
    pub fn trap_count(&self) -> usize {
        self.traps.len()
    }

    /// Fixed capacity of the trap table.
    pub fn trap_capacity(&self) -> usize {
        self.traps.capacity()
    }

    /// Runs the trap registered at the current PC, if any.
    pub(crate) fn fire_trap(&mut self) {
        if self.traps.is_empty() {
            return;
        }
        let address = self.pc;
        if let Some(mut handler) = self.traps.take(address) {
            handler(self, address);
            self.traps.restore(address, handler);
        }
    }
}
