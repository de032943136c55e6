//! # Interrupt Controller
//!
//! The 6510 has two external interrupt inputs:
//!
//! - **NMI** is **edge-triggered**. A low-to-high transition of the (logical)
//!   line latches one pending NMI. Holding the line asserted does not trigger
//!   again; the line has to be released first.
//! - **IRQ** is **level-sensitive**. It is re-sampled at the start of every
//!   step from the host-driven line and from [`MemoryBus::irq_active`], and
//!   only serviced while the I flag is clear.
//!
//! NMI always wins over a simultaneously pending IRQ and ignores the I flag.
//!
//! ## Service Sequence
//!
//! Servicing either interrupt takes one whole step:
//!
//! 1. Push PC (high byte, then low byte)
//! 2. Push P with the reserved bit set and the B bit clear
//! 3. Set the I flag
//! 4. Load PC from the vector ($FFFA for NMI, $FFFE for IRQ)
//!
//! **Total: 7 cycles.** No instruction executes in that step.

use crate::addressing::read_word;
use crate::status;
use crate::{MemoryBus, CPU};

/// NMI vector location.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector location.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector location.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles consumed by an interrupt service step.
pub const INTERRUPT_CYCLES: u32 = 7;

/// Hardware interrupt kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    /// Non-maskable interrupt.
    Nmi,
    /// Maskable interrupt request.
    Irq,
}

impl Interrupt {
    /// Vector address the service sequence reads.
    pub fn vector(self) -> u16 {
        match self {
            Interrupt::Nmi => NMI_VECTOR,
            Interrupt::Irq => IRQ_VECTOR,
        }
    }
}

/// Interrupt line and latch state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct InterruptLines {
    /// NMI serviced on the next step.
    pub(crate) nmi_pending: bool,
    /// Set on the rising edge, cleared only when the line goes low again.
    pub(crate) nmi_edge_latched: bool,
    /// Host-driven IRQ line level.
    pub(crate) irq_line: bool,
    /// IRQ line sampled at the start of the current step.
    pub(crate) irq_pending: bool,
}

impl InterruptLines {
    pub(crate) fn set_nmi_line(&mut self, asserted: bool) {
        if asserted {
            if !self.nmi_edge_latched {
                self.nmi_pending = true;
                self.nmi_edge_latched = true;
            }
        } else {
            self.nmi_edge_latched = false;
        }
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Drives the NMI line to `asserted`.
    ///
    /// A pending NMI is latched only on the transition from released to
    /// asserted.
    pub fn set_nmi_line(&mut self, asserted: bool) {
        self.interrupts.set_nmi_line(asserted);
    }

    /// Asserts the NMI line (RESTORE key, CIA2 timer).
    ///
    /// # Examples
    ///
    /// ```
    /// use lib6510::{FlatMemory, MemoryBus, CPU, NMI_VECTOR, RESET_VECTOR};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.set_vector(RESET_VECTOR, 0x8000);
    /// memory.set_vector(NMI_VECTOR, 0x9000);
    /// let mut cpu = CPU::new(memory);
    ///
    /// cpu.assert_nmi();
    /// cpu.assert_nmi(); // still asserted: no second edge
    /// assert_eq!(cpu.step(), 7);
    /// assert_eq!(cpu.pc(), 0x9000);
    /// assert!(!cpu.nmi_pending());
    /// ```
    pub fn assert_nmi(&mut self) {
        self.set_nmi_line(true);
    }

    /// Releases the NMI line, re-arming the edge detector.
    pub fn release_nmi(&mut self) {
        self.set_nmi_line(false);
    }

    /// Drives the host side of the shared IRQ line.
    pub fn set_irq_line(&mut self, asserted: bool) {
        self.interrupts.irq_line = asserted;
    }

    /// Asserts the IRQ line. It stays asserted until [`clear_irq`](Self::clear_irq).
    pub fn assert_irq(&mut self) {
        self.set_irq_line(true);
    }

    /// Releases the IRQ line.
    pub fn clear_irq(&mut self) {
        self.set_irq_line(false);
    }

    /// True if an NMI edge has been latched and not yet serviced.
    pub fn nmi_pending(&self) -> bool {
        self.interrupts.nmi_pending
    }

    /// True if the IRQ line is currently asserted, by the host or the bus.
    pub fn irq_pending(&self) -> bool {
        self.interrupts.irq_line || self.memory.irq_active()
    }

    /// Samples the lines and picks the interrupt to service this step, if any.
    pub(crate) fn poll_interrupt(&mut self) -> Option<Interrupt> {
        self.interrupts.irq_pending = self.irq_pending();
        if self.interrupts.nmi_pending {
            Some(Interrupt::Nmi)
        } else if self.interrupts.irq_pending && !self.flag_i {
            Some(Interrupt::Irq)
        } else {
            None
        }
    }

    /// Runs the 7-cycle service sequence for `kind`.
    pub(crate) fn service_interrupt(&mut self, kind: Interrupt) -> u32 {
        let return_address = self.pc;
        self.push_word(return_address);
        self.push(status::pushed(self.status(), false));
        self.flag_i = true;
        self.pc = read_word(&self.memory, kind.vector());
        if kind == Interrupt::Nmi {
            self.interrupts.nmi_pending = false;
        }
        self.jammed = false;

        log::debug!(
            "{:?} serviced: return ${:04X}, handler ${:04X}",
            kind,
            return_address,
            self.pc
        );

        INTERRUPT_CYCLES
    }
}
