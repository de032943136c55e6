//! # 6510 CPU Emulator Core
//!
//! A cycle-counting NMOS 6510 CPU interpreter (the 6502 core of the
//! Commodore 64) designed for embedding in a full-machine emulator.
//!
//! The crate executes every one of the 256 opcodes, undocumented ones
//! included, services edge-triggered NMI and level-triggered IRQ, lets the
//! host hook ROM entry points with traps, and can emit a fixed-width trace
//! line per instruction for comparison against golden logs.
//!
//! ## Quick Start
//!
//! ```rust
//! use lib6510::{CPU, FlatMemory, MemoryBus, RESET_VECTOR};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.set_vector(RESET_VECTOR, 0x8000);
//!
//! // LDA #$42; STA $0200; JMP $8005
//! memory
//!     .load(0x8000, &[0xA9, 0x42, 0x8D, 0x00, 0x02, 0x4C, 0x05, 0x80])
//!     .unwrap();
//!
//! // Initialize CPU - it will load PC from the reset vector
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFF);
//!
//! // Run until the JMP-to-self loop: 2 + 4 + 3 cycles
//! assert_eq!(cpu.run_until_stalled(100), Some(9));
//! assert_eq!(cpu.memory().read(0x0200), 0x42);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from the machine's memory map via the `MemoryBus` trait
//! - **Determinism**: No OS dependencies, no global state, no threads
//! - **Cycle Counting**: Every step returns its cost so the host can clock peripherals in lockstep
//! - **Table-Driven Design**: All opcode metadata in a single source of truth
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the step loop
//! - `memory` - MemoryBus trait and FlatMemory
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing modes and effective-address resolution
//! - `status` - Processor status bit layout
//! - `interrupts` - NMI / IRQ lines and service sequence
//! - `traps` - Host hooks on PC addresses
//! - `trace` - Golden-log trace lines
//! - `disassembler` - Static disassembly of byte slices
//! - `config` - Construction options
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade. Trace lines are emitted at
//! `trace` level under the `lib6510::trace` target, interrupt service and
//! reset at `debug`, and a full trap table or a JAM opcode at `warn`. The
//! crate never installs a logger.

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod disassembler;
pub mod interrupts;
pub mod memory;
pub mod opcodes;
pub mod status;
pub mod trace;
pub mod traps;
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{resolve, AddressingMode, EffectiveAddress};
pub use config::{CpuConfig, DEFAULT_TRAP_CAPACITY};
pub use cpu::{TraceSink, CPU};
pub use disassembler::formatter::format_instruction;
pub use disassembler::{disassemble, disassemble_iter, Disassembly, DisassemblyOptions, Instruction};
pub use interrupts::{Interrupt, INTERRUPT_CYCLES, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use traps::{TrapHandler, TrapTable};

/// Errors reported outside the execution path.
///
/// Stepping the CPU never fails: every opcode has defined behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A memory image would run past address $FFFF.
    ImageOutOfRange {
        /// Requested load address
        address: u16,
        /// Image length in bytes
        len: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::ImageOutOfRange { address, len } => write!(
                f,
                "{} byte image at ${:04X} runs past the end of the address space",
                len, address
            ),
        }
    }
}

impl std::error::Error for Error {}
