//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6510 processor state and
//! the step loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, D, I, Z, C (individual bool fields; see [`status`](crate::status))
//! - **Cycle counter**: u64 monotonically increasing cycle count
//! - **Interrupt lines**, the **trap table** and the **trace** switch
//!
//! ## Execution Model
//!
//! Each call to [`CPU::step`] does exactly one of:
//! 1. Service a pending NMI (7 cycles)
//! 2. Service a pending, unmasked IRQ (7 cycles)
//! 3. Fire the trap at PC (if any), then fetch, decode and execute one instruction
//!
//! and returns the cycles consumed, so the host can clock its peripherals by
//! the same amount.

use crate::addressing::read_word;
use crate::config::CpuConfig;
use crate::instructions;
use crate::interrupts::{InterruptLines, RESET_VECTOR};
use crate::status::{self, FLAG_C, FLAG_D, FLAG_I, FLAG_N, FLAG_RESERVED, FLAG_V, FLAG_Z};
use crate::traps::TrapTable;
use crate::{MemoryBus, OPCODE_TABLE};

/// Sink for formatted trace lines.
pub type TraceSink = Box<dyn FnMut(&str)>;

/// 6510 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags, program counter,
/// stack pointer, and cycle counter. It is generic over the memory implementation via the
/// `MemoryBus` trait, and owns the bus for its whole lifetime.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use lib6510::{CPU, FlatMemory, MemoryBus, RESET_VECTOR};
///
/// let mut memory = FlatMemory::new();
/// memory.set_vector(RESET_VECTOR, 0x8000);
///
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert_eq!(cpu.status(), 0x24); // reserved | I
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Negative flag (set if bit 7 of result is 1)
    pub(crate) flag_n: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Decimal mode flag (enables BCD arithmetic)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag (blocks IRQ when set)
    pub(crate) flag_i: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Carry flag (set on unsigned overflow/underflow)
    pub(crate) flag_c: bool,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Penalty cycles accrued by the current instruction
    pub(crate) extra_cycles: u32,

    /// Last address resolution crossed a page
    pub(crate) page_crossed: bool,

    /// Set by a JAM opcode, cleared by reset or an interrupt
    pub(crate) jammed: bool,

    pub(crate) interrupts: InterruptLines,

    pub(crate) traps: TrapTable<M>,

    trace: bool,

    trace_sink: Option<TraceSink>,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and default configuration.
    ///
    /// The CPU comes up in its power-on state:
    /// - PC loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - SP = 0xFF
    /// - P = reserved | interrupt-disable (0x24)
    /// - A, X, Y zeroed, cycle counter 0
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a new CPU with explicit options.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0xFF,
            flag_n: false,
            flag_v: false,
            flag_d: false,
            flag_i: true,
            flag_z: false,
            flag_c: false,
            cycles: 0,
            extra_cycles: 0,
            page_crossed: false,
            jammed: false,
            interrupts: InterruptLines::default(),
            traps: TrapTable::with_capacity(config.trap_capacity),
            trace: config.trace,
            trace_sink: None,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Resets the processor.
    ///
    /// Reloads PC from the reset vector, sets A = X = Y = 0, SP = 0xFF,
    /// P = 0x24, zeroes the cycle counter and drops a latched NMI and the
    /// sampled IRQ. The external lines keep their level: an NMI held across
    /// reset needs a release before it can latch again, and a held IRQ is
    /// still pending afterwards. Memory is never touched. Traps and the trace
    /// switch survive.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFF;
        self.set_status(status::POWER_ON_STATUS);
        self.pc = read_word(&self.memory, RESET_VECTOR);
        self.cycles = 0;
        self.extra_cycles = 0;
        self.page_crossed = false;
        self.jammed = false;
        self.interrupts.nmi_pending = false;
        self.interrupts.irq_pending = false;

        log::debug!("reset: PC=${:04X}", self.pc);
    }

    /// Executes one step and returns the cycles it consumed.
    ///
    /// A step is either one interrupt service (7 cycles) or one instruction
    /// (base cycles plus page-crossing/branch penalties).
    ///
    /// # Examples
    ///
    /// ```
    /// use lib6510::{CPU, FlatMemory, MemoryBus, RESET_VECTOR};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.set_vector(RESET_VECTOR, 0x8000);
    /// mem.write(0x8000, 0xEA); // NOP
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.step(), 2);
    /// assert_eq!(cpu.pc(), 0x8001);
    /// assert_eq!(cpu.cycles(), 2);
    /// ```
    pub fn step(&mut self) -> u32 {
        if let Some(kind) = self.poll_interrupt() {
            let cycles = self.service_interrupt(kind);
            self.cycles += cycles as u64;
            return cycles;
        }

        self.fire_trap();

        self.extra_cycles = 0;
        self.page_crossed = false;

        let opcode = self.memory.read(self.pc);
        let metadata = &OPCODE_TABLE[opcode as usize];

        if self.trace {
            self.emit_trace();
        }

        instructions::execute(self, metadata);

        let cycles = metadata.base_cycles as u32 + self.extra_cycles;
        self.cycles += cycles as u64;
        cycles
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes steps until the cycle budget is exhausted and returns the
    /// actual number of cycles consumed (may be slightly more than the budget
    /// due to instruction granularity).
    ///
    /// # Examples
    ///
    /// ```
    /// use lib6510::{CPU, FlatMemory, MemoryBus, RESET_VECTOR};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.set_vector(RESET_VECTOR, 0x8000);
    /// for addr in 0x8000..0x8010 {
    ///     mem.write(addr, 0xEA); // NOP, 2 cycles each
    /// }
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.run_for_cycles(9), 10);
    /// assert_eq!(cpu.pc(), 0x8005);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles + cycle_budget;

        while self.cycles < target_cycles {
            self.step();
        }

        self.cycles - start_cycles
    }

    /// Steps until a step leaves PC where it was, i.e. the program has settled
    /// into a `JMP *` style trap loop or hit a JAM opcode.
    ///
    /// Returns the cycles consumed by the whole run, including the final
    /// stalled step, or `None` if `max_steps` steps ran without stalling.
    pub fn run_until_stalled(&mut self, max_steps: u64) -> Option<u64> {
        let start_cycles = self.cycles;
        for _ in 0..max_steps {
            let pc = self.pc;
            self.step();
            if self.pc == pc {
                return Some(self.cycles - start_cycles);
            }
        }
        None
    }

    /// Turns per-instruction tracing on or off.
    ///
    /// While on, every executed instruction is formatted with
    /// [`trace_line`](Self::trace_line) before it runs, logged at trace level
    /// under the `lib6510::trace` target and passed to the trace sink.
    pub fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    /// True if tracing is on.
    pub fn trace_enabled(&self) -> bool {
        self.trace
    }

    /// Installs (or removes) a callback receiving each trace line.
    pub fn set_trace_sink(&mut self, sink: Option<TraceSink>) {
        self.trace_sink = sink;
    }

    fn emit_trace(&mut self) {
        let line = self.trace_line();
        log::trace!(target: "lib6510::trace", "{}", line);
        if let Some(sink) = self.trace_sink.as_mut() {
            sink(&line);
        }
    }

    // ========== Stack ==========

    /// Pushes a byte to 0x0100 | SP and decrements SP (wraps from 0x00 to 0xFF).
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(0x0100 | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP and reads the byte at 0x0100 | SP.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(0x0100 | self.sp as u16)
    }

    /// Pushes a word, high byte first.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push(hi);
        self.push(lo);
    }

    /// Pulls a word, low byte first.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull();
        let hi = self.pull();
        u16::from_le_bytes([lo, hi])
    }

    /// Updates N and Z from a result byte.
    pub(crate) fn set_nz(&mut self, value: u8) {
        (self.flag_n, self.flag_z) = status::nz(value);
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (reserved, always 1)
    /// - Bit 4: B (only exists in pushed copies, always 0 here)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    pub fn status(&self) -> u8 {
        let mut p = FLAG_RESERVED;
        for (set, bit) in [
            (self.flag_n, FLAG_N),
            (self.flag_v, FLAG_V),
            (self.flag_d, FLAG_D),
            (self.flag_i, FLAG_I),
            (self.flag_z, FLAG_Z),
            (self.flag_c, FLAG_C),
        ] {
            if set {
                p |= bit;
            }
        }
        p
    }

    /// Returns the total number of CPU cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// True once a JAM opcode has halted the instruction stream.
    pub fn is_jammed(&self) -> bool {
        self.jammed
    }

    /// Borrows the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutably borrows the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Loads all flags from a packed P byte. Bits 4 and 5 are ignored.
    pub fn set_status(&mut self, value: u8) {
        self.flag_n = value & FLAG_N != 0;
        self.flag_v = value & FLAG_V != 0;
        self.flag_d = value & FLAG_D != 0;
        self.flag_i = value & FLAG_I != 0;
        self.flag_z = value & FLAG_Z != 0;
        self.flag_c = value & FLAG_C != 0;
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }
}
