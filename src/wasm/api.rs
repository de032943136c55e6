//! WASM API for the 6510 emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection,
//! interrupt lines, tracing and disassembly.

use crate::{disassemble_iter, format_instruction, DisassemblyOptions, FlatMemory, MemoryBus, CPU};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// One disassembled instruction
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Assembly text, e.g. `LDA #$42` or `*SLO $10`
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6510 {
    cpu: CPU<FlatMemory>,
}

#[wasm_bindgen]
impl Emulator6510 {
    /// Create a 6510 over 64KB of zeroed RAM.
    ///
    /// `on_trace` is called with each trace line while tracing is on.
    #[wasm_bindgen(constructor)]
    pub fn new(on_trace: js_sys::Function) -> Self {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.set_trace_sink(Some(Box::new(move |line: &str| {
            let _ = on_trace.call1(&JsValue::NULL, &JsValue::from_str(line));
        })));
        Emulator6510 { cpu }
    }

    /// Execute one instruction or interrupt service; returns cycles used
    pub fn step(&mut self) -> u32 {
        self.cpu.step()
    }

    /// Execute at least `cycles` cycles and return actual cycles executed
    pub fn run_for_cycles(&mut self, cycles: u32) -> u32 {
        self.cpu.run_for_cycles(cycles as u64) as u32
    }

    /// Reset the CPU. Memory is left as it is.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    /// Packed P register
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    #[wasm_bindgen(getter)]
    pub fn jammed(&self) -> bool {
        self.cpu.is_jammed()
    }

    // Register setters

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Interrupt lines

    pub fn assert_nmi(&mut self) {
        self.cpu.assert_nmi();
    }

    pub fn release_nmi(&mut self) {
        self.cpu.release_nmi();
    }

    pub fn set_irq_line(&mut self, asserted: bool) {
        self.cpu.set_irq_line(asserted);
    }

    // Tracing

    pub fn set_trace(&mut self, enabled: bool) {
        self.cpu.set_trace(enabled);
    }

    /// Trace line for the instruction at PC
    pub fn trace_line(&self) -> String {
        self.cpu.trace_line()
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as usize) << 8;
        self.cpu.memory().as_slice()[start..start + 256].to_vec()
    }

    /// Copy a program into memory without touching the CPU
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) -> Result<(), JsError> {
        self.cpu
            .memory_mut()
            .load(start_addr, program)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Point the reset vector at `target` and reset
    pub fn boot(&mut self, target: u16) {
        self.cpu
            .memory_mut()
            .set_vector(crate::RESET_VECTOR, target);
        self.cpu.reset();
    }

    /// Disassemble memory starting at an address
    pub fn disassemble(&self, start_addr: u16, num_instructions: u32) -> Vec<JsValue> {
        let memory = &self.cpu.memory().as_slice()[start_addr as usize..];

        let opts = DisassemblyOptions {
            start_address: start_addr,
            ..DisassemblyOptions::default()
        };

        disassemble_iter(memory, opts)
            .take(num_instructions as usize)
            .map(|instr| {
                let mut bytes = vec![instr.opcode];
                if !instr.is_data() {
                    bytes.extend_from_slice(&instr.operand_bytes);
                }

                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    bytes,
                    text: format_instruction(&instr),
                })
            })
            .collect()
    }
}
