//! WebAssembly bindings for the lib6510 emulator.
//!
//! This module provides JavaScript-callable interfaces to the 6510 CPU core,
//! enabling browser-based stepping, inspection and tracing of 6510 programs.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator6510;
