//! CPU construction options.

/// Default number of trap slots.
pub const DEFAULT_TRAP_CAPACITY: usize = 32;

/// Options applied when a [`CPU`](crate::CPU) is built with
/// [`CPU::with_config`](crate::CPU::with_config).
///
/// # Examples
///
/// ```
/// use lib6510::{CpuConfig, FlatMemory, CPU};
///
/// let config = CpuConfig {
///     trap_capacity: 4,
///     ..CpuConfig::default()
/// };
/// let cpu = CPU::with_config(FlatMemory::new(), config);
/// assert_eq!(cpu.trap_capacity(), 4);
/// assert!(!cpu.trace_enabled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    /// Fixed capacity of the trap table. Registering a new address beyond
    /// this fails.
    pub trap_capacity: usize,

    /// Start with instruction tracing switched on.
    pub trace: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            trap_capacity: DEFAULT_TRAP_CAPACITY,
            trace: false,
        }
    }
}
