//! # CPU Configuration
//!
//! Knobs that differ between 6502 variants and between boot setups.

/// Where `reset()` takes the initial program counter from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetVector {
    /// Read the little-endian vector at 0xFFFC/0xFFFD, like the real part.
    #[default]
    FromMemory,

    /// Start at a fixed address without touching memory.
    ///
    /// Handy for harnesses that load a raw program and don't want to patch
    /// the vector bytes.
    Fixed(u16),
}

/// CPU construction options.
///
/// # Examples
///
/// ```
/// use cpu6502::{CpuConfig, ResetVector, CPU, FlatMemory};
///
/// let config = CpuConfig {
///     reset_vector: ResetVector::Fixed(0x0400),
///     ..CpuConfig::default()
/// };
///
/// let cpu = CPU::with_config(FlatMemory::new(), config);
/// assert_eq!(cpu.pc(), 0x0400);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    /// Source of the program counter at reset.
    pub reset_vector: ResetVector,

    /// Whether ADC/SBC honor the D flag.
    ///
    /// Disable for BCD-less derivatives such as the NES 2A03. The D flag
    /// itself can still be set and cleared.
    pub decimal_mode: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            reset_vector: ResetVector::FromMemory,
            decimal_mode: true,
        }
    }
}
