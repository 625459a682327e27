//! # Memory Bus Abstraction
//!
//! The CPU reaches memory only through the `MemoryBus` trait. The address type
//! is `u16`, so every address a 6502 can drive is in range and there is no bus
//! error to report.
//!
//! Two implementations ship with the crate:
//!
//! - `FlatMemory`: 64KB of RAM, the usual test harness backing
//! - `MappedMemory` (see `devices`): RAM/ROM devices stitched into a full map

/// Byte-wide read/write access to the 64KB address space.
///
/// - `read(&self)` must not change observable state
/// - `write(&mut self)` is a total overwrite of one byte
/// - Neither may panic for any `u16` address
///
/// # Implementing Custom Memory
///
/// ```
/// use cpu6502::MemoryBus;
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
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads the byte at `addr`.
    fn read(&self, addr: u16) -> u8;

    /// Stores `value` at `addr`.
    ///
    /// Read-only regions may drop the write.
    fn write(&mut self, addr: u16, value: u8);
}

/// Number of addressable bytes on the 6502 bus.
pub const ADDRESS_SPACE: usize = 0x1_0000;

/// Flat 64KB RAM covering the whole address space.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.load(0x8000, &[0xA9, 0x01]); // LDA #$01
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    data: Box<[u8; ADDRESS_SPACE]>,
}

impl FlatMemory {
    /// Creates zero-filled memory.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; ADDRESS_SPACE]),
        }
    }

    /// Copies `bytes` into memory starting at `addr`.
    ///
    /// Images that run past 0xFFFF wrap around to 0x0000, as the address bus does.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let mut target = addr;
        for &byte in bytes {
            self.data[target as usize] = byte;
            target = target.wrapping_add(1);
        }
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
