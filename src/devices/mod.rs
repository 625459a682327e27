//! Memory map assembled from RAM and ROM devices.
//!
//! The CPU core assumes every one of the 65536 addresses is backed by
//! something. `MemoryMapBuilder` checks that once, when the map is built, so
//! the resulting `MappedMemory` never has to decide what an unbacked access
//! means.
//!
//! # Example
//!
//! ```rust
//! use cpu6502::{CPU, MemoryMapBuilder, RamDevice, RomDevice};
//!
//! let mut rom_data = vec![0xEA; 0x4000];
//! rom_data[0x3FFC] = 0x00; // reset vector low
//! rom_data[0x3FFD] = 0xC0; // reset vector high -> 0xC000
//!
//! let memory = MemoryMapBuilder::new()
//!     .map(0x0000, Box::new(RamDevice::new(0xC000)))?
//!     .map(0xC000, Box::new(RomDevice::new(rom_data)))?
//!     .build()?;
//!
//! let cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0xC000);
//! # Ok::<(), cpu6502::MemoryMapError>(())
//! ```

use crate::memory::{MemoryBus, ADDRESS_SPACE};

pub mod ram;
pub mod rom;

pub use ram::RamDevice;
pub use rom::RomDevice;

/// A bus-attached block of storage.
///
/// The map hands devices an offset relative to their base address, so a
/// device does not know where it is mapped.
///
/// ```rust
/// use cpu6502::Device;
///
/// struct Latch(u8);
///
/// impl Device for Latch {
///     fn read(&self, _offset: u16) -> u8 {
///         self.0
///     }
///
///     fn write(&mut self, _offset: u16, value: u8) {
///         self.0 = value;
///     }
///
///     fn size(&self) -> usize {
///         1
///     }
/// }
/// ```
pub trait Device {
    /// Reads the byte at `offset` (0 to size-1).
    fn read(&self, offset: u16) -> u8;

    /// Writes `value` at `offset` (0 to size-1).
    fn write(&mut self, offset: u16, value: u8);

    /// Number of addresses the device occupies.
    fn size(&self) -> usize;
}

/// Configuration errors found while assembling a memory map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoryMapError {
    /// The new device shares addresses with one already mapped.
    #[error(
        "device at 0x{base:04X} ({size} bytes) overlaps device at 0x{existing_base:04X} ({existing_size} bytes)"
    )]
    Overlap {
        base: u16,
        size: usize,
        existing_base: u16,
        existing_size: usize,
    },

    /// The device would extend past 0xFFFF.
    #[error("device at 0x{base:04X} ({size} bytes) runs past the end of the address space")]
    OutOfRange { base: u16, size: usize },

    /// The device occupies no addresses.
    #[error("device at 0x{base:04X} has zero size")]
    Empty { base: u16 },

    /// Some addresses are not backed by any device.
    #[error("no device mapped at 0x{first_gap:04X}")]
    Unmapped { first_gap: u16 },
}

struct DeviceMapping {
    base: u16,
    device: Box<dyn Device>,
}

impl DeviceMapping {
    fn start(&self) -> usize {
        self.base as usize
    }

    fn end(&self) -> usize {
        self.start() + self.device.size()
    }
}

/// Collects devices and validates that they tile the address space.
#[derive(Default)]
pub struct MemoryMapBuilder {
    devices: Vec<DeviceMapping>,
}

impl MemoryMapBuilder {
    /// Starts an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `device` at `base`.
    ///
    /// Fails if the device is empty, runs past 0xFFFF, or overlaps a device
    /// that is already mapped.
    pub fn map(mut self, base: u16, device: Box<dyn Device>) -> Result<Self, MemoryMapError> {
        let size = device.size();
        if size == 0 {
            return Err(MemoryMapError::Empty { base });
        }

        let start = base as usize;
        let end = start + size;
        if end > ADDRESS_SPACE {
            return Err(MemoryMapError::OutOfRange { base, size });
        }

        if let Some(existing) = self
            .devices
            .iter()
            .find(|m| start < m.end() && end > m.start())
        {
            return Err(MemoryMapError::Overlap {
                base,
                size,
                existing_base: existing.base,
                existing_size: existing.device.size(),
            });
        }

        self.devices.push(DeviceMapping { base, device });
        Ok(self)
    }

    /// Finishes the map, failing if any address is left without a device.
    pub fn build(mut self) -> Result<MappedMemory, MemoryMapError> {
        self.devices.sort_by_key(|m| m.base);

        let mut next = 0usize;
        for mapping in &self.devices {
            if mapping.start() > next {
                return Err(MemoryMapError::Unmapped {
                    first_gap: next as u16,
                });
            }
            next = mapping.end();
        }
        if next < ADDRESS_SPACE {
            return Err(MemoryMapError::Unmapped {
                first_gap: next as u16,
            });
        }

        log::debug!("memory map built with {} devices", self.devices.len());
        Ok(MappedMemory {
            devices: self.devices,
        })
    }
}

/// A fully populated memory map. Built by `MemoryMapBuilder`.
pub struct MappedMemory {
    // Sorted by base, disjoint, covering 0x0000-0xFFFF.
    devices: Vec<DeviceMapping>,
}

/// Value returned by a read no device answers. Unreachable for a built map.
const OPEN_BUS: u8 = 0xFF;

impl MappedMemory {
    fn index_of(&self, addr: u16) -> Option<usize> {
        self.devices
            .partition_point(|m| m.base <= addr)
            .checked_sub(1)
    }
}

impl MemoryBus for MappedMemory {
    fn read(&self, addr: u16) -> u8 {
        self.index_of(addr).map_or(OPEN_BUS, |i| {
            let mapping = &self.devices[i];
            mapping.device.read(addr - mapping.base)
        })
    }

    fn write(&mut self, addr: u16, value: u8) {
        if let Some(i) = self.index_of(addr) {
            let mapping = &mut self.devices[i];
            mapping.device.write(addr - mapping.base, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_device_covers_everything() {
        let mut memory = MemoryMapBuilder::new()
            .map(0x0000, Box::new(RamDevice::new(ADDRESS_SPACE)))
            .unwrap()
            .build()
            .unwrap();

        memory.write(0x0000, 0x01);
        memory.write(0xFFFF, 0xFF);
        assert_eq!(memory.read(0x0000), 0x01);
        assert_eq!(memory.read(0xFFFF), 0xFF);
    }

    #[test]
    fn test_routes_by_address() {
        let mut memory = MemoryMapBuilder::new()
            .map(0x8000, Box::new(RomDevice::new(vec![0xEA; 0x8000])))
            .unwrap()
            .map(0x0000, Box::new(RamDevice::new(0x8000)))
            .unwrap()
            .build()
            .unwrap();

        memory.write(0x7FFF, 0x42);
        memory.write(0x8000, 0x42);

        assert_eq!(memory.read(0x7FFF), 0x42);
        assert_eq!(memory.read(0x8000), 0xEA);
    }

    #[test]
    fn test_overlap_rejected() {
        let result = MemoryMapBuilder::new()
            .map(0x1000, Box::new(RamDevice::new(0x100)))
            .unwrap()
            .map(0x1080, Box::new(RamDevice::new(0x100)));

        assert!(matches!(
            result,
            Err(MemoryMapError::Overlap {
                base: 0x1080,
                existing_base: 0x1000,
                ..
            })
        ));
    }

    #[test]
    fn test_adjacent_devices_accepted() {
        let result = MemoryMapBuilder::new()
            .map(0x0F00, Box::new(RamDevice::new(0x100)))
            .unwrap()
            .map(0x1000, Box::new(RamDevice::new(0x100)));

        assert!(result.is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let result = MemoryMapBuilder::new().map(0xFF00, Box::new(RamDevice::new(0x200)));
        assert!(matches!(
            result,
            Err(MemoryMapError::OutOfRange { base: 0xFF00, size: 0x200 })
        ));
    }

    #[test]
    fn test_empty_device_rejected() {
        let result = MemoryMapBuilder::new().map(0x2000, Box::new(RomDevice::new(Vec::new())));
        assert!(matches!(result, Err(MemoryMapError::Empty { base: 0x2000 })));
    }

    #[test]
    fn test_gap_reported_at_build() {
        let result = MemoryMapBuilder::new()
            .map(0x0000, Box::new(RamDevice::new(0x4000)))
            .unwrap()
            .map(0x8000, Box::new(RamDevice::new(0x8000)))
            .unwrap()
            .build();

        assert!(matches!(
            result,
            Err(MemoryMapError::Unmapped { first_gap: 0x4000 })
        ));
    }

    #[test]
    fn test_short_map_reported_at_build() {
        let result = MemoryMapBuilder::new()
            .map(0x0000, Box::new(RamDevice::new(0x8000)))
            .unwrap()
            .build();

        assert!(matches!(
            result,
            Err(MemoryMapError::Unmapped { first_gap: 0x8000 })
        ));
    }
}
