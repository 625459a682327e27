//! ROM device implementation.

use super::Device;

/// Read-only storage. Writes are dropped, the way a mask ROM ignores the bus.
///
/// # Examples
///
/// ```rust
/// use cpu6502::{RomDevice, Device};
///
/// let mut rom = RomDevice::new(vec![0xEA, 0xEA, 0xEA]);
///
/// rom.write(0, 0xFF);
/// assert_eq!(rom.read(0), 0xEA);
/// ```
pub struct RomDevice {
    data: Vec<u8>,
}

impl RomDevice {
    /// Wraps `data` as ROM contents.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl Device for RomDevice {
    fn read(&self, offset: u16) -> u8 {
        self.data[offset as usize]
    }

    fn write(&mut self, _offset: u16, _value: u8) {}

    fn size(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rom_read() {
        let rom = RomDevice::new(vec![0x01, 0x02, 0x03, 0x04]);

        assert_eq!(rom.size(), 4);
        assert_eq!(rom.read(0), 0x01);
        assert_eq!(rom.read(3), 0x04);
    }

    #[test]
    fn test_rom_write_ignored() {
        let mut rom = RomDevice::new(vec![0xAA; 256]);

        rom.write(0, 0xFF);
        rom.write(100, 0xFF);

        assert_eq!(rom.read(0), 0xAA);
        assert_eq!(rom.read(100), 0xAA);
    }
}
