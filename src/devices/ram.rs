//! RAM device implementation.

use super::Device;

/// Readable and writable storage, zero-filled at creation.
///
/// # Examples
///
/// ```rust
/// use cpu6502::{RamDevice, Device};
///
/// let mut ram = RamDevice::new(1024);
/// ram.write(0x42, 0xAA);
/// assert_eq!(ram.read(0x42), 0xAA);
/// ```
pub struct RamDevice {
    data: Vec<u8>,
}

impl RamDevice {
    /// Creates `size` bytes of zeroed RAM.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size],
        }
    }

    /// Copies `bytes` into RAM starting at `offset`.
    ///
    /// Bytes that would land past the end of the device are dropped.
    ///
    /// ```rust
    /// use cpu6502::{RamDevice, Device};
    ///
    /// let mut ram = RamDevice::new(4);
    /// ram.load_bytes(2, &[0x01, 0x02, 0x03]);
    ///
    /// assert_eq!(ram.read(2), 0x01);
    /// assert_eq!(ram.read(3), 0x02);
    /// ```
    pub fn load_bytes(&mut self, offset: u16, bytes: &[u8]) {
        let start = (offset as usize).min(self.data.len());
        let end = (start + bytes.len()).min(self.data.len());
        self.data[start..end].copy_from_slice(&bytes[..end - start]);
    }
}

impl Device for RamDevice {
    fn read(&self, offset: u16) -> u8 {
        self.data[offset as usize]
    }

    fn write(&mut self, offset: u16, value: u8) {
        self.data[offset as usize] = value;
    }

    fn size(&self) -> usize {
        self.data.len()
    }
}
