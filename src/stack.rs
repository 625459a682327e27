//! # Stack Discipline
//!
//! The 6502 stack lives in page one (0x0100-0x01FF) and grows downward. The
//! stack pointer is only the low byte of the address; it wraps from 0x00 to
//! 0xFF without ever leaving the page.
//!
//! - Push: write at `0x0100 | SP`, then decrement SP
//! - Pop: increment SP, then read at `0x0100 | SP`
//!
//! Each byte moved costs one bus cycle. Words go high byte first on push and
//! come back low byte first on pop, which is the order JSR/RTS and BRK/RTI
//! depend on.

use crate::{MemoryBus, CPU};

/// Base address of the hardware stack page.
pub const STACK_PAGE: u16 = 0x0100;

impl<M: MemoryBus> CPU<M> {
    /// Full bus address the stack pointer currently designates.
    pub fn stack_address(&self) -> u16 {
        STACK_PAGE | self.sp as u16
    }

    /// Pushes one byte (1 cycle).
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.push_byte(0x42);
    ///
    /// assert_eq!(cpu.memory().read(0x01FF), 0x42);
    /// assert_eq!(cpu.sp(), 0xFE);
    /// assert_eq!(cpu.cycles(), 1);
    /// ```
    pub fn push_byte(&mut self, value: u8) {
        self.write_bus(self.stack_address(), value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pops one byte (1 cycle).
    pub fn pop_byte(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read_bus(self.stack_address())
    }

    /// Pushes a word, high byte first (2 cycles).
    pub fn push_word(&mut self, value: u16) {
        self.push_byte((value >> 8) as u8);
        self.push_byte(value as u8);
    }

    /// Pops a word, low byte first (2 cycles).
    pub fn pop_word(&mut self) -> u16 {
        let lo = self.pop_byte() as u16;
        let hi = self.pop_byte() as u16;
        (hi << 8) | lo
    }
}
