//! # Processor Status Register
//!
//! The status register (P) packs the processor flags into one byte, high to low:
//!
//! | Bit | Flag | Meaning |
//! |-----|------|---------|
//! | 7 | N | Negative |
//! | 6 | V | Overflow |
//! | 5 | U | Unused, reads as 1 |
//! | 4 | B | Break |
//! | 3 | D | Decimal mode |
//! | 2 | I | Interrupt disable |
//! | 1 | Z | Zero |
//! | 0 | C | Carry |
//!
//! The constants below are the only place these bit positions are written down.

/// Carry flag.
pub const C: u8 = 0b0000_0001;

/// Zero flag.
pub const Z: u8 = 0b0000_0010;

/// Interrupt disable flag.
pub const I: u8 = 0b0000_0100;

/// Decimal mode flag.
pub const D: u8 = 0b0000_1000;

/// Break flag. Forced on in the copy BRK and PHP push to the stack.
pub const B: u8 = 0b0001_0000;

/// Unused bit, always reads as 1.
pub const U: u8 = 0b0010_0000;

/// Overflow flag.
pub const V: u8 = 0b0100_0000;

/// Negative flag.
pub const N: u8 = 0b1000_0000;

/// Processor status register.
///
/// # Examples
///
/// ```
/// use cpu6502::status::{self, Status};
///
/// let mut p = Status::power_on();
/// assert!(p.is_set(status::I));
///
/// p.set_zn(0x80);
/// assert!(p.is_set(status::N));
/// assert!(!p.is_set(status::Z));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status(u8);

impl Status {
    /// Status after reset: interrupts disabled, unused bit set, everything else clear.
    pub const fn power_on() -> Self {
        Self(U | I)
    }

    /// Creates a status register from a raw byte. The unused bit is forced on.
    pub const fn from_byte(value: u8) -> Self {
        Self(value | U)
    }

    /// Returns the raw register value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Value pushed by BRK and PHP (break and unused both set).
    pub const fn to_pushed_byte(self) -> u8 {
        self.0 | B | U
    }

    /// Loads flags pulled from the stack by PLP or RTI.
    ///
    /// B and U are not real latches on the NMOS part: the pulled copy of those
    /// bits is dropped and the register keeps its own.
    pub fn load_pulled(&mut self, value: u8) {
        self.0 = (value & !(B | U)) | (self.0 & B) | U;
    }

    /// Returns true if every bit in `flag` is set.
    pub const fn is_set(self, flag: u8) -> bool {
        self.0 & flag == flag
    }

    /// Sets the given flag bits.
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    /// Clears the given flag bits.
    pub fn clear(&mut self, flag: u8) {
        self.0 &= !flag;
    }

    /// Sets or clears `flag` depending on `condition`.
    pub fn set_if(&mut self, flag: u8, condition: bool) {
        if condition {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }

    /// Updates Z and N from a result byte. Every other flag is left alone.
    pub fn set_zn(&mut self, value: u8) {
        self.set_if(Z, value == 0);
        self.set_if(N, value & 0x80 != 0);
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::power_on()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let mut p = Status::from_byte(0);
        p.set(Z | N);
        assert_eq!(p.bits(), 0b1010_0010);

        p.clear(Z);
        assert_eq!(p.bits(), 0b1010_0000);
        assert!(p.is_set(N));
        assert!(!p.is_set(Z));
    }

    #[test]
    fn test_set_zn_leaves_other_flags() {
        let mut p = Status::from_byte(C | V | D | I | B);
        p.set_zn(0x00);
        assert!(p.is_set(Z));
        assert!(!p.is_set(N));
        assert!(p.is_set(C | V | D | I | B));

        p.set_zn(0xFF);
        assert!(!p.is_set(Z));
        assert!(p.is_set(N));
        assert!(p.is_set(C | V | D | I | B));
    }

    #[test]
    fn test_pushed_byte_has_break_and_unused() {
        let p = Status::from_byte(C);
        assert_eq!(p.to_pushed_byte(), C | B | U);
    }

    #[test]
    fn test_load_pulled_ignores_break_and_unused() {
        let mut p = Status::power_on();
        p.load_pulled(0xFF);
        assert_eq!(p.bits(), 0xFF & !B);

        let mut p = Status::from_byte(B);
        p.load_pulled(0x00);
        assert_eq!(p.bits(), B | U);
    }
}
