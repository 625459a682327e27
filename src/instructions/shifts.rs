//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator (2 cycles) or a memory operand through the
//! read-modify-write sequence. The bit shifted out lands in C; Z and N follow
//! the result.

use super::read_modify_write;
use crate::addressing::AddressingMode;
use crate::status::{Status, C};
use crate::{MemoryBus, CPU};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 goes to carry, bit 0 becomes 0.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    read_modify_write(cpu, mode, |p, value| {
        let result = value << 1;
        finish(p, value & 0x80 != 0, result)
    });
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to carry, bit 7 becomes 0, so N always ends up clear.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    read_modify_write(cpu, mode, |p, value| {
        let result = value >> 1;
        finish(p, value & 0x01 != 0, result)
    });
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters bit 0; bit 7 becomes the new carry.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    read_modify_write(cpu, mode, |p, value| {
        let result = (value << 1) | p.is_set(C) as u8;
        finish(p, value & 0x80 != 0, result)
    });
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters bit 7; bit 0 becomes the new carry.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    read_modify_write(cpu, mode, |p, value| {
        let result = (value >> 1) | ((p.is_set(C) as u8) << 7);
        finish(p, value & 0x01 != 0, result)
    });
}

fn finish(p: &mut Status, carry: bool, result: u8) -> u8 {
    p.set_if(C, carry);
    p.set_zn(result);
    result
}
