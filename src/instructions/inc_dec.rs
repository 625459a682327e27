//! # Increment and Decrement Instructions
//!
//! - INC, DEC: memory operands, read-modify-write
//! - INX, INY, DEX, DEY: index registers, 2 cycles
//!
//! All wrap at the 8-bit boundary and set Z and N from the result. Carry is
//! never touched.

use super::{implied_cycle, read_modify_write};
use crate::addressing::AddressingMode;
use crate::{MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    read_modify_write(cpu, mode, |p, value| {
        let result = value.wrapping_add(1);
        p.set_zn(result);
        result
    });
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    read_modify_write(cpu, mode, |p, value| {
        let result = value.wrapping_sub(1);
        p.set_zn(result);
        result
    });
}

/// Executes the INX (Increment X) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    implied_cycle(cpu);
    cpu.x = cpu.x.wrapping_add(1);
    cpu.p.set_zn(cpu.x);
}

/// Executes the INY (Increment Y) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    implied_cycle(cpu);
    cpu.y = cpu.y.wrapping_add(1);
    cpu.p.set_zn(cpu.y);
}

/// Executes the DEX (Decrement X) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    implied_cycle(cpu);
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.p.set_zn(cpu.x);
}

/// Executes the DEY (Decrement Y) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    implied_cycle(cpu);
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.p.set_zn(cpu.y);
}
