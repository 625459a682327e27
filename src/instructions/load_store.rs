//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads pay the indexed page-crossing cycle only when the index carries.
//! Stores always pay it.

use crate::addressing::{Access, AddressingMode};
use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
///
/// # Timing
///
/// Immediate 2, zero page 3, zero page,X 4, absolute 4, absolute,X/Y 4(+1),
/// (indirect,X) 6, (indirect),Y 5(+1).
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.a = cpu.read_operand(mode);
    cpu.p.set_zn(cpu.a);
}

/// Executes the LDX (Load X Register) instruction. Sets Z and N.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.x = cpu.read_operand(mode);
    cpu.p.set_zn(cpu.x);
}

/// Executes the LDY (Load Y Register) instruction. Sets Z and N.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.y = cpu.read_operand(mode);
    cpu.p.set_zn(cpu.y);
}

/// Executes the STA (Store Accumulator) instruction.
///
/// No flags affected.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.effective_address(mode, Access::Write);
    cpu.write_bus(addr, cpu.a);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.effective_address(mode, Access::Write);
    cpu.write_bus(addr, cpu.x);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.effective_address(mode, Access::Write);
    cpu.write_bus(addr, cpu.y);
}
