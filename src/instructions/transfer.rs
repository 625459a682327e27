//! # Register Transfer Instructions
//!
//! This module implements register-to-register copies:
//! - TAX, TAY, TXA, TYA: set Z and N from the copied value
//! - TSX: copies the stack pointer into X, sets Z and N
//! - TXS: copies X into the stack pointer, flags untouched
//!
//! All are single-byte, 2-cycle instructions.

use super::implied_cycle;
use crate::{MemoryBus, CPU};

/// Executes TAX (Transfer Accumulator to X).
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    implied_cycle(cpu);
    cpu.x = cpu.a;
    cpu.p.set_zn(cpu.x);
}

/// Executes TAY (Transfer Accumulator to Y).
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    implied_cycle(cpu);
    cpu.y = cpu.a;
    cpu.p.set_zn(cpu.y);
}

/// Executes TXA (Transfer X to Accumulator).
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    implied_cycle(cpu);
    cpu.a = cpu.x;
    cpu.p.set_zn(cpu.a);
}

/// Executes TYA (Transfer Y to Accumulator).
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    implied_cycle(cpu);
    cpu.a = cpu.y;
    cpu.p.set_zn(cpu.a);
}

/// Executes TSX (Transfer Stack Pointer to X).
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    implied_cycle(cpu);
    cpu.x = cpu.sp;
    cpu.p.set_zn(cpu.x);
}

/// Executes TXS (Transfer X to Stack Pointer).
///
/// Unlike the other transfers, TXS leaves every flag alone.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    implied_cycle(cpu);
    cpu.sp = cpu.x;
}
