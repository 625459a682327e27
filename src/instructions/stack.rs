//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator (3 cycles)
//! - PHP: Push Processor Status (3 cycles)
//! - PLA: Pull Accumulator (4 cycles)
//! - PLP: Pull Processor Status (4 cycles)
//!
//! Pulls spend an extra cycle reading the stack slot the pointer currently
//! designates before incrementing it.

use super::implied_cycle;
use crate::{MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Writes A to 0x0100 | SP, then decrements SP. No flags affected.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    implied_cycle(cpu);
    cpu.push_byte(cpu.a);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy always has B and bit 5 set; the live register is unchanged.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    implied_cycle(cpu);
    cpu.push_byte(cpu.p.to_pushed_byte());
}

/// Executes the PLA (Pull Accumulator) instruction. Sets Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    implied_cycle(cpu);
    cpu.dummy_read(cpu.stack_address());
    cpu.a = cpu.pop_byte();
    cpu.p.set_zn(cpu.a);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Every flag comes from the pulled byte except B and bit 5.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    implied_cycle(cpu);
    cpu.dummy_read(cpu.stack_address());
    let value = cpu.pop_byte();
    cpu.p.load_pulled(value);
}
