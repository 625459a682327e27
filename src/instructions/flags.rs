//! # Flag Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED and CLV: set or clear one status flag.
//! All are single-byte, 2-cycle instructions.

use super::implied_cycle;
use crate::{MemoryBus, CPU};

/// Sets `flag` when `value` is true, clears it otherwise.
pub(crate) fn execute_flag<M: MemoryBus>(cpu: &mut CPU<M>, flag: u8, value: bool) {
    implied_cycle(cpu);
    cpu.p.set_if(flag, value);
}
