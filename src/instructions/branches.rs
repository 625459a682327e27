//! # Branch Instructions
//!
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC and BVS share one implementation: test a
//! single status flag and, if it matches, add the signed 8-bit offset to the
//! address of the next instruction.
//!
//! ## Timing
//!
//! - Not taken: 2 cycles
//! - Taken, same page: 3 cycles
//! - Taken, crossing a page: 4 cycles

use crate::{MemoryBus, CPU};

/// Executes a conditional branch on `flag`.
///
/// The branch is taken when the flag's state equals `when_set`. The extra
/// cycles are spent as reads the NMOS part performs while it adjusts PC: the
/// opcode after the branch, then the target address with the old high byte
/// if the low-byte add carried.
pub(crate) fn execute_branch<M: MemoryBus>(cpu: &mut CPU<M>, flag: u8, when_set: bool) {
    let offset = cpu.fetch_byte() as i8;

    if cpu.p.is_set(flag) != when_set {
        return;
    }

    let target = cpu.pc.wrapping_add_signed(offset as i16);
    cpu.dummy_read(cpu.pc);

    if (cpu.pc & 0xFF00) != (target & 0xFF00) {
        cpu.dummy_read((cpu.pc & 0xFF00) | (target & 0x00FF));
    }

    cpu.pc = target;
}
