//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump, absolute (3 cycles) or indirect (5 cycles)
//! - JSR: Jump to Subroutine (6 cycles)
//! - RTS: Return from Subroutine (6 cycles)
//! - RTI: Return from Interrupt (6 cycles)
//! - BRK: Force Interrupt (7 cycles)
//! - NOP: No Operation (2 cycles)
//!
//! JSR pushes the address of its own last byte, not of the next instruction.
//! RTS pulls that address and adds one. Any code that builds return addresses
//! by hand has to follow the same convention.

use super::implied_cycle;
use crate::addressing::{Access, AddressingMode};
use crate::cpu::IRQ_VECTOR;
use crate::status::I;
use crate::{MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Indirect mode reproduces the NMOS page-wrap bug: a pointer at $xxFF takes
/// its high byte from $xx00.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.pc = cpu.effective_address(mode, Access::Read);
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// # Bus sequence
///
/// 1. Opcode fetch
/// 2. Target low byte
/// 3. Internal cycle on the stack
/// 4. Push return address high byte
/// 5. Push return address low byte
/// 6. Target high byte
///
/// The pushed value is PC while it still points at the target's high byte,
/// i.e. the address of the instruction's last byte.
///
/// # Example
///
/// ```text
/// $8000: 20 0A 0B   JSR $0B0A
///
/// stack: $01FF = $80, $01FE = $02, SP = $FD, PC = $0B0A
/// ```
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>) {
    let lo = cpu.fetch_byte() as u16;
    cpu.dummy_read(cpu.stack_address());
    cpu.push_word(cpu.pc);
    let hi = cpu.read_bus(cpu.pc) as u16;
    cpu.pc = (hi << 8) | lo;
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the return address (low byte first) and resumes one byte past it.
/// The final cycle reads the byte at the pulled address while incrementing.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    implied_cycle(cpu);
    cpu.dummy_read(cpu.stack_address());
    cpu.pc = cpu.pop_word();
    cpu.fetch_byte();
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls status (B and bit 5 ignored) and then the program counter. Unlike
/// RTS, the pulled address is used as is.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    implied_cycle(cpu);
    cpu.dummy_read(cpu.stack_address());
    let status = cpu.pop_byte();
    cpu.p.load_pulled(status);
    cpu.pc = cpu.pop_word();
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK reads and skips a padding byte, so the pushed return address is the
/// BRK address plus two. The status copy on the stack has B set; the live
/// register only gains I. PC is then loaded from $FFFE/$FFFF.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.fetch_byte();
    cpu.push_word(cpu.pc);
    cpu.push_byte(cpu.p.to_pushed_byte());
    cpu.p.set(I);

    let lo = cpu.read_bus(IRQ_VECTOR) as u16;
    let hi = cpu.read_bus(IRQ_VECTOR.wrapping_add(1)) as u16;
    cpu.pc = (hi << 8) | lo;
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop<M: MemoryBus>(cpu: &mut CPU<M>) {
    implied_cycle(cpu);
}
