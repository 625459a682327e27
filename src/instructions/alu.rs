//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - CMP, CPX, CPY: Compare register with memory
//! - BIT: Test bits
//!
//! ADC and SBC follow NMOS decimal mode when D is set and the CPU was built
//! with `decimal_mode` enabled. In decimal mode the NMOS part derives N, V and
//! Z from intermediate or binary results rather than the BCD result; that
//! behavior is reproduced here.

use crate::addressing::AddressingMode;
use crate::status::{C, D, N, V, Z};
use crate::{MemoryBus, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// # Flag Behavior (binary mode)
///
/// - Carry (C): Set if the unsigned sum exceeds 0xFF
/// - Overflow (V): Set if both operands share a sign the result lacks
/// - Zero (Z), Negative (N): From the result
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    if decimal_active(cpu) {
        add_decimal(cpu, value);
    } else {
        add_binary(cpu, value);
    }
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Carry is an inverted borrow: set means no borrow occurred. In binary mode
/// SBC is ADC of the operand's one's complement.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    if decimal_active(cpu) {
        subtract_decimal(cpu, value);
    } else {
        add_binary(cpu, !value);
    }
}

/// Executes the AND (Logical AND) instruction. Sets Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.a &= value;
    cpu.p.set_zn(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction. Sets Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.a |= value;
    cpu.p.set_zn(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction. Sets Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.a ^= value;
    cpu.p.set_zn(cpu.a);
}

/// Executes CMP, CPX or CPY against `register`.
///
/// # Flag Behavior
///
/// - Carry (C): Set if register >= memory
/// - Zero (Z): Set if register == memory
/// - Negative (N): Bit 7 of register - memory
/// - Overflow (V): Not affected
pub(crate) fn execute_compare<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    register: u8,
) {
    let value = cpu.read_operand(mode);
    cpu.p.set_if(C, register >= value);
    cpu.p.set_zn(register.wrapping_sub(value));
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z reflects A & M; N and V are copied from bits 7 and 6 of M. A is unchanged.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.p.set_if(Z, cpu.a & value == 0);
    cpu.p.set_if(N, value & 0x80 != 0);
    cpu.p.set_if(V, value & 0x40 != 0);
}

fn decimal_active<M: MemoryBus>(cpu: &CPU<M>) -> bool {
    cpu.config.decimal_mode && cpu.p.is_set(D)
}

fn add_binary<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let sum = a as u16 + value as u16 + cpu.p.is_set(C) as u16;
    let result = sum as u8;

    cpu.p.set_if(C, sum > 0xFF);
    cpu.p.set_if(V, (a ^ result) & (value ^ result) & 0x80 != 0);
    cpu.p.set_zn(result);
    cpu.a = result;
}

fn add_decimal<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry = cpu.p.is_set(C) as u16;

    let mut lo = (a & 0x0F) as u16 + (value & 0x0F) as u16 + carry;
    if lo > 0x09 {
        lo += 0x06;
    }
    let mut hi = (a >> 4) as u16 + (value >> 4) as u16 + u16::from(lo > 0x0F);

    // N and V are taken before the high nibble is adjusted, Z from the binary sum
    let intermediate = ((hi << 4) | (lo & 0x0F)) as u8;
    let binary = (a as u16 + value as u16 + carry) as u8;
    cpu.p.set_if(N, intermediate & 0x80 != 0);
    cpu.p.set_if(V, (a ^ intermediate) & (value ^ intermediate) & 0x80 != 0);
    cpu.p.set_if(Z, binary == 0);

    if hi > 0x09 {
        hi += 0x06;
    }
    cpu.p.set_if(C, hi > 0x0F);
    cpu.a = ((hi << 4) | (lo & 0x0F)) as u8;
}

fn subtract_decimal<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let borrow = i16::from(!cpu.p.is_set(C));

    // Flags match the binary subtraction
    add_binary(cpu, !value);

    let mut lo = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
    let mut hi = (a >> 4) as i16 - (value >> 4) as i16;
    if lo < 0 {
        lo -= 0x06;
        hi -= 1;
    }
    if hi < 0 {
        hi -= 0x06;
    }
    cpu.a = (((hi << 4) | (lo & 0x0F)) & 0xFF) as u8;
}
