//! # 6502 Instruction Implementations
//!
//! Instructions are organized by category. Each handler takes the CPU and the
//! addressing mode decoded from `OPCODE_TABLE`, performs its bus accesses
//! through the CPU's cycle-charging helpers and updates registers and flags.
//!
//! ## Categories
//!
//! - **alu**: ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **control**: JMP, JSR, RTS, RTI, BRK, NOP
//! - **stack**: PHA, PHP, PLA, PLP
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::addressing::{Access, AddressingMode};
use crate::status::{self, Status};
use crate::{Instruction, MemoryBus, CPU};

/// Runs a decoded instruction. The opcode byte has already been fetched.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: Instruction,
    mode: AddressingMode,
) {
    match instruction {
        Instruction::Lda => load_store::execute_lda(cpu, mode),
        Instruction::Ldx => load_store::execute_ldx(cpu, mode),
        Instruction::Ldy => load_store::execute_ldy(cpu, mode),
        Instruction::Sta => load_store::execute_sta(cpu, mode),
        Instruction::Stx => load_store::execute_stx(cpu, mode),
        Instruction::Sty => load_store::execute_sty(cpu, mode),

        Instruction::Tax => transfer::execute_tax(cpu),
        Instruction::Tay => transfer::execute_tay(cpu),
        Instruction::Txa => transfer::execute_txa(cpu),
        Instruction::Tya => transfer::execute_tya(cpu),
        Instruction::Tsx => transfer::execute_tsx(cpu),
        Instruction::Txs => transfer::execute_txs(cpu),

        Instruction::Pha => stack::execute_pha(cpu),
        Instruction::Php => stack::execute_php(cpu),
        Instruction::Pla => stack::execute_pla(cpu),
        Instruction::Plp => stack::execute_plp(cpu),

        Instruction::Adc => alu::execute_adc(cpu, mode),
        Instruction::Sbc => alu::execute_sbc(cpu, mode),
        Instruction::And => alu::execute_and(cpu, mode),
        Instruction::Ora => alu::execute_ora(cpu, mode),
        Instruction::Eor => alu::execute_eor(cpu, mode),
        Instruction::Cmp => {
            let register = cpu.a;
            alu::execute_compare(cpu, mode, register)
        }
        Instruction::Cpx => {
            let register = cpu.x;
            alu::execute_compare(cpu, mode, register)
        }
        Instruction::Cpy => {
            let register = cpu.y;
            alu::execute_compare(cpu, mode, register)
        }
        Instruction::Bit => alu::execute_bit(cpu, mode),

        Instruction::Asl => shifts::execute_asl(cpu, mode),
        Instruction::Lsr => shifts::execute_lsr(cpu, mode),
        Instruction::Rol => shifts::execute_rol(cpu, mode),
        Instruction::Ror => shifts::execute_ror(cpu, mode),

        Instruction::Inc => inc_dec::execute_inc(cpu, mode),
        Instruction::Dec => inc_dec::execute_dec(cpu, mode),
        Instruction::Inx => inc_dec::execute_inx(cpu),
        Instruction::Iny => inc_dec::execute_iny(cpu),
        Instruction::Dex => inc_dec::execute_dex(cpu),
        Instruction::Dey => inc_dec::execute_dey(cpu),

        Instruction::Bcc => branches::execute_branch(cpu, status::C, false),
        Instruction::Bcs => branches::execute_branch(cpu, status::C, true),
        Instruction::Bne => branches::execute_branch(cpu, status::Z, false),
        Instruction::Beq => branches::execute_branch(cpu, status::Z, true),
        Instruction::Bpl => branches::execute_branch(cpu, status::N, false),
        Instruction::Bmi => branches::execute_branch(cpu, status::N, true),
        Instruction::Bvc => branches::execute_branch(cpu, status::V, false),
        Instruction::Bvs => branches::execute_branch(cpu, status::V, true),

        Instruction::Clc => flags::execute_flag(cpu, status::C, false),
        Instruction::Sec => flags::execute_flag(cpu, status::C, true),
        Instruction::Cli => flags::execute_flag(cpu, status::I, false),
        Instruction::Sei => flags::execute_flag(cpu, status::I, true),
        Instruction::Cld => flags::execute_flag(cpu, status::D, false),
        Instruction::Sed => flags::execute_flag(cpu, status::D, true),
        Instruction::Clv => flags::execute_flag(cpu, status::V, false),

        Instruction::Jmp => control::execute_jmp(cpu, mode),
        Instruction::Jsr => control::execute_jsr(cpu),
        Instruction::Rts => control::execute_rts(cpu),
        Instruction::Rti => control::execute_rti(cpu),
        Instruction::Brk => control::execute_brk(cpu),
        Instruction::Nop => control::execute_nop(cpu),
    }
}

/// Second cycle of every single-byte instruction: the CPU reads the byte
/// after the opcode and throws it away. PC does not move.
pub(crate) fn implied_cycle<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.dummy_read(cpu.pc);
}

/// Read-modify-write on the accumulator or a memory operand.
///
/// Memory operands see the NMOS access pattern: read, write the unmodified
/// value back, write the result. Returns the result; flags other than those
/// `op` touches are left to the caller.
pub(crate) fn read_modify_write<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    op: impl FnOnce(&mut Status, u8) -> u8,
) -> u8 {
    if mode == AddressingMode::Accumulator {
        implied_cycle(cpu);
        let result = op(&mut cpu.p, cpu.a);
        cpu.a = result;
        result
    } else {
        let addr = cpu.effective_address(mode, Access::Write);
        let value = cpu.read_bus(addr);
        cpu.write_bus(addr, value);
        let result = op(&mut cpu.p, value);
        cpu.write_bus(addr, result);
        result
    }
}
