//! # Opcode Metadata Table
//!
//! The 256-entry table indexed by opcode byte. It is the single source of
//! truth for decoding: which instruction an opcode runs, in which addressing
//! mode, how many bytes it occupies and how many cycles it is documented to
//! take.
//!
//! The table covers the 151 documented NMOS opcodes. The remaining 105 bytes
//! decode to nothing and are reported as unrecognized when executed.
//!
//! `base_cycles` excludes the page-crossing and branch-taken penalties. The
//! executor does not read it: cycles are charged per bus access. The table
//! value is what the access pattern must add up to, and the test suite holds
//! the two against each other.

use crate::addressing::AddressingMode;

/// Documented 6502 instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Instruction {
    /// Three-letter assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Instruction::Adc => "ADC",
            Instruction::And => "AND",
            Instruction::Asl => "ASL",
            Instruction::Bcc => "BCC",
            Instruction::Bcs => "BCS",
            Instruction::Beq => "BEQ",
            Instruction::Bit => "BIT",
            Instruction::Bmi => "BMI",
            Instruction::Bne => "BNE",
            Instruction::Bpl => "BPL",
            Instruction::Brk => "BRK",
            Instruction::Bvc => "BVC",
            Instruction::Bvs => "BVS",
            Instruction::Clc => "CLC",
            Instruction::Cld => "CLD",
            Instruction::Cli => "CLI",
            Instruction::Clv => "CLV",
            Instruction::Cmp => "CMP",
            Instruction::Cpx => "CPX",
            Instruction::Cpy => "CPY",
            Instruction::Dec => "DEC",
            Instruction::Dex => "DEX",
            Instruction::Dey => "DEY",
            Instruction::Eor => "EOR",
            Instruction::Inc => "INC",
            Instruction::Inx => "INX",
            Instruction::Iny => "INY",
            Instruction::Jmp => "JMP",
            Instruction::Jsr => "JSR",
            Instruction::Lda => "LDA",
            Instruction::Ldx => "LDX",
            Instruction::Ldy => "LDY",
            Instruction::Lsr => "LSR",
            Instruction::Nop => "NOP",
            Instruction::Ora => "ORA",
            Instruction::Pha => "PHA",
            Instruction::Php => "PHP",
            Instruction::Pla => "PLA",
            Instruction::Plp => "PLP",
            Instruction::Rol => "ROL",
            Instruction::Ror => "ROR",
            Instruction::Rti => "RTI",
            Instruction::Rts => "RTS",
            Instruction::Sbc => "SBC",
            Instruction::Sec => "SEC",
            Instruction::Sed => "SED",
            Instruction::Sei => "SEI",
            Instruction::Sta => "STA",
            Instruction::Stx => "STX",
            Instruction::Sty => "STY",
            Instruction::Tax => "TAX",
            Instruction::Tay => "TAY",
            Instruction::Tsx => "TSX",
            Instruction::Txa => "TXA",
            Instruction::Txs => "TXS",
            Instruction::Tya => "TYA",
        }
    }

    /// True for the eight conditional branches.
    pub const fn is_branch(self) -> bool {
        matches!(
            self,
            Instruction::Bcc
                | Instruction::Bcs
                | Instruction::Beq
                | Instruction::Bmi
                | Instruction::Bne
                | Instruction::Bpl
                | Instruction::Bvc
                | Instruction::Bvs
        )
    }
}

/// Metadata for a single opcode.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, Instruction, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.instruction, Some(Instruction::Lda));
/// assert_eq!(lda_imm.mnemonic(), "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction this opcode runs, `None` for undocumented opcodes.
    pub instruction: Option<Instruction>,

    /// Addressing mode for this opcode.
    pub addressing_mode: AddressingMode,

    /// Documented cycle cost before page-crossing and branch penalties.
    /// Zero for undocumented opcodes.
    pub base_cycles: u8,

    /// Opcode plus operand bytes (1-3).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    /// Mnemonic of the instruction, "???" for undocumented opcodes.
    pub const fn mnemonic(&self) -> &'static str {
        match self.instruction {
            Some(instruction) => instruction.mnemonic(),
            None => "???",
        }
    }

    /// True if the opcode is part of the documented instruction set.
    pub const fn is_documented(&self) -> bool {
        self.instruction.is_some()
    }
}

const UNDOCUMENTED: OpcodeMetadata = OpcodeMetadata {
    instruction: None,
    addressing_mode: AddressingMode::Implicit,
    base_cycles: 0,
    size_bytes: 1,
};

const fn op(instruction: Instruction, mode: AddressingMode, cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        instruction: Some(instruction),
        addressing_mode: mode,
        base_cycles: cycles,
        size_bytes: 1 + mode.operand_bytes(),
    }
}

/// Complete 256-entry opcode table indexed by opcode byte.
///
/// ```
/// use cpu6502::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic(), "BRK");
/// assert_eq!(brk.base_cycles, 7);
///
/// let undocumented = &OPCODE_TABLE[0x02];
/// assert!(!undocumented.is_documented());
/// assert_eq!(undocumented.mnemonic(), "???");
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = build_table();

const fn build_table() -> [OpcodeMetadata; 256] {
    use AddressingMode::*;
    use Instruction::*;

    let mut t = [UNDOCUMENTED; 256];

    // Loads
    t[0xA9] = op(Lda, Immediate, 2);
    t[0xA5] = op(Lda, ZeroPage, 3);
    t[0xB5] = op(Lda, ZeroPageX, 4);
    t[0xAD] = op(Lda, Absolute, 4);
    t[0xBD] = op(Lda, AbsoluteX, 4);
    t[0xB9] = op(Lda, AbsoluteY, 4);
    t[0xA1] = op(Lda, IndirectX, 6);
    t[0xB1] = op(Lda, IndirectY, 5);
    t[0xA2] = op(Ldx, Immediate, 2);
    t[0xA6] = op(Ldx, ZeroPage, 3);
    t[0xB6] = op(Ldx, ZeroPageY, 4);
    t[0xAE] = op(Ldx, Absolute, 4);
    t[0xBE] = op(Ldx, AbsoluteY, 4);
    t[0xA0] = op(Ldy, Immediate, 2);
    t[0xA4] = op(Ldy, ZeroPage, 3);
    t[0xB4] = op(Ldy, ZeroPageX, 4);
    t[0xAC] = op(Ldy, Absolute, 4);
    t[0xBC] = op(Ldy, AbsoluteX, 4);

    // Stores
    t[0x85] = op(Sta, ZeroPage, 3);
    t[0x95] = op(Sta, ZeroPageX, 4);
    t[0x8D] = op(Sta, Absolute, 4);
    t[0x9D] = op(Sta, AbsoluteX, 5);
    t[0x99] = op(Sta, AbsoluteY, 5);
    t[0x81] = op(Sta, IndirectX, 6);
    t[0x91] = op(Sta, IndirectY, 6);
    t[0x86] = op(Stx, ZeroPage, 3);
    t[0x96] = op(Stx, ZeroPageY, 4);
    t[0x8E] = op(Stx, Absolute, 4);
    t[0x84] = op(Sty, ZeroPage, 3);
    t[0x94] = op(Sty, ZeroPageX, 4);
    t[0x8C] = op(Sty, Absolute, 4);

    // Transfers
    t[0xAA] = op(Tax, Implicit, 2);
    t[0xA8] = op(Tay, Implicit, 2);
    t[0xBA] = op(Tsx, Implicit, 2);
    t[0x8A] = op(Txa, Implicit, 2);
    t[0x9A] = op(Txs, Implicit, 2);
    t[0x98] = op(Tya, Implicit, 2);

    // Stack
    t[0x48] = op(Pha, Implicit, 3);
    t[0x08] = op(Php, Implicit, 3);
    t[0x68] = op(Pla, Implicit, 4);
    t[0x28] = op(Plp, Implicit, 4);

    // Arithmetic and logic
    t[0x69] = op(Adc, Immediate, 2);
    t[0x65] = op(Adc, ZeroPage, 3);
    t[0x75] = op(Adc, ZeroPageX, 4);
    t[0x6D] = op(Adc, Absolute, 4);
    t[0x7D] = op(Adc, AbsoluteX, 4);
    t[0x79] = op(Adc, AbsoluteY, 4);
    t[0x61] = op(Adc, IndirectX, 6);
    t[0x71] = op(Adc, IndirectY, 5);
    t[0xE9] = op(Sbc, Immediate, 2);
    t[0xE5] = op(Sbc, ZeroPage, 3);
    t[0xF5] = op(Sbc, ZeroPageX, 4);
    t[0xED] = op(Sbc, Absolute, 4);
    t[0xFD] = op(Sbc, AbsoluteX, 4);
    t[0xF9] = op(Sbc, AbsoluteY, 4);
    t[0xE1] = op(Sbc, IndirectX, 6);
    t[0xF1] = op(Sbc, IndirectY, 5);
    t[0x29] = op(And, Immediate, 2);
    t[0x25] = op(And, ZeroPage, 3);
    t[0x35] = op(And, ZeroPageX, 4);
    t[0x2D] = op(And, Absolute, 4);
    t[0x3D] = op(And, AbsoluteX, 4);
    t[0x39] = op(And, AbsoluteY, 4);
    t[0x21] = op(And, IndirectX, 6);
    t[0x31] = op(And, IndirectY, 5);
    t[0x09] = op(Ora, Immediate, 2);
    t[0x05] = op(Ora, ZeroPage, 3);
    t[0x15] = op(Ora, ZeroPageX, 4);
    t[0x0D] = op(Ora, Absolute, 4);
    t[0x1D] = op(Ora, AbsoluteX, 4);
    t[0x19] = op(Ora, AbsoluteY, 4);
    t[0x01] = op(Ora, IndirectX, 6);
    t[0x11] = op(Ora, IndirectY, 5);
    t[0x49] = op(Eor, Immediate, 2);
    t[0x45] = op(Eor, ZeroPage, 3);
    t[0x55] = op(Eor, ZeroPageX, 4);
    t[0x4D] = op(Eor, Absolute, 4);
    t[0x5D] = op(Eor, AbsoluteX, 4);
    t[0x59] = op(Eor, AbsoluteY, 4);
    t[0x41] = op(Eor, IndirectX, 6);
    t[0x51] = op(Eor, IndirectY, 5);
    t[0xC9] = op(Cmp, Immediate, 2);
    t[0xC5] = op(Cmp, ZeroPage, 3);
    t[0xD5] = op(Cmp, ZeroPageX, 4);
    t[0xCD] = op(Cmp, Absolute, 4);
    t[0xDD] = op(Cmp, AbsoluteX, 4);
    t[0xD9] = op(Cmp, AbsoluteY, 4);
    t[0xC1] = op(Cmp, IndirectX, 6);
    t[0xD1] = op(Cmp, IndirectY, 5);
    t[0xE0] = op(Cpx, Immediate, 2);
    t[0xE4] = op(Cpx, ZeroPage, 3);
    t[0xEC] = op(Cpx, Absolute, 4);
    t[0xC0] = op(Cpy, Immediate, 2);
    t[0xC4] = op(Cpy, ZeroPage, 3);
    t[0xCC] = op(Cpy, Absolute, 4);
    t[0x24] = op(Bit, ZeroPage, 3);
    t[0x2C] = op(Bit, Absolute, 4);

    // Shifts and rotates
    t[0x0A] = op(Asl, Accumulator, 2);
    t[0x06] = op(Asl, ZeroPage, 5);
    t[0x16] = op(Asl, ZeroPageX, 6);
    t[0x0E] = op(Asl, Absolute, 6);
    t[0x1E] = op(Asl, AbsoluteX, 7);
    t[0x4A] = op(Lsr, Accumulator, 2);
    t[0x46] = op(Lsr, ZeroPage, 5);
    t[0x56] = op(Lsr, ZeroPageX, 6);
    t[0x4E] = op(Lsr, Absolute, 6);
    t[0x5E] = op(Lsr, AbsoluteX, 7);
    t[0x2A] = op(Rol, Accumulator, 2);
    t[0x26] = op(Rol, ZeroPage, 5);
    t[0x36] = op(Rol, ZeroPageX, 6);
    t[0x2E] = op(Rol, Absolute, 6);
    t[0x3E] = op(Rol, AbsoluteX, 7);
    t[0x6A] = op(Ror, Accumulator, 2);
    t[0x66] = op(Ror, ZeroPage, 5);
    t[0x76] = op(Ror, ZeroPageX, 6);
    t[0x6E] = op(Ror, Absolute, 6);
    t[0x7E] = op(Ror, AbsoluteX, 7);

    // Increments and decrements
    t[0xE6] = op(Inc, ZeroPage, 5);
    t[0xF6] = op(Inc, ZeroPageX, 6);
    t[0xEE] = op(Inc, Absolute, 6);
    t[0xFE] = op(Inc, AbsoluteX, 7);
    t[0xC6] = op(Dec, ZeroPage, 5);
    t[0xD6] = op(Dec, ZeroPageX, 6);
    t[0xCE] = op(Dec, Absolute, 6);
    t[0xDE] = op(Dec, AbsoluteX, 7);
    t[0xE8] = op(Inx, Implicit, 2);
    t[0xC8] = op(Iny, Implicit, 2);
    t[0xCA] = op(Dex, Implicit, 2);
    t[0x88] = op(Dey, Implicit, 2);

    // Branches
    t[0x90] = op(Bcc, Relative, 2);
    t[0xB0] = op(Bcs, Relative, 2);
    t[0xF0] = op(Beq, Relative, 2);
    t[0xD0] = op(Bne, Relative, 2);
    t[0x30] = op(Bmi, Relative, 2);
    t[0x10] = op(Bpl, Relative, 2);
    t[0x50] = op(Bvc, Relative, 2);
    t[0x70] = op(Bvs, Relative, 2);

    // Flags
    t[0x18] = op(Clc, Implicit, 2);
    t[0x38] = op(Sec, Implicit, 2);
    t[0x58] = op(Cli, Implicit, 2);
    t[0x78] = op(Sei, Implicit, 2);
    t[0xB8] = op(Clv, Implicit, 2);
    t[0xD8] = op(Cld, Implicit, 2);
    t[0xF8] = op(Sed, Implicit, 2);

    // Control flow
    t[0x4C] = op(Jmp, Absolute, 3);
    t[0x6C] = op(Jmp, Indirect, 5);
    t[0x20] = op(Jsr, Absolute, 6);
    t[0x60] = op(Rts, Implicit, 6);
    t[0x40] = op(Rti, Implicit, 6);
    t[0x00] = op(Brk, Implicit, 7);
    t[0xEA] = op(Nop, Implicit, 2);

    t
}
