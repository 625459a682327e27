//! # Addressing Modes
//!
//! The 13 NMOS 6502 addressing modes and the effective-address resolution
//! that goes with them.
//!
//! Resolution performs the same bus accesses the hardware does, including the
//! dummy reads, and each access is charged one cycle. Instruction timing
//! therefore comes out of the access pattern rather than a lookup.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X. The sum wraps within page zero, so $FF,X with X=2
    /// reads 0x0001, never 0x0101.
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within page zero.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address, low byte first.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X. Reads pay +1 cycle when the index crosses a page.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y. Reads pay +1 cycle when the index crosses a page.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC). Only used by JMP.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y. Reads pay +1 cycle when the index crosses a page.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// How the instruction uses its effective address.
///
/// Indexed modes only spend the fix-up cycle on reads when the index carries
/// into the high byte. Writes and read-modify-write always spend it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    Read,
    Write,
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves the effective address for `mode`, fetching operand bytes and
    /// performing any pointer reads and dummy cycles the mode requires.
    ///
    /// For `Immediate` the effective address is the operand byte itself; the
    /// program counter steps past it but no cycle is charged until the caller
    /// reads it.
    pub(crate) fn effective_address(&mut self, mode: AddressingMode, access: Access) -> u16 {
        match mode {
            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                addr
            }
            AddressingMode::ZeroPage => self.fetch_byte() as u16,
            AddressingMode::ZeroPageX => self.zero_page_indexed(self.x),
            AddressingMode::ZeroPageY => self.zero_page_indexed(self.y),
            AddressingMode::Absolute => self.fetch_word(),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                self.indexed(base, self.x, access)
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                self.indexed(base, self.y, access)
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                let lo = self.read_bus(ptr) as u16;
                // NMOS bug: the pointer's high byte is read from the same page
                let hi_addr = (ptr & 0xFF00) | (ptr as u8).wrapping_add(1) as u16;
                let hi = self.read_bus(hi_addr) as u16;
                (hi << 8) | lo
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch_byte();
                self.dummy_read(zp as u16);
                let ptr = zp.wrapping_add(self.x);
                self.read_zero_page_pointer(ptr)
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_byte();
                let base = self.read_zero_page_pointer(zp);
                self.indexed(base, self.y, access)
            }
            AddressingMode::Implicit | AddressingMode::Accumulator | AddressingMode::Relative => {
                unreachable!("{mode:?} has no effective address")
            }
        }
    }

    /// Reads the operand value for a read instruction (LDA, ADC, CMP, ...).
    pub(crate) fn read_operand(&mut self, mode: AddressingMode) -> u8 {
        let addr = self.effective_address(mode, Access::Read);
        self.read_bus(addr)
    }

    fn zero_page_indexed(&mut self, index: u8) -> u16 {
        let base = self.fetch_byte();
        // The CPU reads the unindexed address while it adds
        self.dummy_read(base as u16);
        base.wrapping_add(index) as u16
    }

    fn read_zero_page_pointer(&mut self, ptr: u8) -> u16 {
        let lo = self.read_bus(ptr as u16) as u16;
        let hi = self.read_bus(ptr.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    fn indexed(&mut self, base: u16, index: u8, access: Access) -> u16 {
        let addr = base.wrapping_add(index as u16);
        let page_crossed = (base & 0xFF00) != (addr & 0xFF00);
        if page_crossed || access == Access::Write {
            // Low byte already indexed, high byte not yet carried
            self.dummy_read((base & 0xFF00) | (addr & 0x00FF));
        }
        addr
    }
}
