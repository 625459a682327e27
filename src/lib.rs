//! # 6502 CPU Emulator Core
//!
//! A cycle-accurate NMOS 6502 CPU core. Every bus access an instruction makes
//! (opcode fetch, operand fetch, data read or write, dummy read) is charged one
//! cycle, so instruction timing falls out of the access pattern instead of
//! being added up front.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{CPU, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//!
//! // Reset vector points at 0x8000
//! memory.write(0xFFFC, 0x00);
//! memory.write(0xFFFD, 0x80);
//!
//! // JSR $0B0A
//! memory.load(0x8000, &[0x20, 0x0A, 0x0B]);
//! // $0B0A: LDA #$42 ; RTS
//! memory.load(0x0B0A, &[0xA9, 0x42, 0x60]);
//!
//! let mut cpu = CPU::new(memory);
//! let consumed = cpu.execute(14).unwrap();
//!
//! assert_eq!(consumed, 14);
//! assert_eq!(cpu.a(), 0x42);
//! assert_eq!(cpu.pc(), 0x8003);
//! assert_eq!(cpu.sp(), 0xFF);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus` trait
//! - **Cycle Accuracy**: one cycle per bus access, including the dummy accesses
//!   real silicon performs
//! - **Table-Driven Design**: `OPCODE_TABLE` maps every opcode byte to its
//!   instruction, addressing mode, size and documented cycle cost
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch-decode-execute loop
//! - `status` - Processor status register
//! - `stack` - Stack page push/pop
//! - `memory` - MemoryBus trait and flat 64KB memory
//! - `devices` - Memory map built from RAM/ROM devices
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing modes and effective address resolution
//! - `config` - Reset vector and decimal mode configuration

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod devices;
pub mod memory;
pub mod opcodes;
pub mod stack;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use config::{CpuConfig, ResetVector};
pub use cpu::CPU;
pub use devices::{Device, MappedMemory, MemoryMapBuilder, MemoryMapError, RamDevice, RomDevice};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Instruction, OpcodeMetadata, OPCODE_TABLE};
pub use stack::STACK_PAGE;
pub use status::Status;

/// Errors that can occur during CPU execution.
///
/// Running out of cycle budget is not an error; `CPU::execute` reports the
/// cycles it consumed instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The fetched byte does not decode to a documented instruction.
    ///
    /// The opcode fetch has already been charged and the program counter
    /// points at the following byte.
    #[error("unrecognized opcode 0x{opcode:02X} at 0x{address:04X}")]
    UnrecognizedOpcode {
        /// The opcode byte that was fetched
        opcode: u8,
        /// Address the opcode was fetched from
        address: u16,
    },
}
