//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file and memory image, runs one instruction
//! and checks the invariants every step must keep.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{CpuConfig, FlatMemory, MemoryBus, ResetVector, CPU, OPCODE_TABLE};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    decimal_mode: bool,
    /// Opcode and operand bytes at 0x8000
    instruction_bytes: [u8; 3],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Target region for absolute operands, placed at 0x4000
    main_memory: [u8; 256],
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);
    memory.load(0x8000, &input.instruction_bytes);
    memory.load(0x0000, &input.zero_page);
    memory.load(0x0100, &input.stack_page);
    memory.load(0x4000, &input.main_memory);

    let config = CpuConfig {
        reset_vector: ResetVector::Fixed(0x8000),
        decimal_mode: input.decimal_mode,
    };
    let mut cpu = CPU::with_config(memory, config);
    cpu.set_a(input.a);
    cpu.set_x(input.x);
    cpu.set_y(input.y);
    cpu.set_sp(input.sp);
    cpu.set_status(input.status);

    let opcode = input.instruction_bytes[0];
    let metadata = &OPCODE_TABLE[opcode as usize];

    match cpu.step() {
        Ok(()) => {
            assert!(metadata.is_documented());
            // Page crosses and taken branches add at most two cycles
            let base = u64::from(metadata.base_cycles);
            assert!(cpu.cycles() >= base && cpu.cycles() <= base + 2);
        }
        Err(_) => {
            assert!(!metadata.is_documented());
            assert_eq!(cpu.cycles(), 1);
            assert_eq!(cpu.pc(), 0x8001);
        }
    }

    assert!(cpu.status() & 0x20 != 0);
});
