//! Runs a subroutine call on a RAM/ROM memory map.
//!
//! Memory layout:
//! - 0x0000-0x7FFF: 32KB RAM (zero page, stack)
//! - 0x8000-0xFFFF: 32KB ROM (program and reset vector)
//!
//! Program:
//! ```text
//! $8000: 20 10 80   JSR $8010
//! $8003: 85 10      STA $10
//! ...
//! $8010: A9 42      LDA #$42
//! $8012: 60         RTS
//! ```
//!
//! Run with `RUST_LOG=trace` to see each instruction as it executes.

use cpu6502::{MemoryBus, MemoryMapBuilder, RamDevice, RomDevice, CPU};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut rom = vec![0xEA; 0x8000];
    rom[0x0000..0x0005].copy_from_slice(&[0x20, 0x10, 0x80, 0x85, 0x10]);
    rom[0x0010..0x0013].copy_from_slice(&[0xA9, 0x42, 0x60]);
    rom[0x7FFC] = 0x00;
    rom[0x7FFD] = 0x80;

    let memory = MemoryMapBuilder::new()
        .map(0x0000, Box::new(RamDevice::new(0x8000)))?
        .map(0x8000, Box::new(RomDevice::new(rom)))?
        .build()?;

    let mut cpu = CPU::new(memory);
    println!("reset: PC=0x{:04X} SP=0x{:02X}", cpu.pc(), cpu.sp());

    // JSR (6) + LDA # (2) + RTS (6) + STA zp (3)
    let consumed = cpu.execute(17)?;

    println!("consumed {} cycles", consumed);
    println!(
        "A=0x{:02X} PC=0x{:04X} SP=0x{:02X} P=0b{:08b}",
        cpu.a(),
        cpu.pc(),
        cpu.sp(),
        cpu.status()
    );
    println!("$0010 = 0x{:02X}", cpu.memory().read(0x0010));

    Ok(())
}
