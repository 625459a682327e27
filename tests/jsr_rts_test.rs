//! Tests for JSR (Jump to Subroutine) and RTS (Return from Subroutine).
//!
//! Tests cover:
//! - Return address convention (address of JSR's last byte)
//! - Stack contents and pointer movement
//! - 6-cycle timing of both instructions
//! - Nested calls and round trips

use cpu6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_jsr_pushes_address_of_last_byte() {
    let mut cpu = setup_cpu();
    // JSR $0B0A
    cpu.memory_mut().load(0x8000, &[0x20, 0x0A, 0x0B]);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0B0A);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.memory().read(0x01FF), 0x80);
    assert_eq!(cpu.memory().read(0x01FE), 0x02);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_jsr_leaves_flags_alone() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90]);
    cpu.set_flag_c(true);
    let before = cpu.status();

    cpu.step().unwrap();

    assert_eq!(cpu.status(), before);
}

#[test]
fn test_rts_resumes_after_call() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x60);
    // Return address $1233 on the stack, low byte on top
    cpu.memory_mut().write(0x01FE, 0x33);
    cpu.memory_mut().write(0x01FF, 0x12);
    cpu.set_sp(0xFD);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_jsr_rts_round_trip() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90]); // JSR $9000
    cpu.memory_mut().write(0x9000, 0x60); // RTS

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.cycles(), 12);
}

#[test]
fn test_nested_subroutines() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90]); // JSR $9000
    cpu.memory_mut().load(0x9000, &[0x20, 0x00, 0xA0, 0x60]); // JSR $A000; RTS
    cpu.memory_mut().load(0xA000, &[0xA9, 0x07, 0x60]); // LDA #$07; RTS

    for _ in 0..5 {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.a(), 0x07);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.cycles(), 6 + 6 + 2 + 6 + 6);
}

#[test]
fn test_rts_with_hand_built_return_address() {
    let mut cpu = setup_cpu();
    // PHA-style dispatch: push target-1, then RTS lands on target
    cpu.memory_mut().load(0x8000, &[0xA9, 0x40, 0x48, 0xA9, 0xFF, 0x48, 0x60]);

    cpu.execute(2 + 3 + 2 + 3 + 6).unwrap();

    assert_eq!(cpu.pc(), 0x4100);
}
