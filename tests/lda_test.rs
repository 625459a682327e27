//! Tests for LDA (Load Accumulator) across its addressing modes.
//!
//! Tests cover:
//! - Flag updates (Z, N) and preservation of the other flags
//! - Cycle counts for immediate, zero page, zero page,X and absolute
//! - Page-crossing penalty for indexed modes
//! - Zero page,X wrap-around

use cpu6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_lda_immediate() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA9, 0x42]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_lda_zero_sets_z() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA9, 0x00]);
    cpu.set_a(0x55);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lda_negative_sets_n() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA9, 0x80]);

    cpu.step().unwrap();

    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_lda_preserves_other_flags() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA9, 0x01]);
    cpu.set_flag_c(true);
    cpu.set_flag_v(true);
    cpu.set_flag_d(true);

    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_v());
    assert!(cpu.flag_d());
    assert!(cpu.flag_i());
}

#[test]
fn test_lda_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA5, 0x42]);
    cpu.memory_mut().write(0x0042, 0x37);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_lda_zero_page_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xB5, 0x40]);
    cpu.memory_mut().write(0x0045, 0x99);
    cpu.set_x(0x05);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x99);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_zero_page_x_wraps_within_page_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xB5, 0xFF]);
    cpu.memory_mut().write(0x0001, 0x11);
    cpu.memory_mut().write(0x0101, 0x22);
    cpu.set_x(0x02);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_absolute() {
    let mut cpu = setup_cpu();
    // LDA $1234: operand is little-endian
    cpu.memory_mut().load(0x8000, &[0xAD, 0x34, 0x12]);
    cpu.memory_mut().write(0x1234, 0x77);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x77);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_absolute_x_no_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xBD, 0x00, 0x12]);
    cpu.memory_mut().write(0x1210, 0x5A);
    cpu.set_x(0x10);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x5A);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_absolute_x_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xBD, 0xF0, 0x12]);
    cpu.memory_mut().write(0x1300, 0xA5);
    cpu.set_x(0x10);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xA5);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_lda_absolute_y_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xB9, 0xFF, 0x20]);
    cpu.memory_mut().write(0x2100, 0x01);
    cpu.set_y(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x01);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_lda_indirect_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA1, 0x20]);
    cpu.memory_mut().load(0x0024, &[0x00, 0x30]);
    cpu.memory_mut().write(0x3000, 0x66);
    cpu.set_x(0x04);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x66);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_lda_indirect_y() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xB1, 0x20]);
    cpu.memory_mut().load(0x0020, &[0x00, 0x30]);
    cpu.memory_mut().write(0x3005, 0x44);
    cpu.set_y(0x05);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x44);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_lda_indirect_y_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xB1, 0x20]);
    cpu.memory_mut().load(0x0020, &[0xFF, 0x30]);
    cpu.memory_mut().write(0x3100, 0x45);
    cpu.set_y(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x45);
    assert_eq!(cpu.cycles(), 6);
}
