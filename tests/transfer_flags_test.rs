//! Tests for register transfers and the flag set/clear instructions.

use cpu6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_tax_tay() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xAA, 0xA8]);
    cpu.set_a(0x80);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x80);
    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag_n());
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_txa_tya_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x8A, 0x98]);
    cpu.set_a(0x55);
    cpu.set_y(0x01);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x01);
    assert!(!cpu.flag_z());
}

#[test]
fn test_tsx_sets_flags_txs_does_not() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xBA, 0x9A]);

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag_n());

    cpu.set_x(0x00);
    cpu.step().unwrap();
    assert_eq!(cpu.sp(), 0x00);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_flag_instructions() {
    let mut cpu = setup_cpu();
    // SEC; SED; CLI; CLC; CLD; SEI
    cpu.memory_mut()
        .load(0x8000, &[0x38, 0xF8, 0x58, 0x18, 0xD8, 0x78]);

    cpu.step().unwrap();
    assert!(cpu.flag_c());
    cpu.step().unwrap();
    assert!(cpu.flag_d());
    cpu.step().unwrap();
    assert!(!cpu.flag_i());
    cpu.step().unwrap();
    assert!(!cpu.flag_c());
    cpu.step().unwrap();
    assert!(!cpu.flag_d());
    cpu.step().unwrap();
    assert!(cpu.flag_i());

    assert_eq!(cpu.cycles(), 12);
}

#[test]
fn test_clv() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xB8);
    cpu.set_flag_v(true);

    cpu.step().unwrap();

    assert!(!cpu.flag_v());
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_nop_changes_nothing_but_pc() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xEA);
    let status = cpu.status();

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.status(), status);
    assert_eq!(cpu.a(), 0);
    assert_eq!(cpu.cycles(), 2);
}
