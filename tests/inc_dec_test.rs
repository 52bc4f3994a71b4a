//! Tests for INC, DEC, INX, INY, DEX and DEY.
//!
//! Results saturate at 0 and 255.

use cpu6502::{Cpu, FlatMemory};

/// Helper function to create a CPU with `program` at 0x8000
fn setup_cpu(program: &[u8]) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_reset_vector(0x8000);
    memory.load(0x8000, program);
    Cpu::new(memory)
}

#[test]
fn test_inx_saturates() {
    let mut cpu = setup_cpu(&[0xE8]);
    cpu.set_x(0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flags().negative);
    assert!(!cpu.flags().zero);
}

#[test]
fn test_dex_saturates() {
    let mut cpu = setup_cpu(&[0xCA]);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flags().zero);
}

#[test]
fn test_iny_and_dey() {
    let mut cpu = setup_cpu(&[0xC8, 0xC8, 0x88]);
    cpu.set_y(0x7F);

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flags().negative);

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x81);

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x80);
}

#[test]
fn test_inc_memory_saturates() {
    let mut cpu = setup_cpu(&[0xE6, 0x10]);
    cpu.memory_mut().poke(0x0010, 0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().peek(0x0010), 0xFF);
    assert!(cpu.flags().negative);
}

#[test]
fn test_inc_absolute_x() {
    let mut cpu = setup_cpu(&[0xFE, 0x00, 0x30]);
    cpu.set_x(0x05);
    cpu.memory_mut().poke(0x3005, 0x41);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().peek(0x3005), 0x42);
}

#[test]
fn test_dec_memory_to_zero() {
    let mut cpu = setup_cpu(&[0xC6, 0x10]);
    cpu.memory_mut().poke(0x0010, 0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().peek(0x0010), 0x00);
    assert!(cpu.flags().zero);
}

#[test]
fn test_dec_memory_saturates_at_zero() {
    let mut cpu = setup_cpu(&[0xCE, 0x00, 0x30]);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().peek(0x3000), 0x00);
    assert!(cpu.flags().zero);
}
