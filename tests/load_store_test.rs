//! Tests for the load and store instructions (LDA, LDX, LDY, STA, STX, STY).
//!
//! Tests cover:
//! - Every addressing mode the loads and stores use
//! - Z and N updates on loads, no flag changes on stores
//! - Index wrapping rules (zero page does not wrap, absolute does)

use cpu6502::{Cpu, FlatMemory};

/// Helper function to create a CPU with `program` at 0x8000 and the reset
/// vector pointing at it
fn setup_cpu(program: &[u8]) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_reset_vector(0x8000);
    memory.load(0x8000, program);
    Cpu::new(memory)
}

// ========== LDA ==========

#[test]
fn test_lda_immediate_zero() {
    let mut cpu = setup_cpu(&[0xA9, 0x00]);
    cpu.set_a(0x55);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flags().zero);
    assert!(!cpu.flags().negative);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_lda_immediate_negative() {
    let mut cpu = setup_cpu(&[0xA9, 0x80]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.flags().zero);
    assert!(cpu.flags().negative);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_lda_zero_page() {
    let mut cpu = setup_cpu(&[0xA5, 0x10]);
    cpu.memory_mut().poke(0x0010, 0x33);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x33);
}

#[test]
fn test_lda_zero_page_x_does_not_wrap() {
    // LDA $FF,X with X = 1 reads 0x0100, not 0x0000
    let mut cpu = setup_cpu(&[0xB5, 0xFF]);
    cpu.set_x(0x01);
    cpu.memory_mut().poke(0x0000, 0x11);
    cpu.memory_mut().poke(0x0100, 0x5A);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x5A);
}

#[test]
fn test_lda_absolute_x_wraps_address_space() {
    let mut cpu = setup_cpu(&[0xBD, 0xFF, 0xFF]);
    cpu.set_x(0x02);
    cpu.memory_mut().poke(0x0001, 0x77);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x77);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_lda_absolute_y() {
    let mut cpu = setup_cpu(&[0xB9, 0x00, 0x20]);
    cpu.set_y(0x10);
    cpu.memory_mut().poke(0x2010, 0xC3);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xC3);
    assert!(cpu.flags().negative);
}

#[test]
fn test_lda_indirect_x() {
    // Pointer at 0x24/0x25 -> 0x3000
    let mut cpu = setup_cpu(&[0xA1, 0x20]);
    cpu.set_x(0x04);
    cpu.memory_mut().load(0x0024, &[0x00, 0x30]);
    cpu.memory_mut().poke(0x3000, 0x42);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_lda_indirect_y() {
    // Pointer at 0x40 -> 0x30F0, plus Y = 0x20 -> 0x3110
    let mut cpu = setup_cpu(&[0xB1, 0x40]);
    cpu.set_y(0x20);
    cpu.memory_mut().load(0x0040, &[0xF0, 0x30]);
    cpu.memory_mut().poke(0x3110, 0x9C);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x9C);
}

#[test]
fn test_lda_indirect_x_pointer_leaves_page_zero() {
    // $F0 + X = 0x0110: pointer read from page one, not 0x0010
    let mut cpu = setup_cpu(&[0xA1, 0xF0]);
    cpu.set_x(0x20);
    cpu.memory_mut().load(0x0110, &[0x00, 0x30]);
    cpu.memory_mut().load(0x0010, &[0x00, 0x40]);
    cpu.memory_mut().poke(0x3000, 0x5A);
    cpu.memory_mut().poke(0x4000, 0x11);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x5A);
}

#[test]
fn test_lda_indirect_y_wraps_address_space() {
    // Pointer 0xFFF0 + Y = 0x20 wraps to 0x0010
    let mut cpu = setup_cpu(&[0xB1, 0x40]);
    cpu.set_y(0x20);
    cpu.memory_mut().load(0x0040, &[0xF0, 0xFF]);
    cpu.memory_mut().poke(0x0010, 0x77);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x77);
}

// ========== LDX / LDY ==========

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = setup_cpu(&[0xB6, 0x10]);
    cpu.set_y(0x05);
    cpu.memory_mut().poke(0x0015, 0x00);
    cpu.set_x(0x99);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flags().zero);
}

#[test]
fn test_ldx_zero_page_y_does_not_wrap() {
    // $F0,Y with Y = 0x20 reads 0x0110, not 0x0010
    let mut cpu = setup_cpu(&[0xB6, 0xF0]);
    cpu.set_y(0x20);
    cpu.memory_mut().poke(0x0010, 0x11);
    cpu.memory_mut().poke(0x0110, 0x6B);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x6B);
}

#[test]
fn test_ldy_absolute() {
    let mut cpu = setup_cpu(&[0xAC, 0x34, 0x12]);
    cpu.memory_mut().poke(0x1234, 0xFE);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0xFE);
    assert!(cpu.flags().negative);
    assert_eq!(cpu.pc(), 0x8003);
}

// ========== Stores ==========

#[test]
fn test_sta_absolute_leaves_flags() {
    let mut cpu = setup_cpu(&[0x8D, 0x00, 0x02]);
    cpu.set_a(0x00);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().peek(0x0200), 0x00);
    // Only the interrupt-disable flag from power-on
    assert_eq!(cpu.status_byte(), 0x04);
}

#[test]
fn test_sta_absolute_y() {
    let mut cpu = setup_cpu(&[0x99, 0x00, 0x02]);
    cpu.set_a(0x99);
    cpu.set_y(0x03);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().peek(0x0203), 0x99);
}

#[test]
fn test_sta_indirect_y() {
    let mut cpu = setup_cpu(&[0x91, 0x40]);
    cpu.set_a(0x5E);
    cpu.set_y(0x01);
    cpu.memory_mut().load(0x0040, &[0x00, 0x30]);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().peek(0x3001), 0x5E);
}

#[test]
fn test_stx_zero_page_y() {
    let mut cpu = setup_cpu(&[0x96, 0x10]);
    cpu.set_x(0xAB);
    cpu.set_y(0x02);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().peek(0x0012), 0xAB);
}

#[test]
fn test_sty_zero_page_x() {
    let mut cpu = setup_cpu(&[0x94, 0x10]);
    cpu.set_y(0xCD);
    cpu.set_x(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().peek(0x0011), 0xCD);
}

#[test]
fn test_load_then_store_program() {
    // LDA #$42; STA $0300; LDX $0300; BRK
    let mut cpu = setup_cpu(&[0xA9, 0x42, 0x8D, 0x00, 0x03, 0xAE, 0x00, 0x03, 0x00, 0x00]);

    let executed = cpu.run().unwrap();

    assert_eq!(executed, 4);
    assert_eq!(cpu.x(), 0x42);
    assert_eq!(cpu.memory().peek(0x0300), 0x42);
}
