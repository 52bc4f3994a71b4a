//! Tests for register transfers and the flag set/clear instructions.

use cpu6502::{Cpu, FlatMemory};

/// Helper function to create a CPU with `program` at 0x8000
fn setup_cpu(program: &[u8]) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_reset_vector(0x8000);
    memory.load(0x8000, program);
    Cpu::new(memory)
}

// ========== Transfers ==========

#[test]
fn test_tax_sets_zero() {
    let mut cpu = setup_cpu(&[0xAA]);
    cpu.set_x(0x12);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flags().zero);
}

#[test]
fn test_tay_txa_tya() {
    // TAY; LDX #$90; TXA; TYA
    let mut cpu = setup_cpu(&[0xA8, 0xA2, 0x90, 0x8A, 0x98]);
    cpu.set_a(0x33);

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x33);

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x90);
    assert!(cpu.flags().negative);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x33);
    assert!(!cpu.flags().negative);
}

#[test]
fn test_tsx_sets_negative() {
    let mut cpu = setup_cpu(&[0xBA]);
    cpu.set_sp(0x80);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flags().negative);
}

#[test]
fn test_txs_leaves_flags() {
    let mut cpu = setup_cpu(&[0x9A]);

    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0x00);
    assert!(!cpu.flags().zero);
}

// ========== Flag instructions ==========

#[test]
fn test_sec_clc() {
    let mut cpu = setup_cpu(&[0x38, 0x18]);

    cpu.step().unwrap();
    assert!(cpu.flags().carry);

    cpu.step().unwrap();
    assert!(!cpu.flags().carry);
}

#[test]
fn test_cli_sei() {
    let mut cpu = setup_cpu(&[0x58, 0x78]);

    cpu.step().unwrap();
    assert!(!cpu.flags().interrupt_disable);

    cpu.step().unwrap();
    assert!(cpu.flags().interrupt_disable);
}

#[test]
fn test_sed_cld() {
    let mut cpu = setup_cpu(&[0xF8, 0xD8]);

    cpu.step().unwrap();
    assert!(cpu.flags().decimal_mode);

    cpu.step().unwrap();
    assert!(!cpu.flags().decimal_mode);
}

#[test]
fn test_clv() {
    let mut cpu = setup_cpu(&[0xB8]);
    cpu.flags_mut().overflow = true;

    cpu.step().unwrap();

    assert!(!cpu.flags().overflow);
}

#[test]
fn test_decimal_mode_does_not_change_arithmetic() {
    // SED; ADC #$09
    let mut cpu = setup_cpu(&[0xF8, 0x69, 0x09]);
    cpu.set_a(0x09);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x12);
}
