//! Tests for the conditional branch instructions.
//!
//! The target is PC after the operand plus the signed offset, saturated to
//! the 16-bit range.

use cpu6502::{Cpu, FlatMemory};

/// Helper function to create a CPU with `program` at `origin` and the reset
/// vector pointing at it
fn setup_cpu_at(origin: u16, program: &[u8]) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_reset_vector(origin);
    memory.load(origin, program);
    Cpu::new(memory)
}

#[test]
fn test_beq_branch_to_self() {
    let mut cpu = setup_cpu_at(0x8010, &[0xF0, 0xFE]);
    cpu.flags_mut().zero = true;

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8010);
}

#[test]
fn test_beq_not_taken() {
    let mut cpu = setup_cpu_at(0x8000, &[0xF0, 0x10]);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_bcc_forward() {
    let mut cpu = setup_cpu_at(0x8000, &[0x90, 0x05]);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8007);
}

#[test]
fn test_bcs_taken_when_carry_set() {
    let mut cpu = setup_cpu_at(0x8000, &[0xB0, 0x02]);
    cpu.flags_mut().carry = true;

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8004);
}

#[test]
fn test_bne_backward() {
    let mut cpu = setup_cpu_at(0x8000, &[0xEA, 0xEA, 0xD0, 0xFC]);

    cpu.step().unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_bmi_and_bpl() {
    let mut cpu = setup_cpu_at(0x8000, &[0x30, 0x10, 0x10, 0x02]);

    // BMI not taken, BPL taken
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8002);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8006);
}

#[test]
fn test_bvs_and_bvc() {
    let mut cpu = setup_cpu_at(0x8000, &[0x70, 0x01, 0x00, 0x50, 0x10]);
    cpu.flags_mut().overflow = true;

    // BVS skips the BRK, BVC falls through
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8003);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8005);
}

#[test]
fn test_branch_saturates_at_zero() {
    // BPL -128 from 0x0002
    let mut cpu = setup_cpu_at(0x0000, &[0x10, 0x80]);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0000);
}

#[test]
fn test_branch_saturates_at_top() {
    // BVC +127 from 0xFFF2
    let mut cpu = setup_cpu_at(0xFFF0, &[0x50, 0x7F]);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0xFFFF);
}

#[test]
fn test_branches_leave_flags() {
    let mut cpu = setup_cpu_at(0x8000, &[0xF0, 0x00]);
    cpu.flags_mut().zero = true;
    let before = cpu.flags();

    cpu.step().unwrap();

    // Power-on only adds interrupt-disable
    assert_eq!(cpu.flags().zero, before.zero);
    assert_eq!(cpu.flags().carry, before.carry);
    assert_eq!(cpu.status_byte(), 0x06);
}
