//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic, logical and compare operations:
//! - ADC, SBC: clamped add/subtract
//! - AND, ORA, EOR: bitwise operations on the accumulator
//! - BIT: bit test
//! - CMP, CPX, CPY: compare register with memory
//!
//! ## Arithmetic flags
//!
//! ADC and SBC do not wrap. The result is clamped into 0..=255 and Carry and
//! Overflow are derived from the clamped accumulator:
//!
//! - C is set when `operand + A >= 256`
//! - V is set when `operand + A >= 128`
//!
//! Neither flag is ever cleared by these instructions, and the incoming
//! carry is not added. Compares update Z and N only; Carry is left alone.

use crate::cpu::clamp_byte;
use crate::{AddressingMode, Cpu, ExecutionError, MemoryBus};

/// Executes the ADC (Add) instruction.
///
/// A = clamp(A + M). Updates Z and N from the result, then sets C and V per
/// the module rules.
pub(crate) fn execute_adc<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(mode, operand)?;
    cpu.a = clamp_byte(i32::from(cpu.a) + i32::from(value));
    cpu.flags.update_zn(cpu.a);
    set_sticky_carry_overflow(cpu, value);
    Ok(())
}

/// Executes the SBC (Subtract) instruction.
///
/// A = clamp(A - M), with the same flag handling as ADC.
pub(crate) fn execute_sbc<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(mode, operand)?;
    cpu.a = clamp_byte(i32::from(cpu.a) - i32::from(value));
    cpu.flags.update_zn(cpu.a);
    set_sticky_carry_overflow(cpu, value);
    Ok(())
}

fn set_sticky_carry_overflow<M: MemoryBus>(cpu: &mut Cpu<M>, value: u8) {
    let sum = u16::from(value) + u16::from(cpu.a);
    if sum >= 256 {
        cpu.flags.carry = true;
    }
    if sum >= 128 {
        cpu.flags.overflow = true;
    }
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(mode, operand)?;
    cpu.a &= value;
    cpu.flags.update_zn(cpu.a);
    Ok(())
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(mode, operand)?;
    cpu.a |= value;
    cpu.flags.update_zn(cpu.a);
    Ok(())
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(mode, operand)?;
    cpu.a ^= value;
    cpu.flags.update_zn(cpu.a);
    Ok(())
}

/// Executes the BIT (Bit Test) instruction.
///
/// Flags affected:
/// - Z: set if A & M is zero
/// - N: bit 7 of M
/// - V: bit 6 of M
///
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(mode, operand)?;
    cpu.flags.zero = cpu.a & value == 0;
    cpu.flags.negative = value & 0x80 != 0;
    cpu.flags.overflow = value & 0x40 != 0;
    Ok(())
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(mode, operand)?;
    let register = cpu.a;
    compare(cpu, register, value);
    Ok(())
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(mode, operand)?;
    let register = cpu.x;
    compare(cpu, register, value);
    Ok(())
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(mode, operand)?;
    let register = cpu.y;
    compare(cpu, register, value);
    Ok(())
}

// Z from equality, N from bit 7 of the wrapped difference. Carry untouched.
fn compare<M: MemoryBus>(cpu: &mut Cpu<M>, register: u8, value: u8) {
    let diff = register.wrapping_sub(value);
    cpu.flags.zero = register == value;
    cpu.flags.negative = diff & 0x80 != 0;
}
