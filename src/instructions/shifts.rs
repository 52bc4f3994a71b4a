//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each instruction works on the accumulator (Accumulator mode) or on a
//! memory byte (read, modify, write back). Carry is assigned the bit shifted
//! out; Z and N follow the stored result.

use crate::{AddressingMode, Cpu, ExecutionError, MemoryBus};

/// Reads the target byte, applies `op` to it and writes the result back.
///
/// `op` receives the old value and the incoming carry and returns the new
/// value and the outgoing carry.
fn modify<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
    op: impl Fn(u8, bool) -> (u8, bool),
) -> Result<(), ExecutionError> {
    let carry_in = cpu.flags.carry;

    let result = if mode == AddressingMode::Accumulator {
        let (result, carry_out) = op(cpu.a, carry_in);
        cpu.a = result;
        cpu.flags.carry = carry_out;
        result
    } else {
        let addr = cpu.effective_address(mode, operand)?;
        let value = cpu.read_byte(addr)?;
        let (result, carry_out) = op(value, carry_in);
        cpu.write_byte(addr, result)?;
        cpu.flags.carry = carry_out;
        result
    };

    cpu.flags.update_zn(result);
    Ok(())
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 becomes 0, bit 7 goes to Carry.
pub(crate) fn execute_asl<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    modify(cpu, mode, operand, |value, _| (value << 1, value & 0x80 != 0))
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 becomes 0, bit 0 goes to Carry. N is therefore always cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    modify(cpu, mode, operand, |value, _| (value >> 1, value & 0x01 != 0))
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old Carry enters bit 0, bit 7 goes to Carry.
pub(crate) fn execute_rol<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    modify(cpu, mode, operand, |value, carry| {
        ((value << 1) | u8::from(carry), value & 0x80 != 0)
    })
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old Carry enters bit 7, bit 0 goes to Carry.
pub(crate) fn execute_ror<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    modify(cpu, mode, operand, |value, carry| {
        ((value >> 1) | (u8::from(carry) << 7), value & 0x01 != 0)
    })
}
