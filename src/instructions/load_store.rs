//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: load a register and update Z and N
//! - STA, STX, STY: store a register to the effective address; no flags

use crate::{AddressingMode, Cpu, ExecutionError, MemoryBus};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Supports immediate, zero page (plain and X-indexed), absolute (plain, X-
/// and Y-indexed) and both indirect forms.
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    cpu.a = cpu.operand_value(mode, operand)?;
    cpu.flags.update_zn(cpu.a);
    Ok(())
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    cpu.x = cpu.operand_value(mode, operand)?;
    cpu.flags.update_zn(cpu.x);
    Ok(())
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    cpu.y = cpu.operand_value(mode, operand)?;
    cpu.flags.update_zn(cpu.y);
    Ok(())
}

fn store<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
    value: u8,
) -> Result<(), ExecutionError> {
    let addr = cpu.effective_address(mode, operand)?;
    cpu.write_byte(addr, value)
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    let value = cpu.a;
    store(cpu, mode, operand, value)
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    let value = cpu.x;
    store(cpu, mode, operand, value)
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    let value = cpu.y;
    store(cpu, mode, operand, value)
}
