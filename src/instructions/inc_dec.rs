//! # Increment and Decrement Instructions
//!
//! - INC, DEC: memory
//! - INX, INY, DEX, DEY: index registers
//!
//! Results saturate at 0 and 255 instead of wrapping. Z and N follow the
//! stored value.

use crate::cpu::clamp_byte;
use crate::{AddressingMode, Cpu, ExecutionError, MemoryBus};

fn adjust_memory<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
    delta: i32,
) -> Result<(), ExecutionError> {
    let addr = cpu.effective_address(mode, operand)?;
    let value = cpu.read_byte(addr)?;
    let result = clamp_byte(i32::from(value) + delta);
    cpu.write_byte(addr, result)?;
    cpu.flags.update_zn(result);
    Ok(())
}

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    adjust_memory(cpu, mode, operand, 1)
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    adjust_memory(cpu, mode, operand, -1)
}

/// INX: X = min(X + 1, 255).
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.x = cpu.x.saturating_add(1);
    cpu.flags.update_zn(cpu.x);
    Ok(())
}

/// INY: Y = min(Y + 1, 255).
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.y = cpu.y.saturating_add(1);
    cpu.flags.update_zn(cpu.y);
    Ok(())
}

/// DEX: X = max(X - 1, 0).
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.x = cpu.x.saturating_sub(1);
    cpu.flags.update_zn(cpu.x);
    Ok(())
}

/// DEY: Y = max(Y - 1, 0).
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.y = cpu.y.saturating_sub(1);
    cpu.flags.update_zn(cpu.y);
    Ok(())
}
