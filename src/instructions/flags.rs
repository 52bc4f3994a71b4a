//! # Status Flag Manipulation Instructions
//!
//! Instructions that directly set or clear one status flag:
//! CLC, SEC, CLI, SEI, CLV, CLD, SED.
//!
//! All use implied addressing and touch no other state.

use crate::{Cpu, ExecutionError, MemoryBus};

/// CLC: clear Carry.
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.flags.carry = false;
    Ok(())
}

/// SEC: set Carry.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.flags.carry = true;
    Ok(())
}

/// CLI: clear Interrupt Disable.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.flags.interrupt_disable = false;
    Ok(())
}

/// SEI: set Interrupt Disable.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.flags.interrupt_disable = true;
    Ok(())
}

/// CLV: clear Overflow. There is no matching set instruction.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.flags.overflow = false;
    Ok(())
}

/// CLD: clear Decimal Mode.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.flags.decimal_mode = false;
    Ok(())
}

/// SED: set Decimal Mode. The flag is stored but arithmetic stays binary.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.flags.decimal_mode = true;
    Ok(())
}
