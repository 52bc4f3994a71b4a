//! # Stack Instructions
//!
//! PHA, PHP, PLA, PLP. The stack lives in page one and grows downward; see
//! [`Cpu::push8`] and [`Cpu::pop8`].

use crate::{Cpu, ExecutionError, MemoryBus};

/// PHA: push the accumulator.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.push8(cpu.a)
}

/// PHP: push the status byte. Break and bit 5 are never part of it.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    let status = cpu.status_byte();
    cpu.push8(status)
}

/// PLA: pull into the accumulator. Updates Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.a = cpu.pop8()?;
    cpu.flags.update_zn(cpu.a);
    Ok(())
}

/// PLP: pull a status byte.
///
/// Only flags whose bits are 1 are set; flags already set stay set.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    let status = cpu.pop8()?;
    cpu.flags.set_from_byte(status);
    Ok(())
}
