//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA, TSX, TXS. All update Z and N from the destination
//! except TXS, which leaves the flags alone.

use crate::{Cpu, ExecutionError, MemoryBus};

/// TAX: X = A.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.x = cpu.a;
    cpu.flags.update_zn(cpu.x);
    Ok(())
}

/// TAY: Y = A.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.y = cpu.a;
    cpu.flags.update_zn(cpu.y);
    Ok(())
}

/// TXA: A = X.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.a = cpu.x;
    cpu.flags.update_zn(cpu.a);
    Ok(())
}

/// TYA: A = Y.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.a = cpu.y;
    cpu.flags.update_zn(cpu.a);
    Ok(())
}

/// TSX: X = SP.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.x = cpu.sp;
    cpu.flags.update_zn(cpu.x);
    Ok(())
}

/// TXS: SP = X. No flags.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.sp = cpu.x;
    Ok(())
}
