//! # Branch Instructions
//!
//! Conditional branches: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS.
//!
//! All branches use relative addressing with a signed 8-bit offset
//! (-128..=127). The offset is added to PC as it stands after the operand
//! fetch. The result is clamped to the 16-bit range rather than wrapped.
//! When the condition fails PC is left where the fetch put it.
//!
//! No flags are affected.

use crate::cpu::clamp_word;
use crate::{Cpu, ExecutionError, Flags, MemoryBus};

fn branch_if<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    operand: u16,
    condition: impl Fn(&Flags) -> bool,
) -> Result<(), ExecutionError> {
    if condition(&cpu.flags) {
        let offset = operand as u8 as i8;
        cpu.pc = clamp_word(i32::from(cpu.pc) + i32::from(offset));
    }
    Ok(())
}

/// BCC: branch if Carry clear.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: u16) -> Result<(), ExecutionError> {
    branch_if(cpu, operand, |f| !f.carry)
}

/// BCS: branch if Carry set.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut Cpu<M>, operand: u16) -> Result<(), ExecutionError> {
    branch_if(cpu, operand, |f| f.carry)
}

/// BEQ: branch if Zero set.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut Cpu<M>, operand: u16) -> Result<(), ExecutionError> {
    branch_if(cpu, operand, |f| f.zero)
}

/// BNE: branch if Zero clear.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut Cpu<M>, operand: u16) -> Result<(), ExecutionError> {
    branch_if(cpu, operand, |f| !f.zero)
}

/// BMI: branch if Negative set.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut Cpu<M>, operand: u16) -> Result<(), ExecutionError> {
    branch_if(cpu, operand, |f| f.negative)
}

/// BPL: branch if Negative clear.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut Cpu<M>, operand: u16) -> Result<(), ExecutionError> {
    branch_if(cpu, operand, |f| !f.negative)
}

/// BVC: branch if Overflow clear.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: u16) -> Result<(), ExecutionError> {
    branch_if(cpu, operand, |f| !f.overflow)
}

/// BVS: branch if Overflow set.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut Cpu<M>, operand: u16) -> Result<(), ExecutionError> {
    branch_if(cpu, operand, |f| f.overflow)
}
