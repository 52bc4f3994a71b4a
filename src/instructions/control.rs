//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR / RTS: subroutine call and return
//! - RTI: return from interrupt
//! - BRK: break, which halts the run loop
//!
//! JSR pushes the address of the byte following its operand with
//! [`Cpu::push16`], and RTS loads PC with exactly what [`Cpu::pop16`]
//! returns. The two are paired; neither adds or subtracts one.

use crate::{AddressingMode, Cpu, ExecutionError, MemoryBus};

/// Executes the JMP (Jump) instruction.
///
/// - Absolute (0x4C): PC = operand
/// - Indirect (0x6C): PC = word at operand. The high byte is read from
///   `operand + 1` even when that crosses a page.
pub(crate) fn execute_jmp<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
    operand: u16,
) -> Result<(), ExecutionError> {
    cpu.pc = match mode {
        AddressingMode::Absolute => operand,
        _ => cpu.effective_address(mode, operand)?,
    };
    Ok(())
}

/// Executes the JSR (Jump to Subroutine) instruction.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut Cpu<M>, operand: u16) -> Result<(), ExecutionError> {
    cpu.push16(cpu.pc)?;
    cpu.pc = operand;
    Ok(())
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.pc = cpu.pop16()?;
    Ok(())
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls a status byte and applies it with the set-only decode, then pulls
/// the return address.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    let status = cpu.pop8()?;
    cpu.flags.set_from_byte(status);
    cpu.pc = cpu.pop16()?;
    Ok(())
}

/// Executes the BRK (Break) instruction.
///
/// Sets the Break flag. The signature byte after the opcode has already been
/// fetched; nothing is pushed and no vector is read.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.flags.brk = true;
    Ok(())
}
