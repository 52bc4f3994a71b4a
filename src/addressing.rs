//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the instruction set and the
//! rules that turn an instruction's operand into a value or an effective
//! address.
//!
//! Index arithmetic only wraps where it would otherwise leave the 16-bit
//! address space. Zero-page indexing does *not* wrap inside page zero: `$FF,X`
//! with X = 1 addresses 0x0100.

use crate::{Cpu, ExecutionError, MemoryBus};

/// Addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ZeroPage,

    /// Zero page address plus X.
    ZeroPageX,

    /// Zero page address plus Y.
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the address
    /// following the operand.
    Relative,

    /// Full 16-bit address.
    Absolute,

    /// 16-bit address plus X, modulo 65536.
    AbsoluteX,

    /// 16-bit address plus Y, modulo 65536.
    AbsoluteY,

    /// The operand addresses a 16-bit little-endian pointer. Only used by JMP.
    Indirect,

    /// Pre-indexed indirect: (operand + X) addresses a 16-bit pointer.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Post-indexed indirect: operand addresses a 16-bit pointer, then Y is
    /// added to the pointer.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Short assembler-style label, e.g. `zp,x` or `(ind),y`.
    pub const fn label(self) -> &'static str {
        match self {
            AddressingMode::Implicit => "impl",
            AddressingMode::Accumulator => "a",
            AddressingMode::Immediate => "#",
            AddressingMode::ZeroPage => "zp",
            AddressingMode::ZeroPageX => "zp,x",
            AddressingMode::ZeroPageY => "zp,y",
            AddressingMode::Relative => "rel",
            AddressingMode::Absolute => "abs",
            AddressingMode::AbsoluteX => "abs,x",
            AddressingMode::AbsoluteY => "abs,y",
            AddressingMode::Indirect => "ind",
            AddressingMode::IndirectX => "(ind,x)",
            AddressingMode::IndirectY => "(ind),y",
        }
    }
}

impl<M: MemoryBus> Cpu<M> {
    /// Resolves the effective address of a memory operand.
    ///
    /// Panics if `mode` does not reference memory; the opcode table never
    /// pairs such a mode with a memory instruction.
    pub(crate) fn effective_address(
        &mut self,
        mode: AddressingMode,
        operand: u16,
    ) -> Result<u16, ExecutionError> {
        let addr = match mode {
            AddressingMode::ZeroPage | AddressingMode::Absolute => operand,
            AddressingMode::ZeroPageX => operand + u16::from(self.x),
            AddressingMode::ZeroPageY => operand + u16::from(self.y),
            AddressingMode::AbsoluteX => operand.wrapping_add(u16::from(self.x)),
            AddressingMode::AbsoluteY => operand.wrapping_add(u16::from(self.y)),
            AddressingMode::Indirect => self.read_short(operand)?,
            AddressingMode::IndirectX => self.read_short(operand + u16::from(self.x))?,
            AddressingMode::IndirectY => self
                .read_short(operand)?
                .wrapping_add(u16::from(self.y)),
            AddressingMode::Implicit
            | AddressingMode::Accumulator
            | AddressingMode::Immediate
            | AddressingMode::Relative => {
                unreachable!("{mode:?} has no effective address")
            }
        };
        Ok(addr)
    }

    /// Returns the byte an instruction operates on: the operand itself for
    /// immediate mode, the accumulator for accumulator mode, otherwise the
    /// byte at the effective address.
    pub(crate) fn operand_value(
        &mut self,
        mode: AddressingMode,
        operand: u16,
    ) -> Result<u8, ExecutionError> {
        match mode {
            AddressingMode::Immediate => Ok(operand as u8),
            AddressingMode::Accumulator => Ok(self.a),
            _ => {
                let addr = self.effective_address(mode, operand)?;
                self.read_byte(addr)
            }
        }
    }
}
