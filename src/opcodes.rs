//! # Opcode Table
//!
//! The 256-entry table mapping each opcode byte to its instruction record.
//! It is the single source of truth for decoding: the fetch loop consults it
//! to learn how many operand bytes follow an opcode, and the dispatcher uses
//! the record's [`Mnemonic`] tag to pick the behaviour.
//!
//! The table holds the 151 documented opcodes. Every other byte is `None`,
//! which the engine reports as an invalid opcode.

use std::fmt;

use crate::addressing::AddressingMode;

/// Instruction identity, the tag the dispatcher matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Mnemonic {
    /// Three-letter assembler name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoding record for a single opcode.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.operand_bytes, 1);
///
/// assert!(OPCODE_TABLE[0xFF].is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Which instruction this opcode performs.
    pub mnemonic: Mnemonic,

    /// How the operand is interpreted.
    pub addressing_mode: AddressingMode,

    /// Operand bytes fetched after the opcode (0, 1 or 2).
    pub operand_bytes: u8,
}

impl fmt::Display for OpcodeMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mnemonic, self.addressing_mode.label())
    }
}

const fn op(mnemonic: Mnemonic, addressing_mode: AddressingMode) -> Option<OpcodeMetadata> {
    Some(OpcodeMetadata {
        mnemonic,
        addressing_mode,
        operand_bytes: addressing_mode.operand_bytes(),
    })
}

/// Complete 256-entry opcode table indexed by opcode byte value.
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    use AddressingMode::*;
    use Mnemonic::*;

    let mut t: [Option<OpcodeMetadata>; 256] = [None; 256];

    // Arithmetic
    t[0x69] = op(Adc, Immediate);
    t[0x65] = op(Adc, ZeroPage);
    t[0x75] = op(Adc, ZeroPageX);
    t[0x6D] = op(Adc, Absolute);
    t[0x7D] = op(Adc, AbsoluteX);
    t[0x79] = op(Adc, AbsoluteY);
    t[0x61] = op(Adc, IndirectX);
    t[0x71] = op(Adc, IndirectY);

    t[0xE9] = op(Sbc, Immediate);
    t[0xE5] = op(Sbc, ZeroPage);
    t[0xF5] = op(Sbc, ZeroPageX);
    t[0xED] = op(Sbc, Absolute);
    t[0xFD] = op(Sbc, AbsoluteX);
    t[0xF9] = op(Sbc, AbsoluteY);
    t[0xE1] = op(Sbc, IndirectX);
    t[0xF1] = op(Sbc, IndirectY);

    // Bitwise
    t[0x29] = op(And, Immediate);
    t[0x25] = op(And, ZeroPage);
    t[0x35] = op(And, ZeroPageX);
    t[0x2D] = op(And, Absolute);
    t[0x3D] = op(And, AbsoluteX);
    t[0x39] = op(And, AbsoluteY);
    t[0x21] = op(And, IndirectX);
    t[0x31] = op(And, IndirectY);

    t[0x09] = op(Ora, Immediate);
    t[0x05] = op(Ora, ZeroPage);
    t[0x15] = op(Ora, ZeroPageX);
    t[0x0D] = op(Ora, Absolute);
    t[0x1D] = op(Ora, AbsoluteX);
    t[0x19] = op(Ora, AbsoluteY);
    t[0x01] = op(Ora, IndirectX);
    t[0x11] = op(Ora, IndirectY);

    t[0x49] = op(Eor, Immediate);
    t[0x45] = op(Eor, ZeroPage);
    t[0x55] = op(Eor, ZeroPageX);
    t[0x4D] = op(Eor, Absolute);
    t[0x5D] = op(Eor, AbsoluteX);
    t[0x59] = op(Eor, AbsoluteY);
    t[0x41] = op(Eor, IndirectX);
    t[0x51] = op(Eor, IndirectY);

    t[0x24] = op(Bit, ZeroPage);
    t[0x2C] = op(Bit, Absolute);

    // Shifts and rotates
    t[0x0A] = op(Asl, Accumulator);
    t[0x06] = op(Asl, ZeroPage);
    t[0x16] = op(Asl, ZeroPageX);
    t[0x0E] = op(Asl, Absolute);
    t[0x1E] = op(Asl, AbsoluteX);

    t[0x4A] = op(Lsr, Accumulator);
    t[0x46] = op(Lsr, ZeroPage);
    t[0x56] = op(Lsr, ZeroPageX);
    t[0x4E] = op(Lsr, Absolute);
    t[0x5E] = op(Lsr, AbsoluteX);

    t[0x2A] = op(Rol, Accumulator);
    t[0x26] = op(Rol, ZeroPage);
    t[0x36] = op(Rol, ZeroPageX);
    t[0x2E] = op(Rol, Absolute);
    t[0x3E] = op(Rol, AbsoluteX);

    t[0x6A] = op(Ror, Accumulator);
    t[0x66] = op(Ror, ZeroPage);
    t[0x76] = op(Ror, ZeroPageX);
    t[0x6E] = op(Ror, Absolute);
    t[0x7E] = op(Ror, AbsoluteX);

    // Compare
    t[0xC9] = op(Cmp, Immediate);
    t[0xC5] = op(Cmp, ZeroPage);
    t[0xD5] = op(Cmp, ZeroPageX);
    t[0xCD] = op(Cmp, Absolute);
    t[0xDD] = op(Cmp, AbsoluteX);
    t[0xD9] = op(Cmp, AbsoluteY);
    t[0xC1] = op(Cmp, IndirectX);
    t[0xD1] = op(Cmp, IndirectY);

    t[0xE0] = op(Cpx, Immediate);
    t[0xE4] = op(Cpx, ZeroPage);
    t[0xEC] = op(Cpx, Absolute);

    t[0xC0] = op(Cpy, Immediate);
    t[0xC4] = op(Cpy, ZeroPage);
    t[0xCC] = op(Cpy, Absolute);

    // Increment and decrement
    t[0xE6] = op(Inc, ZeroPage);
    t[0xF6] = op(Inc, ZeroPageX);
    t[0xEE] = op(Inc, Absolute);
    t[0xFE] = op(Inc, AbsoluteX);
    t[0xE8] = op(Inx, Implicit);
    t[0xC8] = op(Iny, Implicit);

    t[0xC6] = op(Dec, ZeroPage);
    t[0xD6] = op(Dec, ZeroPageX);
    t[0xCE] = op(Dec, Absolute);
    t[0xDE] = op(Dec, AbsoluteX);
    t[0xCA] = op(Dex, Implicit);
    t[0x88] = op(Dey, Implicit);

    // Branches
    t[0x10] = op(Bpl, Relative);
    t[0x30] = op(Bmi, Relative);
    t[0x50] = op(Bvc, Relative);
    t[0x70] = op(Bvs, Relative);
    t[0x90] = op(Bcc, Relative);
    t[0xB0] = op(Bcs, Relative);
    t[0xD0] = op(Bne, Relative);
    t[0xF0] = op(Beq, Relative);

    // Jumps and subroutines
    t[0x4C] = op(Jmp, Absolute);
    t[0x6C] = op(Jmp, Indirect);
    t[0x20] = op(Jsr, Absolute);
    t[0x40] = op(Rti, Implicit);
    t[0x60] = op(Rts, Implicit);

    // Stack
    t[0x48] = op(Pha, Implicit);
    t[0x08] = op(Php, Implicit);
    t[0x68] = op(Pla, Implicit);
    t[0x28] = op(Plp, Implicit);

    // Flags
    t[0x18] = op(Clc, Implicit);
    t[0x38] = op(Sec, Implicit);
    t[0x58] = op(Cli, Implicit);
    t[0x78] = op(Sei, Implicit);
    t[0xB8] = op(Clv, Implicit);
    t[0xD8] = op(Cld, Implicit);
    t[0xF8] = op(Sed, Implicit);

    // Loads
    t[0xA9] = op(Lda, Immediate);
    t[0xA5] = op(Lda, ZeroPage);
    t[0xB5] = op(Lda, ZeroPageX);
    t[0xAD] = op(Lda, Absolute);
    t[0xBD] = op(Lda, AbsoluteX);
    t[0xB9] = op(Lda, AbsoluteY);
    t[0xA1] = op(Lda, IndirectX);
    t[0xB1] = op(Lda, IndirectY);

    t[0xA2] = op(Ldx, Immediate);
    t[0xA6] = op(Ldx, ZeroPage);
    t[0xB6] = op(Ldx, ZeroPageY);
    t[0xAE] = op(Ldx, Absolute);
    t[0xBE] = op(Ldx, AbsoluteY);

    t[0xA0] = op(Ldy, Immediate);
    t[0xA4] = op(Ldy, ZeroPage);
    t[0xB4] = op(Ldy, ZeroPageX);
    t[0xAC] = op(Ldy, Absolute);
    t[0xBC] = op(Ldy, AbsoluteX);

    // Stores
    t[0x85] = op(Sta, ZeroPage);
    t[0x95] = op(Sta, ZeroPageX);
    t[0x8D] = op(Sta, Absolute);
    t[0x9D] = op(Sta, AbsoluteX);
    t[0x99] = op(Sta, AbsoluteY);
    t[0x81] = op(Sta, IndirectX);
    t[0x91] = op(Sta, IndirectY);

    t[0x86] = op(Stx, ZeroPage);
    t[0x96] = op(Stx, ZeroPageY);
    t[0x8E] = op(Stx, Absolute);

    t[0x84] = op(Sty, ZeroPage);
    t[0x94] = op(Sty, ZeroPageX);
    t[0x8C] = op(Sty, Absolute);

    // Register transfers
    t[0xAA] = op(Tax, Implicit);
    t[0xA8] = op(Tay, Implicit);
    t[0xBA] = op(Tsx, Implicit);
    t[0x8A] = op(Txa, Implicit);
    t[0x9A] = op(Txs, Implicit);
    t[0x98] = op(Tya, Implicit);

    // Misc. BRK is followed by one signature byte, which is fetched and ignored.
    t[0xEA] = op(Nop, Implicit);
    t[0x00] = Some(OpcodeMetadata {
        mnemonic: Brk,
        addressing_mode: Implicit,
        operand_bytes: 1,
    });

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_opcode_count() {
        let count = OPCODE_TABLE.iter().filter(|entry| entry.is_some()).count();
        assert_eq!(count, 151);
    }

    #[test]
    fn test_operand_bytes_follow_mode() {
        for (opcode, entry) in OPCODE_TABLE.iter().enumerate() {
            let Some(metadata) = entry else { continue };
            if metadata.mnemonic == Mnemonic::Brk {
                continue;
            }
            assert_eq!(
                metadata.operand_bytes,
                metadata.addressing_mode.operand_bytes(),
                "opcode 0x{opcode:02X}"
            );
        }
    }

    #[test]
    fn test_lsr_block_is_not_asl() {
        for opcode in [0x4A, 0x46, 0x56, 0x4E, 0x5E] {
            assert_eq!(OPCODE_TABLE[opcode].unwrap().mnemonic, Mnemonic::Lsr);
        }
    }

    #[test]
    fn test_pre_indexed_indirect_takes_one_byte() {
        for opcode in [0x01, 0x21, 0x41, 0x61, 0x81, 0xA1, 0xC1, 0xE1] {
            let metadata = OPCODE_TABLE[opcode].unwrap();
            assert_eq!(metadata.addressing_mode, AddressingMode::IndirectX);
            assert_eq!(metadata.operand_bytes, 1);
        }
    }

    #[test]
    fn test_brk_consumes_signature_byte() {
        let brk = OPCODE_TABLE[0x00].unwrap();
        assert_eq!(brk.mnemonic, Mnemonic::Brk);
        assert_eq!(brk.operand_bytes, 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(OPCODE_TABLE[0xB1].unwrap().to_string(), "LDA (ind),y");
        assert_eq!(OPCODE_TABLE[0x4A].unwrap().to_string(), "LSR a");
    }
}
