//! # Instruction Implementations
//!
//! Instruction behaviours, organized by category. Each one is a standalone
//! function taking the CPU, the addressing mode from the opcode table and the
//! already-fetched operand. By the time a behaviour runs, PC points past the
//! operand; only jumps, branches and returns move it further.
//!
//! ## Categories
//!
//! - **alu**: ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **control**: JMP, JSR, RTS, RTI, BRK, NOP
//! - **stack**: PHA, PHP, PLA, PLP
//! - **flags**: CLC, SEC, CLI, SEI, CLV, CLD, SED
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS

mod alu;
mod branches;
mod control;
mod flags;
mod inc_dec;
mod load_store;
mod shifts;
mod stack;
mod transfer;

use crate::{Cpu, ExecutionError, MemoryBus, Mnemonic, OpcodeMetadata};

/// Runs the behaviour selected by `metadata.mnemonic`.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    metadata: OpcodeMetadata,
    operand: u16,
) -> Result<(), ExecutionError> {
    let mode = metadata.addressing_mode;

    match metadata.mnemonic {
        Mnemonic::Adc => alu::execute_adc(cpu, mode, operand),
        Mnemonic::Sbc => alu::execute_sbc(cpu, mode, operand),
        Mnemonic::And => alu::execute_and(cpu, mode, operand),
        Mnemonic::Ora => alu::execute_ora(cpu, mode, operand),
        Mnemonic::Eor => alu::execute_eor(cpu, mode, operand),
        Mnemonic::Bit => alu::execute_bit(cpu, mode, operand),
        Mnemonic::Cmp => alu::execute_cmp(cpu, mode, operand),
        Mnemonic::Cpx => alu::execute_cpx(cpu, mode, operand),
        Mnemonic::Cpy => alu::execute_cpy(cpu, mode, operand),

        Mnemonic::Asl => shifts::execute_asl(cpu, mode, operand),
        Mnemonic::Lsr => shifts::execute_lsr(cpu, mode, operand),
        Mnemonic::Rol => shifts::execute_rol(cpu, mode, operand),
        Mnemonic::Ror => shifts::execute_ror(cpu, mode, operand),

        Mnemonic::Bcc => branches::execute_bcc(cpu, operand),
        Mnemonic::Bcs => branches::execute_bcs(cpu, operand),
        Mnemonic::Beq => branches::execute_beq(cpu, operand),
        Mnemonic::Bne => branches::execute_bne(cpu, operand),
        Mnemonic::Bmi => branches::execute_bmi(cpu, operand),
        Mnemonic::Bpl => branches::execute_bpl(cpu, operand),
        Mnemonic::Bvc => branches::execute_bvc(cpu, operand),
        Mnemonic::Bvs => branches::execute_bvs(cpu, operand),

        Mnemonic::Jmp => control::execute_jmp(cpu, mode, operand),
        Mnemonic::Jsr => control::execute_jsr(cpu, operand),
        Mnemonic::Rts => control::execute_rts(cpu),
        Mnemonic::Rti => control::execute_rti(cpu),
        Mnemonic::Brk => control::execute_brk(cpu),
        Mnemonic::Nop => Ok(()),

        Mnemonic::Inc => inc_dec::execute_inc(cpu, mode, operand),
        Mnemonic::Dec => inc_dec::execute_dec(cpu, mode, operand),
        Mnemonic::Inx => inc_dec::execute_inx(cpu),
        Mnemonic::Iny => inc_dec::execute_iny(cpu),
        Mnemonic::Dex => inc_dec::execute_dex(cpu),
        Mnemonic::Dey => inc_dec::execute_dey(cpu),

        Mnemonic::Lda => load_store::execute_lda(cpu, mode, operand),
        Mnemonic::Ldx => load_store::execute_ldx(cpu, mode, operand),
        Mnemonic::Ldy => load_store::execute_ldy(cpu, mode, operand),
        Mnemonic::Sta => load_store::execute_sta(cpu, mode, operand),
        Mnemonic::Stx => load_store::execute_stx(cpu, mode, operand),
        Mnemonic::Sty => load_store::execute_sty(cpu, mode, operand),

        Mnemonic::Pha => stack::execute_pha(cpu),
        Mnemonic::Php => stack::execute_php(cpu),
        Mnemonic::Pla => stack::execute_pla(cpu),
        Mnemonic::Plp => stack::execute_plp(cpu),

        Mnemonic::Clc => flags::execute_clc(cpu),
        Mnemonic::Sec => flags::execute_sec(cpu),
        Mnemonic::Cli => flags::execute_cli(cpu),
        Mnemonic::Sei => flags::execute_sei(cpu),
        Mnemonic::Clv => flags::execute_clv(cpu),
        Mnemonic::Cld => flags::execute_cld(cpu),
        Mnemonic::Sed => flags::execute_sed(cpu),

        Mnemonic::Tax => transfer::execute_tax(cpu),
        Mnemonic::Tay => transfer::execute_tay(cpu),
        Mnemonic::Txa => transfer::execute_txa(cpu),
        Mnemonic::Tya => transfer::execute_tya(cpu),
        Mnemonic::Tsx => transfer::execute_tsx(cpu),
        Mnemonic::Txs => transfer::execute_txs(cpu),
    }
}
