//! # 6502 Execution Engine
//!
//! An interpreter for the 8-bit accumulator processor of the MOS 6502 family,
//! running against memory supplied by the host.
//!
//! The engine owns the processor state (registers, flags, stack pointer) and
//! nothing else. Every byte it touches goes through a [`MemoryBus`] port that
//! the host constructs, so RAM, ROM and memory-mapped devices all live outside
//! the crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{Cpu, FlatMemory};
//!
//! let mut memory = FlatMemory::new();
//! memory.set_reset_vector(0x8000);
//! memory.load(0x8000, &[0xA9, 0x42, 0x00, 0x00]); // LDA #$42, BRK
//!
//! let mut cpu = Cpu::new(memory);
//! let executed = cpu.run().unwrap();
//!
//! assert_eq!(executed, 2);
//! assert_eq!(cpu.a(), 0x42);
//! assert!(cpu.flags().brk);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - processor state, stack primitives and the fetch-decode-execute loop
//! - `memory` - the `MemoryBus` port and two ready-made implementations
//! - `status` - status flags and the derived status byte
//! - `opcodes` - the 256-entry opcode table
//! - `addressing` - addressing modes and effective-address resolution
//! - `wasm` - JavaScript bindings (feature `wasm`)

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

// Instruction behaviours, dispatched from `cpu` (not part of the public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use addressing::AddressingMode;
pub use cpu::{Cpu, CpuConfig, PowerOnSequence, Register, RunState};
pub use memory::{Access, BusError, FlatMemory, FnMemory, MemoryBus};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use status::{Flags, StatusBit};

use thiserror::Error;

/// Errors that stop instruction execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The byte at `address` has no entry in the opcode table.
    ///
    /// The program counter is left pointing at the offending byte.
    #[error("invalid opcode 0x{opcode:02X} at 0x{address:04X}")]
    InvalidOpcode {
        /// Opcode byte that failed to decode
        opcode: u8,
        /// Address the opcode was read from
        address: u16,
    },

    /// The memory port reported a failure.
    #[error(transparent)]
    Bus(#[from] BusError),
}

/// Error returned when a register name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown register `{0}` (expected A, X, Y, SP or PC)")]
pub struct UnknownRegister(pub String);
