//! Fuzz target for single-instruction execution.
//!
//! Builds an arbitrary register/flag state and memory image, executes one
//! instruction and checks the invariants that hold for every opcode.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{Cpu, ExecutionError, FlatMemory, OPCODE_TABLE};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU state applied after construction
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Fed through `set_flags_from_byte`
    status: u8,
}

/// Memory regions copied into the image
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Loaded at 0x4000 for absolute addressing
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.set_reset_vector(0x8000);
    memory.load(0x8000, &input.memory.instruction_bytes);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);

    let mut cpu = Cpu::new(memory);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    // Break would stop the step before it fetches
    cpu.set_flags_from_byte(input.cpu_state.status & !0x10);

    let opcode = input.memory.instruction_bytes[0];
    match cpu.step() {
        Ok(_) => assert!(OPCODE_TABLE[opcode as usize].is_some()),
        Err(ExecutionError::InvalidOpcode { opcode: got, address }) => {
            assert_eq!(got, opcode);
            assert_eq!(address, 0x8000);
            assert_eq!(cpu.pc(), 0x8000);
            assert_eq!(cpu.a(), input.cpu_state.a);
        }
        Err(ExecutionError::Bus(err)) => panic!("flat memory never faults: {err}"),
    }

    // The status byte never exposes Break or bit 5
    assert_eq!(cpu.status_byte() & 0x30, 0);
});
