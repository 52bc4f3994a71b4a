//! Fuzz target for bounded program execution.
//!
//! Loads an arbitrary program at the reset target and runs it for a bounded
//! number of instructions. Any panic is a bug; decode faults are expected.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{Cpu, CpuConfig, FlatMemory, PowerOnSequence};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    origin: u16,
    program: Vec<u8>,
    scripted_power_on: bool,
    limit: u16,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(input.origin, &input.program);
    memory.set_reset_vector(input.origin);

    let power_on = if input.scripted_power_on {
        PowerOnSequence::Scripted
    } else {
        PowerOnSequence::VectorOnly
    };
    let mut cpu = Cpu::with_config(memory, CpuConfig::default().with_power_on(power_on));

    let _ = cpu.run_for(u64::from(input.limit));

    assert!(cpu.is_initialized());
    assert_eq!(cpu.status_byte() & 0x30, 0);
});
