//! Run program example
//!
//! Loads a small program into flat memory, runs it to BRK and prints the
//! final register dump.
//!
//! The program sums 10 + 9 + ... + 1 into the accumulator, then calls a
//! subroutine that stores the result at 0x0200.
//!
//! Set `RUST_LOG=trace` to see every executed instruction.

use cpu6502::{Cpu, ExecutionError, FlatMemory};
use tracing_subscriber::EnvFilter;

const PROGRAM: [u8; 20] = [
    0xA2, 0x0A, // 8000: LDX #$0A
    0xA9, 0x00, // 8002: LDA #$00
    0x86, 0x10, // 8004: STX $10
    0x65, 0x10, // 8006: ADC $10
    0xCA, // 8008: DEX
    0xD0, 0xF9, // 8009: BNE $8004
    0x20, 0x10, 0x80, // 800B: JSR $8010
    0x00, 0x00, // 800E: BRK
    0x8D, 0x00, 0x02, // 8010: STA $0200
    0x60, // 8013: RTS
];

fn main() -> Result<(), ExecutionError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut memory = FlatMemory::new();
    memory.set_reset_vector(0x8000);
    memory.load(0x8000, &PROGRAM);

    let mut cpu = Cpu::new(memory);
    let executed = cpu.run()?;

    println!("Executed {executed} instructions");
    println!("{cpu}");
    println!("Result at 0x0200: {}", cpu.memory().peek(0x0200));

    Ok(())
}
