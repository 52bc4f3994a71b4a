//! # CPU State and Execution
//!
//! This module contains the [`Cpu`] struct representing the processor state
//! and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next byte to fetch
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status flags**: seven independent booleans, see [`Flags`]
//!
//! Register writes clamp rather than wrap: `set_register(Register::X, 300)`
//! stores 255, and INX on X = 255 leaves X at 255.
//!
//! ## Execution Model
//!
//! The first call to [`Cpu::step`], [`Cpu::run`] or [`Cpu::run_for`] runs the
//! power-on sequence, which loads PC from the reset vector and sets the
//! interrupt-disable flag. After that each step fetches an opcode, fetches
//! its operand bytes and executes it. Execution stops for good once the Break
//! flag is set (by BRK); only [`Cpu::reset`] makes the CPU runnable again.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info, trace, warn};

use crate::instructions;
use crate::{ExecutionError, Flags, MemoryBus, UnknownRegister, OPCODE_TABLE};

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Conventional location of the reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Bus accesses performed before the reset vector is read, in order.
///
/// Models the self-test and vector-pull activity of the real part.
const POWER_ON_SCRIPT: [(u16, Option<u8>); 7] = [
    (0x802E, None),
    (0x802F, None),
    (0x01B6, None),
    (0x01B6, Some(0x80)),
    (0x01B5, Some(0x30)),
    (0x8030, None),
    (0x8014, None),
];

/// Clamps `value` into the byte range.
pub fn clamp_byte(value: i32) -> u8 {
    value.clamp(0, 0xFF) as u8
}

/// Clamps `value` into the 16-bit range.
pub fn clamp_word(value: i32) -> u16 {
    value.clamp(0, 0xFFFF) as u16
}

/// Processor registers addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    /// Accumulator
    A,
    /// X index register
    X,
    /// Y index register
    Y,
    /// Stack pointer
    Sp,
    /// Program counter
    Pc,
}

impl FromStr for Register {
    type Err = UnknownRegister;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Register::A),
            "X" => Ok(Register::X),
            "Y" => Ok(Register::Y),
            "SP" => Ok(Register::Sp),
            "PC" => Ok(Register::Pc),
            _ => Err(UnknownRegister(s.to_string())),
        }
    }
}

/// Accesses performed when the CPU powers on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerOnSequence {
    /// Replay the fixed self-test accesses before reading the reset vector.
    #[default]
    Scripted,
    /// Only read the reset vector.
    VectorOnly,
}

/// Construction-time configuration.
///
/// # Examples
///
/// ```
/// use cpu6502::{Cpu, CpuConfig, FlatMemory, PowerOnSequence};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0xFFF0, &[0x00, 0x90]); // custom vector -> 0x9000
///
/// let config = CpuConfig::default()
///     .with_power_on(PowerOnSequence::VectorOnly)
///     .with_reset_vector(0xFFF0);
///
/// let mut cpu = Cpu::with_config(memory, config);
/// cpu.run().unwrap();
/// assert_eq!(cpu.pc(), 0x9002);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    /// Accesses performed on power-on.
    pub power_on: PowerOnSequence,
    /// Address of the little-endian word loaded into PC on power-on.
    pub reset_vector: u16,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            power_on: PowerOnSequence::Scripted,
            reset_vector: RESET_VECTOR,
        }
    }
}

impl CpuConfig {
    /// Selects the power-on sequence.
    pub fn with_power_on(mut self, power_on: PowerOnSequence) -> Self {
        self.power_on = power_on;
        self
    }

    /// Moves the reset vector.
    pub fn with_reset_vector(mut self, reset_vector: u16) -> Self {
        self.reset_vector = reset_vector;
        self
    }
}

/// Execution state of the fetch-decode-execute loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// The power-on sequence has not run yet.
    Uninitialized,
    /// Instructions will be executed.
    Running,
    /// Break is set; nothing more will execute until `reset`.
    Halted,
}

/// Processor state and execution context.
///
/// Generic over the memory port via the [`MemoryBus`] trait. The CPU owns its
/// port; use [`Cpu::memory`] / [`Cpu::memory_mut`] to reach it.
///
/// # Examples
///
/// ```
/// use cpu6502::{Cpu, FlatMemory, RunState};
///
/// let mut memory = FlatMemory::new();
/// memory.set_reset_vector(0x8000);
/// memory.load(0x8000, &[0xA2, 0x05, 0xCA, 0xD0, 0xFD, 0x00, 0x00]);
/// // LDX #5; loop: DEX; BNE loop; BRK
///
/// let mut cpu = Cpu::new(memory);
/// assert_eq!(cpu.state(), RunState::Uninitialized);
///
/// cpu.run().unwrap();
/// assert_eq!(cpu.x(), 0);
/// assert_eq!(cpu.state(), RunState::Halted);
/// ```
pub struct Cpu<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next byte to fetch)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    pub(crate) flags: Flags,

    /// Whether the power-on sequence has run
    pub(crate) initialized: bool,

    config: CpuConfig,

    pub(crate) memory: M,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a CPU with the default configuration.
    ///
    /// Registers start at zero, SP at 0xFF and every flag clear. No memory is
    /// touched until the first `step`/`run`.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a CPU with an explicit configuration.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFF,
            flags: Flags::default(),
            initialized: false,
            config,
            memory,
        }
    }

    /// Returns the configuration the CPU was built with.
    pub fn config(&self) -> CpuConfig {
        self.config
    }

    /// Returns the CPU to its construction state.
    ///
    /// Registers and flags are cleared and the power-on sequence will run
    /// again on the next `step`/`run`. Memory is left untouched.
    pub fn reset(&mut self) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.pc = 0x0000;
        self.sp = 0xFF;
        self.flags = Flags::default();
        self.initialized = false;
        debug!("cpu reset");
    }

    /// Returns the current state of the execution loop.
    pub fn state(&self) -> RunState {
        if !self.initialized {
            RunState::Uninitialized
        } else if self.flags.brk {
            RunState::Halted
        } else {
            RunState::Running
        }
    }

    /// Returns true once the power-on sequence has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // ========== Execution ==========

    /// Executes one instruction.
    ///
    /// Runs the power-on sequence first if needed. If Break is already set
    /// nothing is fetched and `Halted` is returned.
    ///
    /// # Errors
    ///
    /// - [`ExecutionError::InvalidOpcode`] if the byte at PC is not in the
    ///   opcode table. No register is modified; PC still points at the byte.
    /// - [`ExecutionError::Bus`] if the memory port fails.
    pub fn step(&mut self) -> Result<RunState, ExecutionError> {
        self.ensure_powered_on()?;
        if self.flags.brk {
            return Ok(RunState::Halted);
        }
        self.execute_next()?;
        Ok(self.state())
    }

    /// Runs until Break is set and returns the number of instructions
    /// executed by this call.
    ///
    /// There is no instruction limit; a program that never executes BRK runs
    /// forever. Use [`Cpu::run_for`] to bound execution.
    pub fn run(&mut self) -> Result<u64, ExecutionError> {
        self.ensure_powered_on()?;

        let mut executed = 0;
        while !self.flags.brk {
            self.execute_next()?;
            executed += 1;
        }

        info!(pc = self.pc, executed, "halted on break");
        Ok(executed)
    }

    /// Executes at most `limit` instructions, stopping early on Break.
    pub fn run_for(&mut self, limit: u64) -> Result<RunState, ExecutionError> {
        self.ensure_powered_on()?;

        for _ in 0..limit {
            if self.flags.brk {
                break;
            }
            self.execute_next()?;
        }

        if self.flags.brk {
            info!(pc = self.pc, "halted on break");
        }
        Ok(self.state())
    }

    fn ensure_powered_on(&mut self) -> Result<(), ExecutionError> {
        if !self.initialized {
            self.power_on()?;
        }
        Ok(())
    }

    /// Performs the power-on microsequence, loads PC from the reset vector
    /// and sets the interrupt-disable flag.
    fn power_on(&mut self) -> Result<(), ExecutionError> {
        if self.config.power_on == PowerOnSequence::Scripted {
            for (addr, write) in POWER_ON_SCRIPT {
                match write {
                    Some(value) => self.write_byte(addr, value)?,
                    None => {
                        self.read_byte(addr)?;
                    }
                }
            }
        }

        self.pc = self.read_short(self.config.reset_vector)?;
        self.flags.interrupt_disable = true;
        self.initialized = true;

        debug!(
            pc = self.pc,
            sequence = ?self.config.power_on,
            "power-on sequence complete"
        );
        Ok(())
    }

    /// Fetches, decodes and executes the instruction at PC.
    fn execute_next(&mut self) -> Result<(), ExecutionError> {
        let address = self.pc;
        let opcode = self.read_byte(address)?;

        let Some(metadata) = OPCODE_TABLE[opcode as usize] else {
            warn!(opcode, address, "invalid opcode");
            return Err(ExecutionError::InvalidOpcode { opcode, address });
        };
        self.pc = self.pc.wrapping_add(1);

        let operand = match metadata.operand_bytes {
            0 => 0,
            1 => u16::from(self.fetch8()?),
            _ => self.fetch16()?,
        };

        trace!(address, opcode, instruction = %metadata, operand, "execute");
        instructions::execute(self, metadata, operand)
    }

    /// Reads the byte at PC and advances PC by one.
    pub fn fetch8(&mut self) -> Result<u8, ExecutionError> {
        let value = self.read_byte(self.pc)?;
        self.pc = self.pc.wrapping_add(1);
        Ok(value)
    }

    /// Reads the little-endian word at PC and advances PC by two.
    pub fn fetch16(&mut self) -> Result<u16, ExecutionError> {
        let lo = self.fetch8()?;
        let hi = self.fetch8()?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    // ========== Memory ==========

    /// Reads one byte through the memory port.
    pub fn read_byte(&mut self, addr: u16) -> Result<u8, ExecutionError> {
        Ok(self.memory.read(addr)?)
    }

    /// Writes one byte through the memory port.
    pub fn write_byte(&mut self, addr: u16, value: u8) -> Result<(), ExecutionError> {
        Ok(self.memory.write(addr, value)?)
    }

    /// Reads a little-endian word: low byte at `addr`, high byte at
    /// `addr + 1` (wrapping at 0xFFFF).
    pub fn read_short(&mut self, addr: u16) -> Result<u16, ExecutionError> {
        let lo = self.read_byte(addr)?;
        let hi = self.read_byte(addr.wrapping_add(1))?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Writes a little-endian word: low byte at `addr`, high byte at
    /// `addr + 1` (wrapping at 0xFFFF).
    pub fn write_short(&mut self, addr: u16, value: u16) -> Result<(), ExecutionError> {
        let [lo, hi] = value.to_le_bytes();
        self.write_byte(addr, lo)?;
        self.write_byte(addr.wrapping_add(1), hi)
    }

    /// Returns a reference to the memory port.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory port.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory port.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Stack ==========

    /// Writes `value` at the top of the stack and decrements SP.
    ///
    /// SP wraps from 0x00 to 0xFF.
    pub fn push8(&mut self, value: u8) -> Result<(), ExecutionError> {
        self.write_byte(STACK_BASE + u16::from(self.sp), value)?;
        self.sp = self.sp.wrapping_sub(1);
        Ok(())
    }

    /// Increments SP, reads the byte there and zeroes the vacated slot.
    pub fn pop8(&mut self) -> Result<u8, ExecutionError> {
        self.sp = self.sp.wrapping_add(1);
        let addr = STACK_BASE + u16::from(self.sp);
        let value = self.read_byte(addr)?;
        self.write_byte(addr, 0)?;
        Ok(value)
    }

    /// Pushes a word, low byte first.
    ///
    /// This is the reverse of the hardware's high-then-low order;
    /// [`Cpu::pop16`] undoes it.
    pub fn push16(&mut self, value: u16) -> Result<(), ExecutionError> {
        let [lo, hi] = value.to_le_bytes();
        self.push8(lo)?;
        self.push8(hi)
    }

    /// Pops a word pushed by [`Cpu::push16`]: high byte first, then low.
    pub fn pop16(&mut self) -> Result<u16, ExecutionError> {
        let hi = self.pop8()?;
        let lo = self.pop8()?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    // ========== Registers ==========

    /// Returns a register by name. 8-bit registers are zero-extended.
    pub fn register(&self, reg: Register) -> u16 {
        match reg {
            Register::A => u16::from(self.a),
            Register::X => u16::from(self.x),
            Register::Y => u16::from(self.y),
            Register::Sp => u16::from(self.sp),
            Register::Pc => self.pc,
        }
    }

    /// Sets a register by name, clamping `value` to the register's range:
    /// 0..=255 for A, X, Y and SP, 0..=65535 for PC.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{Cpu, FlatMemory, Register};
    ///
    /// let mut cpu = Cpu::new(FlatMemory::new());
    ///
    /// cpu.set_register(Register::A, 300);
    /// assert_eq!(cpu.register(Register::A), 255);
    ///
    /// cpu.set_register(Register::Pc, 0x1234);
    /// assert_eq!(cpu.register(Register::Pc), 0x1234);
    /// ```
    pub fn set_register(&mut self, reg: Register, value: i32) {
        match reg {
            Register::A => self.a = clamp_byte(value),
            Register::X => self.x = clamp_byte(value),
            Register::Y => self.y = clamp_byte(value),
            Register::Sp => self.sp = clamp_byte(value),
            Register::Pc => self.pc = clamp_word(value),
        }
    }

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    // ========== Flags ==========

    /// Returns a copy of the status flags.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Returns the status flags for modification.
    pub fn flags_mut(&mut self) -> &mut Flags {
        &mut self.flags
    }

    /// Sets the flags whose bits are 1 in `byte`; see [`Flags::set_from_byte`].
    pub fn set_flags_from_byte(&mut self, byte: u8) {
        self.flags.set_from_byte(byte);
    }

    /// Returns the status byte derived from the current flags; see
    /// [`Flags::to_byte`].
    pub fn status_byte(&self) -> u8 {
        self.flags.to_byte()
    }
}

impl<M: MemoryBus> fmt::Display for Cpu<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Accumulator:     0x{:02X}", self.a)?;
        writeln!(f, "X Index:         0x{:02X}", self.x)?;
        writeln!(f, "Y Index:         0x{:02X}", self.y)?;
        writeln!(f, "Stack Pointer:   0x{:02X}", self.sp)?;
        writeln!(f, "Program Counter: 0x{:04X}", self.pc)?;
        write!(f, "Status Register: 0b{:08b}", self.status_byte())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu() -> Cpu<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.set_reset_vector(0x8000);
        Cpu::new(memory)
    }

    #[test]
    fn test_cpu_construction_state() {
        let cpu = setup_cpu();

        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.pc(), 0x0000);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.flags(), Flags::default());
        assert_eq!(cpu.state(), RunState::Uninitialized);
    }

    #[test]
    fn test_reset_restores_construction_state() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().poke(0x8000, 0x00);
        cpu.run().unwrap();
        cpu.set_a(0x12);
        cpu.set_sp(0x40);

        cpu.reset();

        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.pc(), 0x0000);
        assert_eq!(cpu.flags(), Flags::default());
        assert!(!cpu.is_initialized());
    }

    #[test]
    fn test_register_parse() {
        assert_eq!("a".parse::<Register>(), Ok(Register::A));
        assert_eq!("SP".parse::<Register>(), Ok(Register::Sp));
        assert_eq!("pc".parse::<Register>(), Ok(Register::Pc));
        assert_eq!(
            "Q".parse::<Register>(),
            Err(UnknownRegister("Q".to_string()))
        );
    }

    #[test]
    fn test_clamp_helpers() {
        assert_eq!(clamp_byte(-1), 0);
        assert_eq!(clamp_byte(256), 255);
        assert_eq!(clamp_byte(0x42), 0x42);
        assert_eq!(clamp_word(-5), 0);
        assert_eq!(clamp_word(0x1_0000), 0xFFFF);
    }

    #[test]
    fn test_push_wraps_sp_at_zero() {
        let mut cpu = setup_cpu();
        cpu.set_sp(0x00);

        cpu.push8(0xAB).unwrap();

        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.memory().peek(0x0100), 0xAB);
    }

    #[test]
    fn test_pop_zeroes_vacated_slot() {
        let mut cpu = setup_cpu();
        cpu.push8(0x77).unwrap();
        assert_eq!(cpu.memory().peek(0x01FF), 0x77);

        assert_eq!(cpu.pop8().unwrap(), 0x77);
        assert_eq!(cpu.memory().peek(0x01FF), 0x00);
        assert_eq!(cpu.sp(), 0xFF);
    }

    #[test]
    fn test_push16_low_byte_first() {
        let mut cpu = setup_cpu();
        cpu.push16(0x1234).unwrap();

        assert_eq!(cpu.memory().peek(0x01FF), 0x34);
        assert_eq!(cpu.memory().peek(0x01FE), 0x12);
        assert_eq!(cpu.sp(), 0xFD);

        assert_eq!(cpu.pop16().unwrap(), 0x1234);
        assert_eq!(cpu.sp(), 0xFF);
    }

    #[test]
    fn test_short_access_little_endian() {
        let mut cpu = setup_cpu();
        cpu.write_short(0x2000, 0xBEEF).unwrap();

        assert_eq!(cpu.memory().peek(0x2000), 0xEF);
        assert_eq!(cpu.memory().peek(0x2001), 0xBE);
        assert_eq!(cpu.read_short(0x2000).unwrap(), 0xBEEF);
    }

    #[test]
    fn test_read_short_wraps_at_top_of_memory() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().poke(0xFFFF, 0x34);
        cpu.memory_mut().poke(0x0000, 0x12);

        assert_eq!(cpu.read_short(0xFFFF).unwrap(), 0x1234);
    }

    #[test]
    fn test_fetch_advances_pc() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x3000, &[0x11, 0x22, 0x33]);
        cpu.set_pc(0x3000);

        assert_eq!(cpu.fetch8().unwrap(), 0x11);
        assert_eq!(cpu.pc(), 0x3001);
        assert_eq!(cpu.fetch16().unwrap(), 0x3322);
        assert_eq!(cpu.pc(), 0x3003);
    }

    #[test]
    fn test_display_dump() {
        let mut cpu = setup_cpu();
        cpu.set_a(0x0F);
        cpu.flags_mut().carry = true;

        let dump = cpu.to_string();
        assert!(dump.contains("Accumulator:     0x0F"));
        assert!(dump.contains("Stack Pointer:   0xFF"));
        assert!(dump.ends_with("0b00000001"));
    }
}
