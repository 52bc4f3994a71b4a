//! WASM API for the execution engine.
//!
//! Provides a JavaScript-callable [`Emulator`] for CPU control, state
//! inspection and memory access.

use crate::{Access, BusError, Cpu, ExecutionError, FlatMemory, MemoryBus, Register, RunState};
use wasm_bindgen::prelude::*;

/// Memory port backed by a JavaScript function.
///
/// The function is called as `fn(kind, address, value)` where `kind` is
/// `"READ"` or `"WRITE"`. For reads `value` is 0 and the return value is
/// clamped into a byte; for writes the return value is ignored.
struct JsMemory {
    access: js_sys::Function,
}

impl JsMemory {
    fn call(&self, addr: u16, access: Access) -> Result<JsValue, BusError> {
        let (kind, value) = match access {
            Access::Read => ("READ", 0),
            Access::Write(value) => ("WRITE", value),
        };
        self.access
            .call3(
                &JsValue::NULL,
                &JsValue::from_str(kind),
                &JsValue::from(addr),
                &JsValue::from(value),
            )
            .map_err(|err| {
                let message = err
                    .as_string()
                    .unwrap_or_else(|| format!("{err:?}"));
                BusError::new(addr, access, message)
            })
    }
}

impl MemoryBus for JsMemory {
    fn read(&mut self, addr: u16) -> Result<u8, BusError> {
        let value = self.call(addr, Access::Read)?;
        match value.as_f64() {
            Some(n) if n.is_finite() => Ok(n.clamp(0.0, 255.0) as u8),
            _ => Err(BusError::new(addr, Access::Read, "access function did not return a number")),
        }
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), BusError> {
        self.call(addr, Access::Write(value)).map(|_| ())
    }
}

/// The two kinds of memory an [`Emulator`] can run against.
enum HostMemory {
    Flat(FlatMemory),
    Js(JsMemory),
}

impl MemoryBus for HostMemory {
    fn read(&mut self, addr: u16) -> Result<u8, BusError> {
        match self {
            HostMemory::Flat(memory) => memory.read(addr),
            HostMemory::Js(memory) => memory.read(addr),
        }
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), BusError> {
        match self {
            HostMemory::Flat(memory) => memory.write(addr, value),
            HostMemory::Js(memory) => memory.write(addr, value),
        }
    }
}

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct EmulatorError {
    message: String,
    opcode: Option<u8>,
    address: Option<u16>,
}

#[wasm_bindgen]
impl EmulatorError {
    /// Human-readable description of the failure.
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Offending opcode, for decode failures.
    #[wasm_bindgen(getter)]
    pub fn opcode(&self) -> Option<u8> {
        self.opcode
    }

    /// Address of the failed fetch or access.
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> Option<u16> {
        self.address
    }
}

impl From<ExecutionError> for EmulatorError {
    fn from(err: ExecutionError) -> Self {
        let (opcode, address) = match &err {
            ExecutionError::InvalidOpcode { opcode, address } => (Some(*opcode), Some(*address)),
            ExecutionError::Bus(bus) => (None, Some(bus.address)),
        };
        EmulatorError {
            message: err.to_string(),
            opcode,
            address,
        }
    }
}

impl From<crate::UnknownRegister> for EmulatorError {
    fn from(err: crate::UnknownRegister) -> Self {
        EmulatorError {
            message: err.to_string(),
            opcode: None,
            address: None,
        }
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator {
    cpu: Cpu<HostMemory>,
}

#[wasm_bindgen]
impl Emulator {
    /// Create an emulator over 64 KiB of zeroed memory.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator {
            cpu: Cpu::new(HostMemory::Flat(FlatMemory::new())),
        }
    }

    /// Create an emulator whose every memory access calls `access`.
    #[wasm_bindgen(js_name = withAccess)]
    pub fn with_access(access: js_sys::Function) -> Self {
        Emulator {
            cpu: Cpu::new(HostMemory::Js(JsMemory { access })),
        }
    }

    /// Execute a single instruction. Returns true once halted on Break.
    pub fn step(&mut self) -> Result<bool, EmulatorError> {
        Ok(self.cpu.step()? == RunState::Halted)
    }

    /// Run until Break and return the number of instructions executed.
    pub fn run(&mut self) -> Result<f64, EmulatorError> {
        // u64 -> f64 for JavaScript
        Ok(self.cpu.run()? as f64)
    }

    /// Execute at most `limit` instructions. Returns true once halted.
    #[wasm_bindgen(js_name = runFor)]
    pub fn run_for(&mut self, limit: u32) -> Result<bool, EmulatorError> {
        Ok(self.cpu.run_for(u64::from(limit))? == RunState::Halted)
    }

    /// Reset registers and flags. Memory is kept.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// `"uninitialized"`, `"running"` or `"halted"`.
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        match self.cpu.state() {
            RunState::Uninitialized => "uninitialized",
            RunState::Running => "running",
            RunState::Halted => "halted",
        }
        .to_string()
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    // Flag getters
    #[wasm_bindgen(getter, js_name = flagN)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flags().negative
    }

    #[wasm_bindgen(getter, js_name = flagV)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flags().overflow
    }

    #[wasm_bindgen(getter, js_name = flagB)]
    pub fn flag_b(&self) -> bool {
        self.cpu.flags().brk
    }

    #[wasm_bindgen(getter, js_name = flagD)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flags().decimal_mode
    }

    #[wasm_bindgen(getter, js_name = flagI)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flags().interrupt_disable
    }

    #[wasm_bindgen(getter, js_name = flagZ)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flags().zero
    }

    #[wasm_bindgen(getter, js_name = flagC)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flags().carry
    }

    /// Set a register by name (`A`, `X`, `Y`, `SP`, `PC`). Out-of-range
    /// values are clamped.
    #[wasm_bindgen(js_name = setRegister)]
    pub fn set_register(&mut self, name: &str, value: i32) -> Result<(), EmulatorError> {
        let reg: Register = name.parse()?;
        self.cpu.set_register(reg, value);
        Ok(())
    }

    /// Set every flag whose bit is 1 in `byte`.
    #[wasm_bindgen(js_name = setFlagsFromByte)]
    pub fn set_flags_from_byte(&mut self, byte: u8) {
        self.cpu.set_flags_from_byte(byte);
    }

    /// Status byte derived from the flags, without Break or bit 5.
    #[wasm_bindgen(js_name = statusByte)]
    pub fn status_byte(&self) -> u8 {
        self.cpu.status_byte()
    }

    // Memory access methods

    /// Read a single byte through the memory port
    #[wasm_bindgen(js_name = readMemory)]
    pub fn read_memory(&mut self, addr: u16) -> Result<u8, EmulatorError> {
        Ok(self.cpu.read_byte(addr)?)
    }

    /// Write a single byte through the memory port
    #[wasm_bindgen(js_name = writeMemory)]
    pub fn write_memory(&mut self, addr: u16, value: u8) -> Result<(), EmulatorError> {
        Ok(self.cpu.write_byte(addr, value)?)
    }

    /// Copy a program into memory at `start_addr`.
    ///
    /// PC is not touched: the power-on sequence loads it from the reset
    /// vector, so the caller writes the vector as well (or sets PC after the
    /// first step).
    #[wasm_bindgen(js_name = loadProgram)]
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) -> Result<(), EmulatorError> {
        for (i, &byte) in program.iter().enumerate() {
            let addr = start_addr.wrapping_add(i as u16);
            self.cpu.write_byte(addr, byte)?;
        }
        Ok(())
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
