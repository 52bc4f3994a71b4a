//! # Memory Access Port
//!
//! The engine never owns memory. It reaches the 64 KiB address space through
//! the [`MemoryBus`] trait, which the host implements for whatever sits behind
//! the bus: plain RAM, ROM images, memory-mapped devices, or a callback into
//! another runtime.
//!
//! ## Contract
//!
//! - The engine performs exactly the accesses an instruction demands, in
//!   program order, and never speculatively.
//! - Reads take `&mut self` because device registers may change state when
//!   read.
//! - A port that can fail reports a [`BusError`]; the engine passes it up to
//!   the caller unchanged.
//!
//! Two implementations ship with the crate: [`FlatMemory`], an owned buffer
//! covering the whole address space, and [`FnMemory`], which adapts a single
//! access closure.

use std::fmt;

use thiserror::Error;

/// Direction of a bus access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Read a byte.
    Read,
    /// Write the contained byte.
    Write(u8),
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Read => f.write_str("read"),
            Access::Write(value) => write!(f, "write of 0x{value:02X}"),
        }
    }
}

/// Failure reported by a memory port.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("bus fault on {access} at 0x{address:04X}: {message}")]
pub struct BusError {
    /// Address of the failed access
    pub address: u16,
    /// The access that failed
    pub access: Access,
    /// Port-specific description
    pub message: String,
}

impl BusError {
    /// Creates a new bus error.
    pub fn new(address: u16, access: Access, message: impl Into<String>) -> Self {
        Self {
            address,
            access,
            message: message.into(),
        }
    }
}

/// Memory bus trait for the engine to read/write bytes.
///
/// # Examples
///
/// A port that maps RAM in the lower half and rejects writes to the upper
/// half:
///
/// ```
/// use cpu6502::{Access, BusError, MemoryBus};
///
/// struct RomRam {
///     ram: [u8; 0x8000],
///     rom: [u8; 0x8000],
/// }
///
/// impl MemoryBus for RomRam {
///     fn read(&mut self, addr: u16) -> Result<u8, BusError> {
///         if addr < 0x8000 {
///             Ok(self.ram[addr as usize])
///         } else {
///             Ok(self.rom[(addr - 0x8000) as usize])
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) -> Result<(), BusError> {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///             Ok(())
///         } else {
///             Err(BusError::new(addr, Access::Write(value), "ROM is read-only"))
///         }
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    fn read(&mut self, addr: u16) -> Result<u8, BusError>;

    /// Writes a byte to the specified 16-bit address.
    fn write(&mut self, addr: u16, value: u8) -> Result<(), BusError>;
}

impl<M: MemoryBus + ?Sized> MemoryBus for Box<M> {
    fn read(&mut self, addr: u16) -> Result<u8, BusError> {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), BusError> {
        (**self).write(addr, value)
    }
}

/// 64 KiB flat memory owned by the port.
///
/// All addresses are writable RAM initialized to 0x00. Accesses never fail.
///
/// # Examples
///
/// ```
/// use cpu6502::{Cpu, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory.set_reset_vector(0x0600);
/// memory.load(0x0600, &[0xEA, 0x00, 0x00]); // NOP, BRK
///
/// let mut cpu = Cpu::new(memory);
/// cpu.run().unwrap();
/// assert_eq!(cpu.pc(), 0x0603);
/// ```
pub struct FlatMemory {
    data: Box<[u8; 0x10000]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 0x10000]),
        }
    }

    /// Returns the byte at `addr` without going through the port.
    pub fn peek(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    /// Stores `value` at `addr` without going through the port.
    pub fn poke(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    /// Copies `bytes` into memory starting at `start`.
    ///
    /// Bytes past 0xFFFF wrap around to 0x0000.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Stores `target` little-endian at the conventional reset vector
    /// (0xFFFC/0xFFFD).
    pub fn set_reset_vector(&mut self, target: u16) {
        let [lo, hi] = target.to_le_bytes();
        self.data[0xFFFC] = lo;
        self.data[0xFFFD] = hi;
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&mut self, addr: u16) -> Result<u8, BusError> {
        Ok(self.data[addr as usize])
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), BusError> {
        self.data[addr as usize] = value;
        Ok(())
    }
}

/// Port built from a single memory-access function.
///
/// The function receives the access direction and the address. For reads its
/// return value is the byte read; for writes the return value is ignored.
///
/// # Examples
///
/// ```
/// use cpu6502::{Access, FnMemory, MemoryBus};
///
/// let mut ram = vec![0u8; 0x10000];
/// let mut port = FnMemory::new(move |access, addr| match access {
///     Access::Read => Ok(ram[addr as usize]),
///     Access::Write(value) => {
///         ram[addr as usize] = value;
///         Ok(0)
///     }
/// });
///
/// port.write(0x1234, 0x42).unwrap();
/// assert_eq!(port.read(0x1234).unwrap(), 0x42);
/// ```
pub struct FnMemory<F> {
    access: F,
}

impl<F> FnMemory<F>
where
    F: FnMut(Access, u16) -> Result<u8, BusError>,
{
    /// Wraps `access` as a memory port.
    pub fn new(access: F) -> Self {
        Self { access }
    }

    /// Unwraps the access function.
    pub fn into_inner(self) -> F {
        self.access
    }
}

impl<F> MemoryBus for FnMemory<F>
where
    F: FnMut(Access, u16) -> Result<u8, BusError>,
{
    fn read(&mut self, addr: u16) -> Result<u8, BusError> {
        (self.access)(Access::Read, addr)
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), BusError> {
        (self.access)(Access::Write(value), addr).map(|_| ())
    }
}
