//! # Status Flags
//!
//! The processor keeps its condition codes as seven independent booleans.
//! The packed status byte is only ever a view assembled from them.
//!
//! Bit layout of the status byte (NV-BDIZC):
//!
//! | Bit | Flag              |
//! |-----|-------------------|
//! | 7   | Negative          |
//! | 6   | Overflow          |
//! | 5   | (unused)          |
//! | 4   | Break             |
//! | 3   | Decimal mode      |
//! | 2   | Interrupt disable |
//! | 1   | Zero              |
//! | 0   | Carry             |
//!
//! The two directions are asymmetric:
//!
//! - [`Flags::set_from_byte`] only ever *sets* flags whose bit is 1. A 0 bit
//!   leaves the flag as it was.
//! - [`Flags::to_byte`] never emits the Break bit or bit 5.

/// Bit masks of the status byte.
pub struct StatusBit;

impl StatusBit {
    /// Carry (C)
    pub const CARRY: u8 = 0b0000_0001;
    /// Zero (Z)
    pub const ZERO: u8 = 0b0000_0010;
    /// Interrupt disable (I)
    pub const INTERRUPT_DISABLE: u8 = 0b0000_0100;
    /// Decimal mode (D)
    pub const DECIMAL_MODE: u8 = 0b0000_1000;
    /// Break (B); never emitted by `Flags::to_byte`
    pub const BREAK: u8 = 0b0001_0000;
    /// Bit 5; ignored in both directions
    pub const UNUSED: u8 = 0b0010_0000;
    /// Overflow (V)
    pub const OVERFLOW: u8 = 0b0100_0000;
    /// Negative (N)
    pub const NEGATIVE: u8 = 0b1000_0000;
}

/// Processor status flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// Carry (C)
    pub carry: bool,
    /// Zero (Z)
    pub zero: bool,
    /// Interrupt disable (I)
    pub interrupt_disable: bool,
    /// Decimal mode (D)
    pub decimal_mode: bool,
    /// Break (B); the run loop halts as soon as this is set
    pub brk: bool,
    /// Overflow (V)
    pub overflow: bool,
    /// Negative (N)
    pub negative: bool,
}

impl Flags {
    /// Sets every flag whose bit is 1 in `byte`. Flags whose bit is 0 keep
    /// their current value; bit 5 is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::Flags;
    ///
    /// let mut flags = Flags { carry: true, ..Flags::default() };
    /// flags.set_from_byte(0b1000_0000);
    ///
    /// assert!(flags.negative);
    /// assert!(flags.carry); // not cleared by the 0 in bit 0
    /// ```
    pub fn set_from_byte(&mut self, byte: u8) {
        if byte & StatusBit::CARRY != 0 {
            self.carry = true;
        }
        if byte & StatusBit::ZERO != 0 {
            self.zero = true;
        }
        if byte & StatusBit::INTERRUPT_DISABLE != 0 {
            self.interrupt_disable = true;
        }
        if byte & StatusBit::DECIMAL_MODE != 0 {
            self.decimal_mode = true;
        }
        if byte & StatusBit::BREAK != 0 {
            self.brk = true;
        }
        if byte & StatusBit::OVERFLOW != 0 {
            self.overflow = true;
        }
        if byte & StatusBit::NEGATIVE != 0 {
            self.negative = true;
        }
    }

    /// Packs the flags into a status byte. Break and bit 5 are always 0.
    pub fn to_byte(&self) -> u8 {
        let mut status = 0;

        if self.carry {
            status |= StatusBit::CARRY;
        }
        if self.zero {
            status |= StatusBit::ZERO;
        }
        if self.interrupt_disable {
            status |= StatusBit::INTERRUPT_DISABLE;
        }
        if self.decimal_mode {
            status |= StatusBit::DECIMAL_MODE;
        }
        if self.overflow {
            status |= StatusBit::OVERFLOW;
        }
        if self.negative {
            status |= StatusBit::NEGATIVE;
        }

        status
    }

    /// Updates Zero and Negative from `value`.
    pub(crate) fn update_zn(&mut self, value: u8) {
        self.zero = value == 0;
        self.negative = value & 0x80 != 0;
    }
}
