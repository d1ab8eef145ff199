//! Conditions the driver reports
//!
//! None of these stop the driver. The display operation still runs with the
//! input masked or truncated, and the condition is handed to the error hook.

use core::fmt;

/// A reported, non-fatal condition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// The bus transaction for a write failed
    Bus(E),
    /// The string was longer than the visible limit, `dropped` bytes were not written
    Truncated {
        /// Number of bytes cut off
        dropped: usize,
    },
    /// Cursor address outside DDRAM, it was still sent
    CursorOutOfRange(u8),
    /// Contrast level above 63, upper bits were masked away
    ContrastOutOfRange(u8),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus transaction failed: {:?}", e),
            Error::Truncated { dropped } => write!(f, "string truncated, {} bytes dropped", *dropped),
            Error::CursorOutOfRange(addr) => write!(f, "cursor address {:#04x} out of range", *addr),
            Error::ContrastOutOfRange(level) => write!(f, "contrast {} out of range", level),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for Error<E> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Error::Bus(_e) => defmt::write!(fmt, "Bus transaction failed"),
            Error::Truncated { dropped } => {
                defmt::write!(fmt, "String truncated, {=usize} bytes dropped", *dropped)
            }
            Error::CursorOutOfRange(addr) => {
                defmt::write!(fmt, "Cursor address {=u8:#x} out of range", *addr)
            }
            Error::ContrastOutOfRange(level) => {
                defmt::write!(fmt, "Contrast {=u8} out of range", *level)
            }
        }
    }
}

/// Called with every reported condition
pub type ErrorHook<E> = fn(&Error<E>);
