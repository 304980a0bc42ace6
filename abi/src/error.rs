//! Conversion error type shared by the encoder and decoder.

use core::fmt;

/// Every way an encode or decode call can fail.
///
/// Variants carry enough context to report the failure without access to the
/// caller's buffer. No conversion ever truncates or approximates: if the
/// input cannot be represented exactly, one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvError {
    InvalidBase { base: u32 },
    BufferTooSmall { required: usize, available: usize },
    Truncated { digits: usize, available: usize },
    Empty,
    InvalidDigit { position: usize, byte: u8 },
    Overflow,
}

impl fmt::Display for ConvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBase { base } => write!(f, "base {} outside 2..=16", base),
            Self::BufferTooSmall {
                required,
                available,
            } => {
                write!(
                    f,
                    "buffer holds {} bytes, numeral needs {}",
                    available, required
                )
            }
            Self::Truncated { digits, available } => {
                write!(
                    f,
                    "digit count {} exceeds buffer length {}",
                    digits, available
                )
            }
            Self::Empty => write!(f, "numeral has no digits"),
            Self::InvalidDigit { position, byte } => {
                write!(f, "invalid digit {:#04x} at position {}", byte, position)
            }
            Self::Overflow => write!(f, "value does not fit in 32 bits"),
        }
    }
}

/// Convenience result type for conversion operations.
pub type ConvResult<T = ()> = Result<T, ConvError>;
