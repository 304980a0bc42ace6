//! Validated numeral base.

use core::fmt;

use crate::error::{ConvError, ConvResult};

/// Radix of a numeral, guaranteed to lie in `2..=16`.
///
/// The digit alphabet is `0-9` followed by `A-F`, so sixteen is the largest
/// base the codec can express.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Base(u8);

impl Base {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 16;

    pub const BINARY: Base = Base(2);
    pub const OCTAL: Base = Base(8);
    pub const DECIMAL: Base = Base(10);
    pub const HEX: Base = Base(16);

    /// Validate a raw radix.
    pub const fn new(base: u32) -> ConvResult<Self> {
        if base < Self::MIN || base > Self::MAX {
            return Err(ConvError::InvalidBase { base });
        }
        Ok(Self(base as u8))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0 as u32
    }

    /// Decimal is the only base that carries a sign; every other base
    /// encodes the two's-complement bit pattern.
    #[inline]
    pub const fn is_decimal(self) -> bool {
        self.0 == 10
    }

    /// Number of digits needed for the largest 32-bit magnitude.
    pub const fn max_digits(self) -> usize {
        let base = self.0 as u32;
        let mut n = u32::MAX;
        let mut digits = 0usize;
        while n != 0 {
            n /= base;
            digits += 1;
        }
        digits
    }
}

impl Default for Base {
    fn default() -> Self {
        Self::DECIMAL
    }
}

impl TryFrom<u32> for Base {
    type Error = ConvError;

    fn try_from(value: u32) -> ConvResult<Self> {
        Self::new(value)
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> u32 {
        base.get()
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
