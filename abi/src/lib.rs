//! numconv shared types.
//!
//! This crate holds the definitions shared by the codec, the support library
//! and the self-test suites:
//! - [`Base`], the validated radix (2..=16)
//! - [`ConvError`] / [`ConvResult`], the single error type of every conversion
//! - [`ConvFlags`], decoder alphabet and encoder case selection
//! - Buffer sizing constants for worst-case encoder output
//!
//! Nothing here allocates or holds state.

#![no_std]
#![forbid(unsafe_code)]

pub mod base;
pub mod error;
pub mod flags;

pub use base::Base;
pub use error::{ConvError, ConvResult};
pub use flags::ConvFlags;

/// Worst-case decimal output: `"-2147483648\0"`.
pub const DEC_BUF_LEN: usize = Base::DECIMAL.max_digits() + 2;

/// Worst-case hexadecimal output: `"FFFFFFFF\0"`.
pub const HEX_BUF_LEN: usize = Base::HEX.max_digits() + 1;

/// Worst-case output in any supported base: 32 binary digits plus NUL.
pub const MAX_BUF_LEN: usize = Base::BINARY.max_digits() + 1;

/// NUL terminator written after every encoded numeral.
pub const NUL: u8 = 0;

/// Sign marker accepted by the decoder and emitted for negative decimals.
pub const MINUS: u8 = b'-';
