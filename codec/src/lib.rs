//! Signed 32-bit integer <-> ASCII numeral codec.
//!
//! Every function works on caller-provided byte slices: no heap, no
//! allocator, no raw pointers. Encoded numerals are NUL-terminated and the
//! reported length includes the NUL.
//!
//! # Policy
//!
//! - Base 10 is signed (`-42`); every other base in `2..=16` writes and reads
//!   the two's-complement bit pattern (`-1` is `FFFFFFFF` in hex).
//! - The encoder checks capacity before writing and reports the size it
//!   would have needed.
//! - The decoder rejects, by position, any byte that is not a digit of the
//!   base, and rejects values that do not fit 32 bits.

#![no_std]

pub mod asciibuf;
pub mod decode;
pub mod encode;
pub mod reverse;

pub use asciibuf::{AnyBuf, AsciiBuf, DecBuf, HexBuf};
pub use decode::{decode, decode_cstr, decode_with, digit_value, from_twos_complement_bits};
pub use encode::{encode, encode_with, encoded_len, twos_complement_bits};
pub use reverse::{reverse_bytes, reverse_prefix};

pub use numconv_abi::{
    Base, ConvError, ConvFlags, ConvResult, DEC_BUF_LEN, HEX_BUF_LEN, MAX_BUF_LEN,
};
