//! Integer to ASCII.
//!
//! Digits are produced least-significant first into the front of the
//! caller's buffer, the sign (decimal only) is appended, and the run is then
//! reversed in place so the most significant digit, or the `-`, lands at
//! index 0. The terminating NUL is never part of the reversal.
//!
//! Decimal is signed. Every other base writes the two's-complement bit
//! pattern of the value, so `-1` in hex is `FFFFFFFF`.

use numconv_abi::{Base, ConvError, ConvFlags, ConvResult, MINUS, NUL};
use numconv_lib::{klog_debug, klog_trace};

use crate::reverse::reverse_bytes;

const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";
const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// The bit pattern of `value` read as an unsigned magnitude.
#[inline]
pub const fn twos_complement_bits(value: i32) -> u32 {
    u32::from_ne_bytes(value.to_ne_bytes())
}

/// Split `value` into the magnitude the digit loop consumes and whether a
/// `-` must be written.
const fn split_sign(value: i32, base: Base) -> (u32, bool) {
    if !base.is_decimal() {
        return (twos_complement_bits(value), false);
    }
    (value.unsigned_abs(), value < 0)
}

const fn digit_count(magnitude: u32, radix: u32) -> usize {
    let mut n = magnitude;
    let mut digits = 1usize;
    while n >= radix {
        n /= radix;
        digits += 1;
    }
    digits
}

/// Bytes `encode` writes for `value`, including the sign and the NUL.
pub const fn encoded_len(value: i32, base: Base) -> usize {
    let (magnitude, negative) = split_sign(value, base);
    digit_count(magnitude, base.get()) + negative as usize + 1
}

/// Encode with uppercase digits. See [`encode_with`].
#[inline]
pub fn encode(value: i32, buf: &mut [u8], base: Base) -> ConvResult<usize> {
    encode_with(value, buf, base, ConvFlags::DEFAULT)
}

/// Write `value` into `buf` as a NUL-terminated numeral in `base`.
///
/// Returns the number of bytes written including the NUL. If `buf` cannot
/// hold the result nothing is written and `BufferTooSmall` reports the size
/// that would have been needed.
pub fn encode_with(value: i32, buf: &mut [u8], base: Base, flags: ConvFlags) -> ConvResult<usize> {
    let required = encoded_len(value, base);
    if buf.len() < required {
        klog_debug!(
            "numconv: encode {} base {} needs {} bytes, buffer has {}",
            value,
            base,
            required,
            buf.len()
        );
        return Err(ConvError::BufferTooSmall {
            required,
            available: buf.len(),
        });
    }

    // The digit loop below never runs for zero.
    if value == 0 {
        buf[0] = b'0';
        buf[1] = NUL;
        return Ok(2);
    }

    let alphabet = if flags.emits_lowercase() {
        LOWER_DIGITS
    } else {
        UPPER_DIGITS
    };
    let radix = base.get();
    let (mut magnitude, negative) = split_sign(value, base);

    let mut pos = 0usize;
    while magnitude != 0 {
        buf[pos] = alphabet[(magnitude % radix) as usize];
        magnitude /= radix;
        pos += 1;
    }
    if negative {
        buf[pos] = MINUS;
        pos += 1;
    }
    buf[pos] = NUL;
    reverse_bytes(&mut buf[..pos]);

    klog_trace!("numconv: encoded {} base {} into {} bytes", value, base, pos + 1);
    Ok(pos + 1)
}
