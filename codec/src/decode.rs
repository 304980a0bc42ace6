//! ASCII to integer.
//!
//! The inverse of the encoder's output: digits are read most-significant
//! first, with an optional leading `-` that does not count as a digit.
//! Any byte outside the alphabet, or a digit not valid in the base, is an
//! error naming its position; nothing is skipped or truncated.
//!
//! Decimal results must fit `i32` as signed values. Other bases accept up
//! to 32 bits and reinterpret them as two's complement, so `FFFFFFFF` is -1.

use numconv_abi::{Base, ConvError, ConvFlags, ConvResult, MINUS};
use numconv_lib::{klog_debug, klog_trace, nul_len};

/// The `i32` whose bit pattern is `bits`.
#[inline]
pub const fn from_twos_complement_bits(bits: u32) -> i32 {
    i32::from_ne_bytes(bits.to_ne_bytes())
}

/// Numeric value of one ASCII digit, subject to the accepted letter cases.
pub fn digit_value(byte: u8, flags: ConvFlags) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some((byte - b'0') as u32),
        b'A'..=b'F' if flags.contains(ConvFlags::ACCEPT_UPPER) => Some((byte - b'A' + 10) as u32),
        b'a'..=b'f' if flags.contains(ConvFlags::ACCEPT_LOWER) => Some((byte - b'a' + 10) as u32),
        _ => None,
    }
}

fn signed_decimal(magnitude: u32, negative: bool) -> ConvResult<i32> {
    if !negative {
        return i32::try_from(magnitude).map_err(|_| ConvError::Overflow);
    }
    if magnitude > i32::MIN.unsigned_abs() {
        return Err(ConvError::Overflow);
    }
    Ok(0i32.wrapping_sub_unsigned(magnitude))
}

/// Decode with the default alphabet. See [`decode_with`].
#[inline]
pub fn decode(buf: &[u8], digits: usize, base: Base) -> ConvResult<i32> {
    decode_with(buf, digits, base, ConvFlags::DEFAULT)
}

/// Decode a NUL-terminated numeral; without a NUL the whole slice is read.
#[inline]
pub fn decode_cstr(buf: &[u8], base: Base) -> ConvResult<i32> {
    decode(buf, nul_len(buf), base)
}

/// Parse the first `digits` bytes of `buf` (sign included) as a numeral in
/// `base`.
pub fn decode_with(buf: &[u8], digits: usize, base: Base, flags: ConvFlags) -> ConvResult<i32> {
    if digits > buf.len() {
        return Err(ConvError::Truncated {
            digits,
            available: buf.len(),
        });
    }
    let numeral = &buf[..digits];

    let (negative, start) = match numeral.first() {
        Some(&MINUS) if flags.accepts_sign() => (true, 1),
        _ => (false, 0),
    };
    if start == numeral.len() {
        return Err(ConvError::Empty);
    }

    let radix = base.get();
    let mut acc = 0u32;
    for (position, &byte) in numeral.iter().enumerate().skip(start) {
        let digit = match digit_value(byte, flags) {
            Some(d) if d < radix => d,
            _ => {
                klog_debug!(
                    "numconv: decode rejected byte {:#04x} at {} (base {})",
                    byte,
                    position,
                    base
                );
                return Err(ConvError::InvalidDigit { position, byte });
            }
        };
        acc = match acc.checked_mul(radix).and_then(|a| a.checked_add(digit)) {
            Some(next) => next,
            None => {
                klog_debug!("numconv: decode overflow at {} (base {})", position, base);
                return Err(ConvError::Overflow);
            }
        };
    }

    let value = if base.is_decimal() {
        signed_decimal(acc, negative)?
    } else {
        let value = from_twos_complement_bits(acc);
        if negative { value.wrapping_neg() } else { value }
    };

    klog_trace!("numconv: decoded {} digits base {} -> {}", digits, base, value);
    Ok(value)
}
