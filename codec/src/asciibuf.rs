//! Stack buffer that owns its encoded numeral.
//!
//! [`AsciiBuf`] carries a correctly-sized array so callers never size a
//! buffer by hand:
//!
//! ```ignore
//! let mut buf = DecBuf::new();
//! let text = buf.encode_dec(-42)?;     // b"-42\0"
//! let mut hex = HexBuf::new();
//! let raw = hex.encode_hex(-1)?;       // b"FFFFFFFF\0"
//! ```

use numconv_abi::{Base, ConvFlags, ConvResult, DEC_BUF_LEN, HEX_BUF_LEN, MAX_BUF_LEN, MINUS};
use numconv_lib::bytes_as_str;

use crate::decode::decode_with;
use crate::encode::encode_with;

/// Stack-allocated numeral buffer.
///
/// `N` should cover the largest output expected:
/// - [`DEC_BUF_LEN`] (12) for any decimal `i32`
/// - [`HEX_BUF_LEN`] (9) for any hex `i32`
/// - [`MAX_BUF_LEN`] (33) for any base
pub struct AsciiBuf<const N: usize> {
    buf: [u8; N],
    len: usize,
    flags: ConvFlags,
}

pub type DecBuf = AsciiBuf<DEC_BUF_LEN>;
pub type HexBuf = AsciiBuf<HEX_BUF_LEN>;
pub type AnyBuf = AsciiBuf<MAX_BUF_LEN>;

/// Generate `encode_$suffix` shorthands for fixed bases.
macro_rules! impl_base_encoders {
    ($($suffix:ident => $base:expr),* $(,)?) => {
        paste::paste! {
            impl<const N: usize> AsciiBuf<N> {
                $(
                    /// Encode `value` in the fixed base named by the suffix.
                    #[inline]
                    pub fn [<encode_ $suffix>](&mut self, value: i32) -> ConvResult<&[u8]> {
                        self.encode(value, $base)
                    }
                )*
            }
        }
    };
}

impl_base_encoders!(
    bin => Base::BINARY,
    oct => Base::OCTAL,
    dec => Base::DECIMAL,
    hex => Base::HEX,
);

impl<const N: usize> AsciiBuf<N> {
    #[inline]
    pub const fn new() -> Self {
        Self::with_flags(ConvFlags::DEFAULT)
    }

    #[inline]
    pub const fn with_flags(flags: ConvFlags) -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
            flags,
        }
    }

    /// Encode `value`, returning the numeral with its NUL. On error the
    /// previous contents are left untouched.
    pub fn encode(&mut self, value: i32, base: Base) -> ConvResult<&[u8]> {
        let written = encode_with(value, &mut self.buf, base, self.flags)?;
        self.len = written - 1;
        Ok(&self.buf[..written])
    }

    /// The held numeral without its NUL; empty before the first encode.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        bytes_as_str(self.as_bytes())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Parse the held numeral back.
    ///
    /// Decodes under the buffer's own flags, widened only by the letter case
    /// the encoder emitted and by `ACCEPT_SIGN` when the numeral is negative.
    pub fn decode(&self, base: Base) -> ConvResult<i32> {
        decode_with(&self.buf, self.len, base, self.decode_flags())
    }

    fn decode_flags(&self) -> ConvFlags {
        let mut flags = self.flags;
        flags |= if flags.emits_lowercase() {
            ConvFlags::ACCEPT_LOWER
        } else {
            ConvFlags::ACCEPT_UPPER
        };
        if self.as_bytes().first() == Some(&MINUS) {
            flags |= ConvFlags::ACCEPT_SIGN;
        }
        flags
    }
}

impl<const N: usize> Default for AsciiBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}
