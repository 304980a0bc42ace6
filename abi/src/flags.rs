//! Codec behavior flags.

use bitflags::bitflags;

bitflags! {
    /// Alphabet and sign policy for the codec.
    ///
    /// The `ACCEPT_*` bits restrict what the decoder takes as input; the
    /// `EMIT_*` bits select what the encoder writes.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use numconv_abi::ConvFlags;
    ///
    /// // Uppercase-only, unsigned input.
    /// let strict = ConvFlags::ACCEPT_UPPER;
    /// assert!(!strict.contains(ConvFlags::ACCEPT_SIGN));
    /// ```
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ConvFlags: u8 {
        /// Decoder accepts `A`-`F`.
        const ACCEPT_UPPER = 1 << 0;
        /// Decoder accepts `a`-`f`.
        const ACCEPT_LOWER = 1 << 1;
        /// Decoder accepts a leading `-`.
        const ACCEPT_SIGN  = 1 << 2;
        /// Encoder writes `a`-`f` instead of `A`-`F`.
        const EMIT_LOWER   = 1 << 4;

        const ACCEPT_ANY_CASE = Self::ACCEPT_UPPER.bits() | Self::ACCEPT_LOWER.bits();
        const DEFAULT = Self::ACCEPT_ANY_CASE.bits() | Self::ACCEPT_SIGN.bits();
    }
}

impl Default for ConvFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ConvFlags {
    #[inline]
    pub fn emits_lowercase(self) -> bool {
        self.contains(Self::EMIT_LOWER)
    }

    #[inline]
    pub fn accepts_sign(self) -> bool {
        self.contains(Self::ACCEPT_SIGN)
    }
}
