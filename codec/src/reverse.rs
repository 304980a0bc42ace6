//! In-place byte reversal.

use numconv_abi::{ConvError, ConvResult};

/// Reverse `buf` in place by swapping from both ends toward the middle.
///
/// Applying it twice restores the original order.
pub fn reverse_bytes(buf: &mut [u8]) {
    if buf.len() < 2 {
        return;
    }
    let mut head = 0usize;
    let mut tail = buf.len() - 1;
    while head < tail {
        buf.swap(head, tail);
        head += 1;
        tail -= 1;
    }
}

/// Reverse only the first `len` bytes of `buf`.
pub fn reverse_prefix(buf: &mut [u8], len: usize) -> ConvResult {
    if len > buf.len() {
        return Err(ConvError::Truncated {
            digits: len,
            available: buf.len(),
        });
    }
    reverse_bytes(&mut buf[..len]);
    Ok(())
}
