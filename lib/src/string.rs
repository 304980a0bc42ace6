/// Length of a NUL-terminated byte string: the index of the first NUL, or
/// the slice length if there is none.
#[inline]
pub fn nul_len(buf: &[u8]) -> usize {
    buf.iter().position(|&b| b == 0).unwrap_or(buf.len())
}

/// The bytes before the first NUL.
#[inline]
fn until_nul(buf: &[u8]) -> &[u8] {
    &buf[..nul_len(buf)]
}

/// Extract a NUL-padded byte array as a `&str`.
///
/// Scans for the first NUL byte (or end of slice) and interprets the prefix
/// as UTF-8. Returns `"<invalid>"` if the bytes are not valid UTF-8, or `""`
/// if the buffer starts with NUL / is empty.
#[inline]
pub fn bytes_as_str(buf: &[u8]) -> &str {
    core::str::from_utf8(until_nul(buf)).unwrap_or("<invalid>")
}
