//! numconv logging.
//!
//! All log output funnels through a single **backend** function pointer.
//! Until an embedder registers one, lines land in the built-in capture ring:
//! a small fixed array of truncated lines behind a spin mutex, which the
//! embedder (or a test) can drain at leisure. No heap, no I/O.
//!
//! # Backend contract
//!
//! The backend receives the level and the pre-formatted arguments for a
//! **single log line**. It owns any locking and line termination; callers
//! never include a trailing newline.
//!
//! # Registration
//!
//! ```ignore
//! fn uart_backend(level: KlogLevel, args: core::fmt::Arguments<'_>) { /* ... */ }
//! numconv_lib::klog::klog_register_backend(uart_backend);
//! ```

use core::fmt;
use core::sync::atomic::{AtomicPtr, AtomicU8, Ordering};

use spin::Mutex;

use crate::ring_buffer::RingBuffer;

// ---------------------------------------------------------------------------
// Log levels
// ---------------------------------------------------------------------------

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum KlogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl KlogLevel {
    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => KlogLevel::Error,
            1 => KlogLevel::Warn,
            2 => KlogLevel::Info,
            3 => KlogLevel::Debug,
            _ => KlogLevel::Trace,
        }
    }

    /// Parse a level name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        const NAMES: [(&str, KlogLevel); 5] = [
            ("error", KlogLevel::Error),
            ("warn", KlogLevel::Warn),
            ("info", KlogLevel::Info),
            ("debug", KlogLevel::Debug),
            ("trace", KlogLevel::Trace),
        ];
        NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, level)| level)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KlogLevel::Error => "ERROR",
            KlogLevel::Warn => "WARN",
            KlogLevel::Info => "INFO",
            KlogLevel::Debug => "DEBUG",
            KlogLevel::Trace => "TRACE",
        }
    }
}

static CURRENT_LEVEL: AtomicU8 = AtomicU8::new(KlogLevel::Info as u8);

#[inline(always)]
fn is_enabled(level: KlogLevel) -> bool {
    level as u8 <= CURRENT_LEVEL.load(Ordering::Relaxed)
}

// ---------------------------------------------------------------------------
// Capture ring
// ---------------------------------------------------------------------------

/// Lines kept by the capture backend before the oldest is overwritten.
pub const KLOG_CAPTURE_LINES: usize = 16;

/// Bytes kept per captured line; longer lines are truncated.
pub const KLOG_LINE_MAX: usize = 120;

/// One captured log line.
#[derive(Clone, Copy)]
pub struct KlogLine {
    level: KlogLevel,
    len: u8,
    bytes: [u8; KLOG_LINE_MAX],
}

impl KlogLine {
    pub const EMPTY: KlogLine = KlogLine {
        level: KlogLevel::Info,
        len: 0,
        bytes: [0; KLOG_LINE_MAX],
    };

    pub fn level(&self) -> KlogLevel {
        self.level
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Text of the line. Truncation may split a multi-byte character, in
    /// which case only the valid prefix is returned.
    pub fn as_str(&self) -> &str {
        let bytes = self.as_bytes();
        match core::str::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or(""),
        }
    }
}

impl fmt::Debug for KlogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level.as_str(), self.as_str())
    }
}

impl fmt::Write for KlogLine {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let start = self.len as usize;
        let room = KLOG_LINE_MAX - start;
        let take = s.len().min(room);
        self.bytes[start..start + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len = (start + take) as u8;
        Ok(())
    }
}

static CAPTURE: Mutex<RingBuffer<KlogLine, KLOG_CAPTURE_LINES>> =
    Mutex::new(RingBuffer::new_with(KlogLine::EMPTY));

fn capture_backend(level: KlogLevel, args: fmt::Arguments<'_>) {
    let mut line = KlogLine::EMPTY;
    line.level = level;
    let _ = fmt::write(&mut line, args);
    CAPTURE.lock().push_overwrite(line);
}

/// Pop captured lines oldest-first into `out`, returning how many were
/// written. Lines that do not fit stay in the ring.
pub fn klog_capture_drain(out: &mut [KlogLine]) -> usize {
    let mut ring = CAPTURE.lock();
    let mut n = 0;
    while n < out.len() {
        match ring.try_pop() {
            Some(line) => {
                out[n] = line;
                n += 1;
            }
            None => break,
        }
    }
    n
}

pub fn klog_capture_len() -> usize {
    CAPTURE.lock().len()
}

pub fn klog_capture_clear() {
    CAPTURE.lock().reset();
}

// ---------------------------------------------------------------------------
// Backend dispatch
// ---------------------------------------------------------------------------

/// Signature of a klog backend.
///
/// The backend must emit the whole line under a single lock acquisition (if
/// applicable) so that lines from different contexts do not interleave.
pub type KlogBackend = fn(KlogLevel, fmt::Arguments<'_>);

/// Stored as a raw pointer; `null` means "use the capture ring".
static BACKEND: AtomicPtr<()> = AtomicPtr::new(core::ptr::null_mut());

#[inline]
fn dispatch(level: KlogLevel, args: fmt::Arguments<'_>) {
    let ptr = BACKEND.load(Ordering::Acquire);
    if ptr.is_null() {
        capture_backend(level, args);
    } else {
        // SAFETY: `klog_register_backend` only stores valid `KlogBackend` fn
        // pointers, which have the same size as `*mut ()`.
        let backend: KlogBackend = unsafe { core::mem::transmute(ptr) };
        backend(level, args);
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Register a backend that replaces the capture ring.
pub fn klog_register_backend(backend: KlogBackend) {
    BACKEND.store(backend as *mut (), Ordering::Release);
}

/// Drop any registered backend and fall back to the capture ring.
pub fn klog_reset_backend() {
    BACKEND.store(core::ptr::null_mut(), Ordering::Release);
}

/// Initialise klog (sets default level).
pub fn klog_init() {
    CURRENT_LEVEL.store(KlogLevel::Info as u8, Ordering::Relaxed);
}

pub fn klog_set_level(level: KlogLevel) {
    CURRENT_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn klog_get_level() -> KlogLevel {
    KlogLevel::from_raw(CURRENT_LEVEL.load(Ordering::Relaxed))
}

pub fn klog_is_enabled(level: KlogLevel) -> bool {
    is_enabled(level)
}

/// Emit a formatted log line at the given level.
pub fn log_args(level: KlogLevel, args: fmt::Arguments<'_>) {
    if !is_enabled(level) {
        return;
    }
    dispatch(level, args);
}

// ---------------------------------------------------------------------------
// Macros
// ---------------------------------------------------------------------------

#[macro_export]
macro_rules! klog {
    ($level:expr, $($arg:tt)*) => {{
        $crate::klog::log_args($level, ::core::format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! klog_error {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Error, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_warn {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Warn, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_info {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Info, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_debug {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Debug, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_trace {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Trace, ::core::format_args!($($arg)*))
    };
}
