#![no_std]

pub mod config;
pub mod klog;
pub mod ring_buffer;
pub mod string;
pub mod testing;

#[doc(hidden)]
pub use paste;

pub use config::{ConvConfig, InputCase, parse_bool};
pub use klog::{
    KlogBackend, KlogLevel, KlogLine, klog_capture_clear, klog_capture_drain, klog_capture_len,
    klog_get_level, klog_init, klog_is_enabled, klog_register_backend, klog_reset_backend,
    klog_set_level,
};
pub use ring_buffer::RingBuffer;
pub use string::{bytes_as_str, nul_len};
