//! Codec configuration from a boot-cmdline style string.
//!
//! Tokens are whitespace separated `key=value` pairs under the `numconv.`
//! prefix:
//!
//! ```text
//! numconv.base=16 numconv.log=debug numconv.lowercase=on numconv.case=upper
//! ```
//!
//! Unknown keys and malformed values are ignored and the default is kept.

use numconv_abi::{Base, ConvFlags};

use crate::klog::{KlogLevel, klog_set_level};

const DEFAULT_BASE: Base = Base::DECIMAL;
const DEFAULT_LOG_LEVEL: KlogLevel = KlogLevel::Info;
const DEFAULT_EMIT_LOWER: bool = false;
const DEFAULT_ACCEPT_SIGN: bool = true;
const DEFAULT_CASE: InputCase = InputCase::Any;

/// Which hex letter case the decoder accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCase {
    Upper,
    Lower,
    Any,
}

impl InputCase {
    pub fn from_str(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("upper") {
            Some(InputCase::Upper)
        } else if value.eq_ignore_ascii_case("lower") {
            Some(InputCase::Lower)
        } else if value.eq_ignore_ascii_case("any") {
            Some(InputCase::Any)
        } else {
            None
        }
    }

    fn flags(self) -> ConvFlags {
        match self {
            InputCase::Upper => ConvFlags::ACCEPT_UPPER,
            InputCase::Lower => ConvFlags::ACCEPT_LOWER,
            InputCase::Any => ConvFlags::ACCEPT_ANY_CASE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvConfig {
    pub base: Base,
    pub log_level: KlogLevel,
    pub emit_lower: bool,
    pub accept_sign: bool,
    pub input_case: InputCase,
}

impl Default for ConvConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            log_level: DEFAULT_LOG_LEVEL,
            emit_lower: DEFAULT_EMIT_LOWER,
            accept_sign: DEFAULT_ACCEPT_SIGN,
            input_case: DEFAULT_CASE,
        }
    }
}

impl ConvConfig {
    pub fn from_cmdline(cmdline: Option<&str>) -> Self {
        let mut cfg = Self::default();
        let Some(cmdline) = cmdline else {
            return cfg;
        };
        for token in cmdline.split_whitespace() {
            if let Some(value) = token.strip_prefix("numconv.base=") {
                if let Some(base) = value.parse::<u32>().ok().and_then(|b| Base::new(b).ok()) {
                    cfg.base = base;
                }
            } else if let Some(value) = token.strip_prefix("numconv.log=") {
                if let Some(level) = KlogLevel::from_name(value) {
                    cfg.log_level = level;
                }
            } else if let Some(value) = token.strip_prefix("numconv.lowercase=") {
                if let Some(lower) = parse_bool(value) {
                    cfg.emit_lower = lower;
                }
            } else if let Some(value) = token.strip_prefix("numconv.sign=") {
                if let Some(sign) = parse_bool(value) {
                    cfg.accept_sign = sign;
                }
            } else if let Some(value) = token.strip_prefix("numconv.case=") {
                if let Some(case) = InputCase::from_str(value) {
                    cfg.input_case = case;
                }
            }
        }
        cfg
    }

    /// Codec flags selected by this configuration.
    pub fn flags(&self) -> ConvFlags {
        let mut flags = self.input_case.flags();
        if self.accept_sign {
            flags |= ConvFlags::ACCEPT_SIGN;
        }
        if self.emit_lower {
            flags |= ConvFlags::EMIT_LOWER;
        }
        flags
    }

    /// Install the process-wide parts (log level).
    pub fn apply(&self) {
        klog_set_level(self.log_level);
    }
}

pub fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("on")
        || value.eq_ignore_ascii_case("true")
        || value.eq_ignore_ascii_case("yes")
        || value.eq_ignore_ascii_case("enabled")
        || value == "1"
    {
        Some(true)
    } else if value.eq_ignore_ascii_case("off")
        || value.eq_ignore_ascii_case("false")
        || value.eq_ignore_ascii_case("no")
        || value.eq_ignore_ascii_case("disabled")
        || value == "0"
    {
        Some(false)
    } else {
        None
    }
}
