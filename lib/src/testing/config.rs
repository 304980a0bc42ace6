use crate::config::parse_bool;

const DEFAULT_ENABLED: bool = false;
const DEFAULT_VERBOSITY: Verbosity = Verbosity::Summary;
const DEFAULT_STOP_ON_FAILURE: bool = false;

/// Longest suite name `selftest.suite=` can select.
pub const SUITE_NAME_MAX: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Summary,
    Verbose,
}

impl Verbosity {
    pub fn from_str(value: &str) -> Self {
        if value.eq_ignore_ascii_case("quiet") {
            Verbosity::Quiet
        } else if value.eq_ignore_ascii_case("verbose") {
            Verbosity::Verbose
        } else {
            Verbosity::Summary
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Summary => "summary",
            Verbosity::Verbose => "verbose",
        }
    }
}

impl core::fmt::Display for Verbosity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Restricts a run to one suite. Empty means every suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuiteFilter {
    len: u8,
    bytes: [u8; SUITE_NAME_MAX],
}

impl SuiteFilter {
    pub const ALL: SuiteFilter = SuiteFilter {
        len: 0,
        bytes: [0; SUITE_NAME_MAX],
    };

    /// `None` if the name is empty or longer than [`SUITE_NAME_MAX`].
    pub fn named(name: &str) -> Option<Self> {
        if name.is_empty() || name.len() > SUITE_NAME_MAX {
            return None;
        }
        let mut filter = Self::ALL;
        filter.bytes[..name.len()].copy_from_slice(name.as_bytes());
        filter.len = name.len() as u8;
        Some(filter)
    }

    pub fn matches(&self, suite: &str) -> bool {
        self.len == 0 || &self.bytes[..self.len as usize] == suite.as_bytes()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TestConfig {
    pub enabled: bool,
    pub verbosity: Verbosity,
    pub stop_on_failure: bool,
    pub suite: SuiteFilter,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_ENABLED,
            verbosity: DEFAULT_VERBOSITY,
            stop_on_failure: DEFAULT_STOP_ON_FAILURE,
            suite: SuiteFilter::ALL,
        }
    }
}

impl TestConfig {
    /// Enabled config with defaults otherwise; what tests want.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }
}

pub fn config_from_cmdline(cmdline: Option<&str>) -> TestConfig {
    let mut cfg = TestConfig::default();
    if let Some(cmdline) = cmdline {
        for token in cmdline.split_whitespace() {
            if let Some(value) = token.strip_prefix("selftest=") {
                // Any non-boolean value just enables the run.
                cfg.enabled = parse_bool(value).unwrap_or(true);
            } else if let Some(value) = token.strip_prefix("selftest.suite=") {
                if let Some(filter) = SuiteFilter::named(value) {
                    cfg.enabled = true;
                    cfg.suite = filter;
                }
            } else if let Some(value) = token.strip_prefix("selftest.verbosity=") {
                cfg.verbosity = Verbosity::from_str(value);
            } else if let Some(value) = token.strip_prefix("selftest.stop_on_failure=") {
                if let Some(stop) = parse_bool(value) {
                    cfg.stop_on_failure = stop;
                }
            }
        }
    }
    cfg
}
