pub mod config;
pub mod harness;
mod runner;

mod assertions;
pub use config::{SuiteFilter, TestConfig, Verbosity, config_from_cmdline};
pub use harness::{
    HARNESS_MAX_SUITES, SuiteRunnerFn, TestRunSummary, TestSuiteDesc, TestSuiteResult,
};
pub use runner::run_single_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestResult {
    Pass,
    Fail,
    Skipped,
}

impl TestResult {
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Fail)
    }
}

#[macro_export]
macro_rules! pass {
    () => {
        $crate::testing::TestResult::Pass
    };
}

#[macro_export]
macro_rules! skip {
    () => {
        $crate::testing::TestResult::Skipped
    };
}

#[macro_export]
macro_rules! fail {
    () => {
        $crate::testing::TestResult::Fail
    };
    ($msg:expr) => {{
        $crate::klog_info!("TEST FAIL: {}", $msg);
        $crate::testing::TestResult::Fail
    }};
    ($fmt:expr, $($arg:tt)*) => {{
        $crate::klog_info!(concat!("TEST FAIL: ", $fmt), $($arg)*);
        $crate::testing::TestResult::Fail
    }};
}

#[macro_export]
macro_rules! run_test {
    ($config:expr, $test_fn:path) => {{
        $crate::testing::run_single_test(stringify!($test_fn), $config.verbosity, $test_fn)
    }};

    ($config:expr, $name:expr, $test_fn:expr) => {{
        $crate::testing::run_single_test($name, $config.verbosity, $test_fn)
    }};
}

/// Declare a suite: generates `run_<name>_suite` and a `<NAME>_SUITE_DESC`
/// static for the owning crate's registry.
#[macro_export]
macro_rules! define_test_suite {
    ($suite_name:ident, [$($test_fn:path),* $(,)?]) => {
        $crate::paste::paste! {
            fn [<run_ $suite_name _suite>](
                config: &$crate::testing::TestConfig,
            ) -> $crate::testing::TestSuiteResult {
                let mut res = $crate::testing::TestSuiteResult::new(stringify!($suite_name));

                $(
                    if !(config.stop_on_failure && res.failed != 0) {
                        res.record($crate::run_test!(config, $test_fn));
                    }
                )*

                res
            }

            pub static [<$suite_name:upper _SUITE_DESC>]: $crate::testing::TestSuiteDesc =
                $crate::testing::TestSuiteDesc {
                    name: stringify!($suite_name),
                    run: [<run_ $suite_name _suite>],
                };
        }
    };
}
