use super::TestResult;
use super::config::Verbosity;

/// Run one test function and report it at the requested verbosity.
pub fn run_single_test<F>(name: &str, verbosity: Verbosity, test: F) -> TestResult
where
    F: FnOnce() -> TestResult,
{
    let result = test();
    match (verbosity, result) {
        (Verbosity::Quiet, _) => {}
        (Verbosity::Verbose, TestResult::Pass) => crate::klog_info!("TEST PASS: {}", name),
        (_, TestResult::Fail) => crate::klog_info!("TEST FAILED: {}", name),
        (_, TestResult::Skipped) => crate::klog_debug!("TEST SKIPPED: {}", name),
        (Verbosity::Summary, TestResult::Pass) => {}
    }
    result
}
