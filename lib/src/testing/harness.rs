// Test harness types: TestSuiteResult, TestSuiteDesc, TestRunSummary.
// Suites are declared with define_test_suite! and collected into a registry
// slice by the crate that owns them.

use super::TestResult;
use super::config::TestConfig;

/// Maximum number of suites a single run can report.
pub const HARNESS_MAX_SUITES: usize = 16;

/// Result of executing a single test suite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestSuiteResult {
    pub name: &'static str,
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
}

impl TestSuiteResult {
    /// Create a new result with just the suite name set.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            total: 0,
            passed: 0,
            failed: 0,
            skipped: 0,
        }
    }

    /// Count one test outcome.
    pub fn record(&mut self, result: TestResult) {
        self.total = self.total.saturating_add(1);
        match result {
            TestResult::Pass => self.passed = self.passed.saturating_add(1),
            TestResult::Fail => self.failed = self.failed.saturating_add(1),
            TestResult::Skipped => self.skipped = self.skipped.saturating_add(1),
        }
    }

    /// Check if all tests in this suite passed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

pub type SuiteRunnerFn = fn(&TestConfig) -> TestSuiteResult;

#[derive(Clone, Copy)]
pub struct TestSuiteDesc {
    pub name: &'static str,
    pub run: SuiteRunnerFn,
}

/// Aggregated results from running all test suites.
#[derive(Clone, Copy, Debug)]
pub struct TestRunSummary {
    pub suites: [TestSuiteResult; HARNESS_MAX_SUITES],
    pub suite_count: usize,
    pub total_tests: u32,
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
}

impl Default for TestRunSummary {
    fn default() -> Self {
        Self {
            suites: [TestSuiteResult::default(); HARNESS_MAX_SUITES],
            suite_count: 0,
            total_tests: 0,
            passed: 0,
            failed: 0,
            skipped: 0,
        }
    }
}

impl TestRunSummary {
    /// Add results from a single suite to the summary. Totals always count;
    /// the per-suite row is dropped once the table is full.
    pub fn add_suite_result(&mut self, result: &TestSuiteResult) {
        self.total_tests = self.total_tests.saturating_add(result.total);
        self.passed = self.passed.saturating_add(result.passed);
        self.failed = self.failed.saturating_add(result.failed);
        self.skipped = self.skipped.saturating_add(result.skipped);
        if self.suite_count < HARNESS_MAX_SUITES {
            self.suites[self.suite_count] = *result;
            self.suite_count += 1;
        }
    }

    pub fn suites(&self) -> &[TestSuiteResult] {
        &self.suites[..self.suite_count]
    }

    pub fn suite(&self, name: &str) -> Option<&TestSuiteResult> {
        self.suites().iter().find(|s| s.name == name)
    }

    /// Check if all tests across all suites passed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
