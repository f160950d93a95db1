//! Core health check trait and types

use std::time::Duration;

use colored::Colorize;

/// Status of a system check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    /// Passed, but something looked off
    Warn,
    Fail,
}

impl CheckStatus {
    /// Returns true if the check passed (Pass or Warn)
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Pass | CheckStatus::Warn)
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, CheckStatus::Fail)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Warn => "WARN",
            CheckStatus::Fail => "FAIL",
        }
    }

    pub fn colored_label(&self) -> String {
        match self {
            CheckStatus::Pass => self.label().green().to_string(),
            CheckStatus::Warn => self.label().yellow().to_string(),
            CheckStatus::Fail => self.label().red().bold().to_string(),
        }
    }
}

/// Result of a system check
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub status: CheckStatus,
    /// One-line summary
    pub message: String,
    /// Individual observations, one per line
    pub details: Vec<String>,
    /// Filled in by the runner
    pub duration: Duration,
}

impl CheckResult {
    fn with_status(status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    pub fn pass(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Pass, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Warn, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Fail, message)
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Trait for system health checks
pub trait SystemCheck {
    /// Name of the system being checked
    fn name(&self) -> &'static str;

    fn check(&self) -> CheckResult;

    /// What this check validates
    fn description(&self) -> Option<&'static str> {
        None
    }
}

/// Collects expectation lines while a check runs and folds them into a result
#[derive(Debug, Default)]
pub struct Checklist {
    lines: Vec<String>,
    expectations: usize,
    failures: usize,
    warnings: usize,
}

impl Checklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an expectation; returns `ok` so callers can bail early
    pub fn expect(&mut self, ok: bool, what: impl AsRef<str>) -> bool {
        self.expectations += 1;
        let mark = if ok { "✓" } else { "✗" };
        if !ok {
            self.failures += 1;
        }
        self.lines.push(format!("  {} {}", mark, what.as_ref()));
        ok
    }

    pub fn warn(&mut self, what: impl AsRef<str>) {
        self.warnings += 1;
        self.lines.push(format!("  ⚠ {}", what.as_ref()));
    }

    pub fn note(&mut self, what: impl AsRef<str>) {
        self.lines.push(format!("    {}", what.as_ref()));
    }

    pub fn finish(self, success: impl Into<String>) -> CheckResult {
        let result = if self.failures > 0 {
            CheckResult::fail(format!(
                "{} of {} expectations failed",
                self.failures, self.expectations
            ))
        } else if self.warnings > 0 {
            CheckResult::warn(format!("{} warning(s)", self.warnings))
        } else {
            CheckResult::pass(success)
        };
        result.with_details(self.lines)
    }
}
