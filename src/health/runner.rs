//! Runs health checks and collects their results

use std::time::Instant;

use tracing::debug;

use super::check::{CheckResult, CheckStatus, SystemCheck};

/// Outcome of a single check inside a report
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub result: CheckResult,
}

/// Results from running a health check suite
#[derive(Debug, Default)]
pub struct HealthCheckReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl HealthCheckReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.result.status == status)
            .count()
    }

    pub fn passed(&self) -> usize {
        self.count(CheckStatus::Pass)
    }

    pub fn warned(&self) -> usize {
        self.count(CheckStatus::Warn)
    }

    pub fn failed(&self) -> usize {
        self.count(CheckStatus::Fail)
    }

    /// No failures (warnings allowed)
    pub fn is_healthy(&self) -> bool {
        self.failed() == 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warned() > 0
    }

    /// 0 = all pass, 1 = any fail, 2 = any warn (but no fail)
    pub fn exit_code(&self) -> i32 {
        if self.failed() > 0 {
            1
        } else if self.warned() > 0 {
            2
        } else {
            0
        }
    }

    pub fn outcome(&self, name: &str) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|outcome| outcome.name == name)
    }
}

/// Orchestrates running health checks and collecting results
#[derive(Default)]
pub struct HealthCheckRunner {
    checks: Vec<Box<dyn SystemCheck>>,
}

impl HealthCheckRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_check<C: SystemCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Runs every registered check in insertion order
    pub fn run(self) -> HealthCheckReport {
        let outcomes = self
            .checks
            .into_iter()
            .map(|check| {
                let start = Instant::now();
                let result = check.check();
                let duration = start.elapsed();
                debug!(
                    check = check.name(),
                    status = result.status.label(),
                    ?duration,
                    "Health check finished"
                );
                CheckOutcome {
                    name: check.name(),
                    description: check.description(),
                    result: result.with_duration(duration),
                }
            })
            .collect();

        HealthCheckReport { outcomes }
    }
}
