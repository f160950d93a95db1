//! Health check system for validating startup without opening a window
//!
//! Used by `input_viewer --check` and by the integration tests.
//!
//! # Example
//!
//! ```no_run
//! use pixelkit::health::{HealthCheckRunner, checks::*};
//!
//! let report = HealthCheckRunner::new()
//!     .add_check(ConfigCheck::new())
//!     .add_check(InputCheck::new())
//!     .run();
//!
//! std::process::exit(report.exit_code());
//! ```

pub mod check;
pub mod checks;
pub mod reporter;
pub mod runner;

pub use check::{CheckResult, CheckStatus, Checklist, SystemCheck};
pub use reporter::{format_report, print_report};
pub use runner::{CheckOutcome, HealthCheckReport, HealthCheckRunner};

/// Runs all default health checks and returns a report
pub fn run_all_checks() -> HealthCheckReport {
    HealthCheckRunner::new()
        .add_check(checks::ConfigCheck::new())
        .add_check(checks::BuildInfoCheck::new())
        .add_check(checks::GeometryCheck::new())
        .add_check(checks::InputCheck::new())
        .run()
}
