//! Build information health check

use crate::build_info;
use crate::health::check::{CheckResult, Checklist, SystemCheck};

/// Checks that build metadata was captured by the build script
#[derive(Debug, Default)]
pub struct BuildInfoCheck;

impl BuildInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl SystemCheck for BuildInfoCheck {
    fn name(&self) -> &'static str {
        "Build Info"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates build metadata (git, rustc, timestamps)")
    }

    fn check(&self) -> CheckResult {
        let mut list = Checklist::new();

        list.expect(
            !build_info::BUILD_TIMESTAMP.is_empty(),
            format!("Build time: {}", build_info::BUILD_TIMESTAMP),
        );
        list.expect(
            !build_info::RUSTC_SEMVER.is_empty(),
            format!(
                "Rustc: {} ({})",
                build_info::RUSTC_SEMVER,
                build_info::RUSTC_CHANNEL
            ),
        );
        list.note(format!("Target: {}", build_info::CARGO_TARGET_TRIPLE));
        list.note(format!("Opt level: {}", build_info::CARGO_OPT_LEVEL));

        match build_info::git_sha_short() {
            Some(sha) => list.note(format!(
                "Git: {}@{} (dirty: {})",
                build_info::git_branch().unwrap_or("detached"),
                sha,
                build_info::is_git_dirty()
            )),
            None => list.note("Git: not built from a repository"),
        }

        list.finish("Build metadata accessible")
    }
}
