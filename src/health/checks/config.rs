//! Configuration system health check

use crate::config::AppConfig;
use crate::health::check::{CheckResult, Checklist, SystemCheck};

/// Checks that configuration can be loaded for all profiles
#[derive(Debug)]
pub struct ConfigCheck {
    profiles: Vec<&'static str>,
}

impl ConfigCheck {
    /// Creates a new config check with default profiles
    pub fn new() -> Self {
        Self {
            profiles: vec!["debug", "release"],
        }
    }

    pub fn with_profiles(profiles: Vec<&'static str>) -> Self {
        Self { profiles }
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for ConfigCheck {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates configuration loading from files and environment")
    }

    fn check(&self) -> CheckResult {
        let mut list = Checklist::new();

        for profile in &self.profiles {
            match AppConfig::load(profile) {
                Ok(config) => {
                    list.expect(
                        true,
                        format!(
                            "Profile '{}': loaded (window: {}x{}, motion: {:?})",
                            profile, config.window.width, config.window.height, config.input.motion
                        ),
                    );
                }
                Err(e) => {
                    list.expect(false, format!("Profile '{}': {}", profile, e));
                }
            }
        }

        match AppConfig::load_from_env() {
            Ok(config) => list.note(format!("Environment config: profile '{}'", config.profile)),
            Err(e) => list.warn(format!("Environment config: {}", e)),
        }

        list.finish(format!("{} profile(s) loaded", self.profiles.len()))
    }
}
