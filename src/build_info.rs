//! Build-time information
//!
//! Metadata captured by `build.rs` through vergen. Git fields are `None` when
//! the crate is built outside a repository, where vergen-gitcl emits its
//! placeholder value instead of real data.

/// Build timestamp (when the binary was compiled)
pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

/// Cargo optimization level (0, 1, 2, 3, s, z)
pub const CARGO_OPT_LEVEL: &str = env!("VERGEN_CARGO_OPT_LEVEL");

/// Target triple (e.g., x86_64-unknown-linux-gnu)
pub const CARGO_TARGET_TRIPLE: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");

/// Rust compiler version (e.g., 1.85.0)
pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");

/// Rust channel (stable, beta, or nightly)
pub const RUSTC_CHANNEL: &str = env!("VERGEN_RUSTC_CHANNEL");

/// Value vergen emits in place of data it could not collect
const VERGEN_PLACEHOLDER: &str = "VERGEN_IDEMPOTENT_OUTPUT";

/// `--version` text for the viewer binary
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nbuilt:  ",
    env!("VERGEN_BUILD_TIMESTAMP"),
    "\ntarget: ",
    env!("VERGEN_CARGO_TARGET_TRIPLE"),
    "\nrustc:  ",
    env!("VERGEN_RUSTC_SEMVER"),
);

fn collected(value: Option<&'static str>) -> Option<&'static str> {
    value.filter(|v| !v.is_empty() && *v != VERGEN_PLACEHOLDER)
}

/// Commit hash, if built from a git worktree
pub fn git_sha() -> Option<&'static str> {
    collected(option_env!("VERGEN_GIT_SHA"))
}

pub fn git_branch() -> Option<&'static str> {
    collected(option_env!("VERGEN_GIT_BRANCH"))
}

/// First 7 characters of the commit hash
pub fn git_sha_short() -> Option<&'static str> {
    git_sha().map(|sha| sha.get(..7).unwrap_or(sha))
}

/// Whether the working tree had uncommitted changes at build time
pub fn is_git_dirty() -> bool {
    collected(option_env!("VERGEN_GIT_DIRTY")) == Some("true")
}

/// Returns a formatted build version string
///
/// Format: `{target_triple}-opt{opt_level}`, e.g. `x86_64-unknown-linux-gnu-opt0`
pub fn version_string() -> String {
    format!("{}-opt{}", CARGO_TARGET_TRIPLE, CARGO_OPT_LEVEL)
}
