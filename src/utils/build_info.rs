//! Build provenance reported by the `version` command.
//!
//! `build.rs` exports the `MONTHLY_BUDGET_BUILD_*` variables; a build that ran
//! without them (for example outside a git checkout) reports `unknown`.

const UNKNOWN: &str = "unknown";

/// Where and how this `monthly_budget_cli` binary was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

impl BuildInfo {
    /// Heading line, e.g. `Monthly Budget 0.1.0`.
    pub fn banner(&self) -> String {
        format!("Monthly Budget {}", self.version)
    }

    /// Labelled values in the order the `version` command prints them.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Build hash", format!("{} ({})", self.git_hash, self.git_status)),
            ("Built at", self.timestamp.to_string()),
            ("Target", self.target.to_string()),
            ("Profile", self.profile.to_string()),
            ("Rustc", self.rustc.to_string()),
        ]
    }
}

pub fn current() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("MONTHLY_BUDGET_BUILD_HASH").unwrap_or(UNKNOWN),
        git_status: option_env!("MONTHLY_BUDGET_BUILD_STATUS").unwrap_or(UNKNOWN),
        timestamp: option_env!("MONTHLY_BUDGET_BUILD_TIMESTAMP").unwrap_or(UNKNOWN),
        target: option_env!("MONTHLY_BUDGET_BUILD_TARGET").unwrap_or(UNKNOWN),
        profile: option_env!("MONTHLY_BUDGET_BUILD_PROFILE").unwrap_or(UNKNOWN),
        rustc: option_env!("MONTHLY_BUDGET_BUILD_RUSTC").unwrap_or(UNKNOWN),
    }
}
