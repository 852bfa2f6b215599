// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Toolchain environment records returned by list/search queries.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A toolchain release identifier like `v2.6.1`.
///
/// Stored as the exact string the external tool reports; the parsed
/// components exist only so listings sort newest-first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolchainVersion(String);

impl ToolchainVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric `(major, minor, patch)` components, if the version follows
    /// the `vX.Y.Z` convention. Missing trailing components default to 0.
    pub fn components(&self) -> Option<(u32, u32, u32)> {
        let digits = self.0.strip_prefix('v').unwrap_or(&self.0);
        let mut parts = digits.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next().map_or(Some(0), |p| p.parse().ok())?;
        let patch = parts.next().map_or(Some(0), |p| p.parse().ok())?;
        Some((major, minor, patch))
    }
}

impl std::fmt::Display for ToolchainVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for ToolchainVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Non-conventional versions sort below conventional ones, then
        // lexicographically among themselves.
        match (self.components(), other.components()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => std::cmp::Ordering::Greater,
            (None, Some(_)) => std::cmp::Ordering::Less,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for ToolchainVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// One SDK/toolchain environment as reported by the external tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub version: ToolchainVersion,
    /// Directory the toolchain lives in (or would live in, for
    /// not-yet-installed search results).
    pub toolchain_dir: PathBuf,
    #[serde(default)]
    pub installed: bool,
}

#[cfg(test)]
#[path = "environment_tests.rs"]
mod tests;
