// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Platform targets.
//!
//! ```text
//! PlatformTarget: Arch32 | Arch64
//!   manifest marker  "[32]" / "[64]"
//!   build order      Arch64, Arch32
//! ```
//!
//! The subfolder name and build-tool identifier of each target come from the
//! `[platforms]` config table; the set of targets itself is fixed.

use serde::{Deserialize, Serialize};

/// Binary architecture a target is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformTarget {
    /// 32-bit build
    Arch32,
    /// 64-bit build
    Arch64,
}

impl PlatformTarget {
    /// Every platform, in the order the release pipeline builds and tests them.
    pub const BUILD_ORDER: [Self; 2] = [Self::Arch64, Self::Arch32];

    /// Returns the dependency manifest section marker for this platform.
    #[must_use]
    pub const fn manifest_marker(&self) -> &'static str {
        match self {
            Self::Arch32 => "[32]",
            Self::Arch64 => "[64]",
        }
    }

    /// Parses a trimmed manifest line as a section marker.
    #[must_use]
    pub fn from_manifest_marker(line: &str) -> Option<Self> {
        match line {
            "[32]" => Some(Self::Arch32),
            "[64]" => Some(Self::Arch64),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlatformTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arch32 => write!(f, "arch32"),
            Self::Arch64 => write!(f, "arch64"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PlatformTarget;

    #[test]
    fn test_manifest_markers_round_trip() {
        for platform in PlatformTarget::BUILD_ORDER {
            assert_eq!(
                PlatformTarget::from_manifest_marker(platform.manifest_marker()),
                Some(platform)
            );
        }
        assert_eq!(PlatformTarget::from_manifest_marker("[86]"), None);
        assert_eq!(PlatformTarget::from_manifest_marker(" [32]"), None);
    }

    #[test]
    fn test_build_order_is_64_first() {
        assert_eq!(
            PlatformTarget::BUILD_ORDER,
            [PlatformTarget::Arch64, PlatformTarget::Arch32]
        );
    }
}
