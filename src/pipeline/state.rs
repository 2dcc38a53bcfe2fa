// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release state machine.
//!
//! ```text
//! Initialized -stage-> Staged -build-> Built -test-> Tested
//!   -package-> Packaged -content-> ContentBuilt -finalize-> Finalized
//!
//! any non-terminal state --failure--> RolledBack { failed_stage }
//! ```

use serde::Serialize;

/// Where a release run currently is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReleaseState {
    Initialized,
    Staged,
    Built,
    Tested,
    Packaged,
    ContentBuilt,
    Finalized,
    RolledBack { failed_stage: String },
}

impl ReleaseState {
    /// State reached when the pending stage succeeds. `None` for terminal states.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Initialized => Some(Self::Staged),
            Self::Staged => Some(Self::Built),
            Self::Built => Some(Self::Tested),
            Self::Tested => Some(Self::Packaged),
            Self::Packaged => Some(Self::ContentBuilt),
            Self::ContentBuilt => Some(Self::Finalized),
            Self::Finalized | Self::RolledBack { .. } => None,
        }
    }

    /// Name of the stage that leads out of this state.
    #[must_use]
    pub const fn pending_stage(&self) -> Option<&'static str> {
        match self {
            Self::Initialized => Some("stage"),
            Self::Staged => Some("build"),
            Self::Built => Some("test"),
            Self::Tested => Some("package"),
            Self::Packaged => Some("content"),
            Self::ContentBuilt => Some("finalize"),
            Self::Finalized | Self::RolledBack { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Finalized | Self::RolledBack { .. })
    }
}

impl std::fmt::Display for ReleaseState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initialized => f.write_str("initialized"),
            Self::Staged => f.write_str("staged"),
            Self::Built => f.write_str("built"),
            Self::Tested => f.write_str("tested"),
            Self::Packaged => f.write_str("packaged"),
            Self::ContentBuilt => f.write_str("content built"),
            Self::Finalized => f.write_str("finalized"),
            Self::RolledBack { failed_stage } => write!(f, "rolled back ({failed_stage})"),
        }
    }
}
