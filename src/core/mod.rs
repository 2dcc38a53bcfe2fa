// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for platforms and process management.
//!
//! ```text
//!            core
//!             |
//!      +------+------+
//!      v             v
//!   platform      process
//!      |             |
//!  Arch32/Arch64  Builder, Output
//!  build order    run / spawn_detached
//! ```

pub mod platform;
pub mod process;
