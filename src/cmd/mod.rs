// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   setup, assets, release, version-header, options, inis
//! ```
//!
//! Handlers take the executor and revision source as trait objects; `main`
//! passes the real ones.

pub mod assets;
pub mod config;
pub mod release;
pub mod setup;
