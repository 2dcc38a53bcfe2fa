// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        setup / assets / release
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!             pipeline      git     version
//!           state machine   gix     header
//!                 |
//!      +----------+----------+
//!      v          v          v
//!   layout     manifest    tools
//!   staging    shared libs build/test/content
//!
//!   +-----------------------------------------+
//!   |  core   process builder, platforms      |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod layout;
pub mod logging;
pub mod manifest;
pub mod pipeline;
pub mod tools;
pub mod utility;
pub mod version;
