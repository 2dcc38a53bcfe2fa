// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   copy:  copy_file_preserving()  copy + permissions + mtime
//!   ensure_dir(), remove_dir_if_exists()
//! ```

pub mod fs;
