// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> Document
//!   config (options, inis), file (detect, cat, new, convert, goto),
//!   search (find, replace)
//! ```

pub mod config;
pub mod file;
pub mod search;
