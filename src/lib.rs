// retropad-rs: Plain-Text Editor Core
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
//!                |          file / search / config
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |         document          |
//!              |  path, encoding, caret,   |
//!              |  find / replace settings  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              codec       search    config
//!           detect, BOM  find, wrap  TOML, env
//!           transcode    replace_all
//!                 |           |
//!                 +-----+-----+
//!                       v
//!                 text (WideText)
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod codec;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod search;
pub mod text;
