// retropad-rs: Plain-Text Editor Core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Options | Inis | Detect | Cat | New | Convert | Find | Replace | Goto
//! ```

use std::process::ExitCode;

use anyhow::Context;
use retropad_rs::cli::global::GlobalOptions;
use retropad_rs::cli::{self, Command};
use retropad_rs::cmd::config::{run_inis_command, run_options_command};
use retropad_rs::cmd::file::{
    run_cat_command, run_convert_command, run_detect_command, run_goto_command, run_new_command,
};
use retropad_rs::cmd::search::{run_find_command, run_replace_command};
use retropad_rs::config::loader::ConfigLoader;
use retropad_rs::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use retropad_rs::error::Result;
use retropad_rs::logging::init_logging;
use retropad_rs::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = load_config(&cli.global);
    let log_config = build_log_config(&cli.global, config.as_ref().ok());
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, config)
}

/// Logging follows the loaded config; the bare flags are used when it failed to load.
fn build_log_config(global: &GlobalOptions, config: Option<&Config>) -> LogConfig {
    if let Some(config) = config {
        return LogConfig::builder()
            .with_console_level(config.global.output_log_level)
            .with_file_level(config.global.file_log_level)
            .maybe_with_log_file(
                config
                    .global
                    .log_file
                    .as_ref()
                    .map(|p| p.display().to_string()),
            )
            .build();
    }

    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::WARN);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: Result<Config>) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => config.map(|config| run_options_command(&config)),
        Some(Command::Inis) => build_config_loader(&cli.global).map(|loader| {
            run_inis_command(&loader.format_loaded_files());
        }),
        Some(Command::Detect(args)) => {
            config.and_then(|config| run_detect_command(args, &config))
        }
        Some(Command::Cat(args)) => config.and_then(|config| run_cat_command(args, &config)),
        Some(Command::New(args)) => config.and_then(|config| run_new_command(args, &config)),
        Some(Command::Convert(args)) => {
            config.and_then(|config| run_convert_command(args, &config))
        }
        Some(Command::Find(args)) => config.and_then(|config| run_find_command(args, &config)),
        Some(Command::Replace(args)) => {
            config.and_then(|config| run_replace_command(args, &config))
        }
        Some(Command::Goto(args)) => config.and_then(|config| run_goto_command(args, &config)),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(&key, value)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> Result<Config> {
    build_config_loader(global)?
        .build()
        .context("Failed to load config")
}
