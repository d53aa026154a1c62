// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: (C) 2025 Cranky Kernel <crankykernel@proton.me>

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use std::fs::File;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use genietv::Config;

mod cli;
use cli::{ChannelsCommand, GuideCommand, OutputFormat};

fn cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Cyan.on_default())
}

#[derive(Parser)]
#[command(name = "genietv")]
#[command(about = "A terminal TV guide with a locally synthesized EPG")]
#[command(version)]
#[command(styles = cargo_style())]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug logging to file (genietv_debug.log)
    #[arg(long, global = true)]
    debug_log: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive guide (default if no command given)
    Tui,

    /// Print the now/next guide for the live lineup
    Guide {
        /// Channel id to show (all live channels if omitted)
        #[arg(short, long)]
        channel: Option<u32>,
        /// Pin the guide to an RFC 3339 instant instead of now
        #[arg(long)]
        at: Option<String>,
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List the bundled channel lineup
    Channels {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn parse_at(at: Option<String>) -> Result<Option<DateTime<Local>>> {
    at.map(|s| {
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Local))
            .with_context(|| format!("Invalid RFC 3339 timestamp: {}", s))
    })
    .transpose()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.debug_log {
        let file = File::create("genietv_debug.log")?;
        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_level(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(file_layer)
            .with(EnvFilter::from_default_env().add_directive("genietv=debug".parse()?))
            .init();
    } else if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .init();
    } else if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    }

    // Load configuration
    let config_path = Config::default_path();
    let config = Config::load_or_default(&config_path);
    tracing::debug!(
        "Config loaded from {} (refresh every {}s)",
        config_path.display(),
        config.ui.refresh_secs
    );

    match cli.command {
        Some(Commands::Tui) | None => {
            genietv::run_tui(config).await?;
        }

        Some(Commands::Guide {
            channel,
            at,
            format,
        }) => {
            let cmd = GuideCommand {
                channel,
                at: parse_at(at)?,
                format: OutputFormat::from_str(&format)?,
            };
            cmd.execute(&config)?;
        }

        Some(Commands::Channels { format }) => {
            let cmd = ChannelsCommand {
                format: OutputFormat::from_str(&format)?,
            };
            cmd.execute()?;
        }
    }

    Ok(())
}
