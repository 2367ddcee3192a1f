use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::app::{HostEvent, HostResponse, WindowsExtension};
use crate::compositor::{Compositor, NiriCompositor, WindowRecord};
use crate::config::load_config;
use crate::icon::{FreedesktopTheme, IconTheme};

#[derive(Parser)]
#[command(name = "niri-windows")]
#[command(about = "Search open niri windows and focus one", version)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/niri-windows/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print matching windows as a JSON result list (`null` for an empty query)
    Query {
        /// Search words; all must appear in the app id or title
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Focus the window described by a result's `on_enter` payload
    Select {
        /// Payload JSON; read from stdin when omitted
        payload: Option<String>,
    },
    /// Print every open window and its icon
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Run a command against the configured compositor.
pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref());
    debug!(?config, "Using config");

    let extension = WindowsExtension::new(
        NiriCompositor::new(config.compositor),
        FreedesktopTheme::new(config.icon_size, config.icon_theme),
        config.default_icon,
    );

    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Query { words } => {
            let response = extension.dispatch(HostEvent::Query(words.join(" ")))?;
            write_response(&mut stdout, &response)?;
        }
        Commands::Select { payload } => {
            let payload = match payload {
                Some(payload) => payload,
                None => read_stdin()?,
            };
            let window = parse_payload(&payload)?;
            extension.dispatch(HostEvent::Select(window))?;
        }
        Commands::List { json } => list_windows(&extension, &mut stdout, json)?,
    }

    stdout.flush().context("Failed to flush stdout")?;
    Ok(())
}

fn write_response(out: &mut impl Write, response: &HostResponse) -> Result<()> {
    match response {
        HostResponse::Render(items) => serde_json::to_writer(&mut *out, items)?,
        HostResponse::NoRender => out.write_all(b"null")?,
        HostResponse::Focused => return Ok(()),
    }
    writeln!(out)?;
    Ok(())
}

fn list_windows<C: Compositor, T: IconTheme>(
    extension: &WindowsExtension<C, T>,
    out: &mut impl Write,
    json: bool,
) -> Result<()> {
    let windows = extension.list()?;
    if json {
        serde_json::to_writer_pretty(&mut *out, &windows)?;
        writeln!(out)?;
    } else {
        for window in &windows {
            writeln!(out, "{window}")?;
        }
    }
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut payload = String::new();
    io::stdin()
        .read_to_string(&mut payload)
        .context("Failed to read selection payload from stdin")?;
    Ok(payload)
}

fn parse_payload(payload: &str) -> Result<WindowRecord> {
    serde_json::from_str(payload.trim()).context("Invalid selection payload")
}
