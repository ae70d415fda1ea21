// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Drift CLI
//!
//! Bootstraps the settings store over the filesystem config dir, applies at
//! most one edit, and prints the resulting record as JSON.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use drift_app_core::{AppInteractor, SettingsEdit};
use drift_config_fs::{BackgroundConfigPort, FsConfigStore};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect and edit Drift settings")]
struct Args {
    /// Directory holding settings.json (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Print the current settings
    Show,
    /// Change one field, e.g. `set isPremiumUser true`
    Set {
        /// Field name (snake_case or camelCase)
        field: String,
        /// New value
        value: String,
    },
    /// Restore every field to its default
    Reset,
}

fn parse_bool(field: &str, value: &str) -> Result<bool> {
    value
        .parse()
        .with_context(|| format!("{field} expects true or false, got {value:?}"))
}

fn parse_edit(field: &str, value: &str) -> Result<SettingsEdit> {
    let edit = match field {
        "start_page" | "startPage" => SettingsEdit::SetStartPage(value.to_string()),
        "enable_browser_history" | "enableBrowserHistory" => {
            SettingsEdit::SetBrowserHistory(parse_bool(field, value)?)
        }
        "notifications_enabled" | "notificationsEnabled" => {
            SettingsEdit::SetNotifications(parse_bool(field, value)?)
        }
        "language" => SettingsEdit::SetLanguage(value.to_string()),
        "enable_watermark" | "enableWatermark" => {
            SettingsEdit::SetWatermark(parse_bool(field, value)?)
        }
        "is_premium_user" | "isPremiumUser" => SettingsEdit::SetPremium(parse_bool(field, value)?),
        other => bail!("unknown settings field: {other}"),
    };
    Ok(edit)
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let edit = match &args.cmd {
        Command::Show => None,
        Command::Set { field, value } => Some(parse_edit(field, value)?),
        Command::Reset => Some(SettingsEdit::ResetToDefaults),
    };

    let store = match &args.config_dir {
        Some(dir) => FsConfigStore::with_base_dir(dir),
        None => FsConfigStore::new(),
    }
    .context("opening config dir")?;
    debug!(dir = %store.base_dir().display(), "config store ready");
    let port = Arc::new(BackgroundConfigPort::spawn(store).context("starting config writer")?);

    let mut app = AppInteractor::bootstrap(port.clone());
    if let Some(edit) = edit {
        app.apply(edit);
    }
    let settings = app.settings();
    drop(app);
    port.flush();

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &settings)?;
    writeln!(out)?;
    Ok(())
}
