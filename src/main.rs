//! Islāmic Text Copier
//!
//! A grid of Arabic honorifics and expressions; click one to copy it, hover to read its
//! meaning. The same catalog is available from the command line.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use itc::catalog::PhraseCatalog;
use itc::clipboard;
use itc::gui::AppFlags;
use itc::utils::{self, AppSettings, ItcError};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(version, about = "Copy Islamic honorifics to the clipboard")]
struct Args {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Print every phrase with its index and meaning
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the meaning of one phrase
    Gloss { index: usize },
    /// Copy one phrase to the clipboard without opening a window
    Copy { index: usize },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let settings_path = args.config.unwrap_or_else(utils::settings_path);
    let catalog = PhraseCatalog::builtin();

    match args.command {
        None => {
            let settings = AppSettings::load_or_default(&settings_path);
            info!("Settings file: {:?}", settings_path);
            itc::app::run(AppFlags {
                catalog,
                settings,
                settings_path,
            })
        }
        Some(CliCommand::List { json }) => {
            if json {
                println!("{}", serde_json::to_string_pretty(catalog.entries())?);
            } else {
                for (index, entry) in catalog.entries().iter().enumerate() {
                    println!("{:>2}  {}  {}", index, entry.display_text, entry.gloss_text);
                }
            }
            Ok(())
        }
        Some(CliCommand::Gloss { index }) => {
            let entry = catalog.get(index).ok_or(ItcError::EntryNotFound(index))?;
            println!("{}", entry.gloss_text);
            Ok(())
        }
        Some(CliCommand::Copy { index }) => {
            let entry = catalog.get(index).ok_or(ItcError::EntryNotFound(index))?;
            clipboard::copy_and_wait(&entry.display_text)
                .map_err(|e| anyhow!("Failed to copy {}: {}", entry.display_text, e))?;
            println!("{} copied to clipboard", entry.display_text);
            Ok(())
        }
    }
}
