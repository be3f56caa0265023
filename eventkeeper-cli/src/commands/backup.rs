//! Backup command - inspect backup freshness

use anyhow::{bail, Result};
use clap::Subcommand;
use colored::Colorize;
use serde::Serialize;

use super::{get_config, GlobalOpts};
use crate::output;
use eventkeeper_core::services::BackupLocator;
use eventkeeper_core::{BackupInfo, BackupLookup, BackupReport, BackupSource};

#[derive(Subcommand)]
pub enum BackupCommands {
    /// Show the most recent backup
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fail unless a backup newer than --max-age exists
    Check {
        /// Maximum acceptable backup age in seconds
        #[arg(long, short = 'm')]
        max_age: u64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct CheckResult {
    #[serde(flatten)]
    report: BackupReport,
    max_age_seconds: u64,
    fresh: bool,
}

/// Get a BackupLocator without opening the event database
fn get_backup_locator(opts: &GlobalOpts) -> Result<BackupLocator> {
    let config = get_config(opts)?;
    Ok(BackupLocator::new(config.backup_dir))
}

fn describe_source(info: &BackupInfo) -> String {
    match info.source {
        BackupSource::Named { epoch } => format!("filename epoch {}", epoch),
        BackupSource::Modified => "file modification time".to_string(),
    }
}

pub fn run(opts: &GlobalOpts, command: BackupCommands) -> Result<()> {
    let locator = get_backup_locator(opts)?;
    let lookup = locator.locate()?;

    match command {
        BackupCommands::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&lookup.to_report())?);
                return Ok(());
            }

            match &lookup {
                BackupLookup::Found(info) => {
                    let mut table = output::create_table();
                    table.add_row(vec!["Name".to_string(), info.name.clone()]);
                    table.add_row(vec![
                        "Age".to_string(),
                        format!("{} ({} s)", info.age_display(), info.age_seconds),
                    ]);
                    table.add_row(vec!["Dated by".to_string(), describe_source(info)]);
                    table.add_row(vec!["Size".to_string(), info.size_display()]);
                    println!("{}", table);
                }
                BackupLookup::NotFound => {
                    println!(
                        "No backups found in {}.",
                        locator.backup_dir().display()
                    );
                }
            }
        }
        BackupCommands::Check { max_age, json } => {
            let fresh = lookup.is_fresh(max_age);

            if json {
                let result = CheckResult {
                    report: lookup.to_report(),
                    max_age_seconds: max_age,
                    fresh,
                };
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if let Some(info) = lookup.info() {
                let line = format!("{} is {} old", info.name, info.age_display());
                if fresh {
                    println!("{} {}", "OK".green(), line);
                } else {
                    output::warning(&format!("STALE {}", line));
                }
            }

            match lookup.info() {
                None => bail!("No backup found in {}", locator.backup_dir().display()),
                Some(info) if !fresh => bail!(
                    "Latest backup {} is {} s old (limit {} s)",
                    info.name,
                    info.age_seconds,
                    max_age
                ),
                Some(_) => {}
            }
        }
    }

    Ok(())
}
