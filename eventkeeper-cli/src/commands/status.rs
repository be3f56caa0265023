//! Status command - event totals and backup freshness

use anyhow::Result;
use colored::Colorize;

use super::{get_context, GlobalOpts};
use crate::output;

pub fn run(opts: &GlobalOpts, json: bool) -> Result<()> {
    let ctx = get_context(opts)?;
    let status = ctx.status_service.get_status()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", "Event Log Status".bold());
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Events".to_string(), status.event_count.to_string()]);
    if let Some(event) = &status.latest_event {
        table.add_row(vec!["Latest event".to_string(), event.timestamp.clone()]);
    }
    match (&status.backup.name, status.backup.age_seconds) {
        (Some(name), Some(age)) => {
            table.add_row(vec!["Last backup".to_string(), name.clone()]);
            table.add_row(vec!["Backup age".to_string(), format!("{} s", age)]);
        }
        _ => {
            table.add_row(vec!["Last backup".to_string(), "none".to_string()]);
        }
    }
    println!("{}", table);

    if status.backup.name.is_none() {
        println!();
        output::warning(&format!(
            "No backups found in {}",
            ctx.config.backup_dir.display()
        ));
    }

    Ok(())
}
