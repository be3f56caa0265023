//! List command - show recent events

use anyhow::Result;

use super::{get_context, GlobalOpts};
use crate::output;

pub fn run(opts: &GlobalOpts, limit: Option<usize>, json: bool) -> Result<()> {
    let ctx = get_context(opts)?;
    let events = ctx.event_service.recent(limit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    if events.is_empty() {
        println!("No events recorded.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Id", "Timestamp", "Message"]);
    for event in events {
        table.add_row(vec![event.id.to_string(), event.timestamp, event.message]);
    }
    println!("{}", table);

    Ok(())
}
