//! Add command - record an event

use anyhow::Result;

use super::{get_context, GlobalOpts};
use crate::output;

pub fn run(opts: &GlobalOpts, message: &str, json: bool) -> Result<()> {
    let ctx = get_context(opts)?;
    let event = ctx.event_service.record(message)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&event)?);
    } else {
        output::success("Event recorded");
        println!("  Id:        {}", event.id);
        println!("  Timestamp: {}", event.timestamp);
        println!("  Message:   {}", event.message);
    }

    Ok(())
}
