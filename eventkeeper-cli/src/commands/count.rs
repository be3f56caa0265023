//! Count command - total number of events

use anyhow::Result;

use super::{get_context, GlobalOpts};

pub fn run(opts: &GlobalOpts, json: bool) -> Result<()> {
    let ctx = get_context(opts)?;
    let count = ctx.event_service.count()?;

    if json {
        println!("{}", serde_json::json!({ "count": count }));
    } else {
        println!("{}", count);
    }

    Ok(())
}
