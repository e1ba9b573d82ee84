use crate::calculator::summarize;
use crate::model::{EmissionEntry, NumberOfDays};
use anyhow::Result;

use super::CommandContext;
use super::utils::print_summary;

pub fn handle_calc(
    ctx: &CommandContext,
    entries: Vec<EmissionEntry>,
    days: Option<NumberOfDays>,
    json: bool,
) -> Result<()> {
    let days = match days {
        Some(d) => d,
        None => ctx.default_days()?,
    };

    let summary = summarize(&entries, days);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary, ctx.precision())?;
    }
    Ok(())
}
