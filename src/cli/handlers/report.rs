use crate::calculator::summarize;
use crate::model::NumberOfDays;
use crate::storage::load_sheet;
use anyhow::{Context, Result};
use std::path::Path;

use super::CommandContext;
use super::utils::{print_summary, write_entry_list};

pub fn handle_report(
    ctx: &CommandContext,
    path: &Path,
    days: Option<NumberOfDays>,
    json: bool,
) -> Result<()> {
    let sheet = load_sheet(path)
        .with_context(|| format!("Failed to load entry sheet {}", path.display()))?;

    // Command line beats the sheet, the sheet beats the config
    let days = match days.or(sheet.days) {
        Some(d) => d,
        None => ctx.default_days()?,
    };

    let summary = summarize(&sheet.entries, days);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        write_entry_list(&mut std::io::stdout().lock(), &sheet.entries)?;
        println!();
        print_summary(&summary, ctx.precision())?;
    }
    Ok(())
}
