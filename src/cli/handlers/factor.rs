use crate::cli::commands::CategoryArg;
use crate::factors::{lookup_factor, unit_label_for};
use crate::model::{EmissionCategory, EmissionType};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_factor(
    _ctx: &CommandContext,
    category: CategoryArg,
    type_name: String,
    json: bool,
) -> Result<()> {
    let category: EmissionCategory = category.into();
    let factor = lookup_factor(category, &type_name)?;
    let kind = EmissionType::parse_in(category, &type_name)?;
    let unit = unit_label_for(category, Some(kind));

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "category": category,
                "type": kind.as_str(),
                "factor": factor,
                "unit": unit,
            }))?
        );
    } else {
        println!(
            "{} {} kg CO₂e/{}",
            format!("{}/{}", category, kind).cyan(),
            factor.to_string().bold(),
            unit
        );
    }
    Ok(())
}
