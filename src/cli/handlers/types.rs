use crate::cli::commands::CategoryArg;
use crate::factors::{emission_description, factor_of, format_type_label, list_types_for, unit_label_for};
use crate::model::EmissionCategory;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_types(_ctx: &CommandContext, category: CategoryArg, json: bool) -> Result<()> {
    let category: EmissionCategory = category.into();
    let types = list_types_for(category);

    if json {
        let rows: Vec<_> = types
            .iter()
            .map(|t| {
                serde_json::json!({
                    "type": t.as_str(),
                    "label": format_type_label(t.as_str()),
                    "factor": factor_of(*t),
                    "unit": unit_label_for(category, Some(*t)),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for t in types {
        println!(
            "{:<14} {:<14} {}",
            t.as_str().cyan(),
            format_type_label(t.as_str()),
            emission_description(t).dimmed()
        );
    }
    Ok(())
}
