use crate::factors::{list_types_for, unit_label_for};
use crate::model::EmissionCategory;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::format_category;

pub fn handle_categories(_ctx: &CommandContext, json: bool) -> Result<()> {
    if json {
        let categories: Vec<_> = EmissionCategory::ALL
            .iter()
            .map(|c| {
                serde_json::json!({
                    "category": c,
                    "unit": unit_label_for(*c, None),
                    "types": list_types_for(*c).iter().map(|t| t.as_str()).collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }

    for category in EmissionCategory::ALL {
        println!(
            "{} {} ({} types, {})",
            category.as_str().cyan(),
            format_category(category),
            list_types_for(category).len(),
            unit_label_for(category, None)
        );
    }
    Ok(())
}
