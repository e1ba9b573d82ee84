use crate::factors::{emission_description, format_type_label, unit_label_for};
use crate::model::{EmissionCategory, EmissionEntry, EmissionSummary};
use colored::Colorize;
use std::io::{self, Write};

/// Format a kg CO2e amount with the configured number of decimals
pub fn format_kg(amount: f64, precision: usize) -> String {
    format!("{:.*} kg CO₂e", precision, amount)
}

/// Color a category name consistently across commands
pub fn format_category(category: EmissionCategory) -> colored::ColoredString {
    let label = format_type_label(category.as_str());
    match category {
        EmissionCategory::Transportation => label.blue(),
        EmissionCategory::HomeEnergy => label.yellow(),
        EmissionCategory::Food => label.green(),
    }
}

/// One-line description of an entry, e.g. `Transportation: Gasoline Car (10 km/day)`
pub fn entry_line(entry: &EmissionEntry) -> String {
    let kind = entry.kind();
    format!(
        "{}: {} ({} {}/day) {}",
        format_category(entry.category()),
        format_type_label(kind.as_str()),
        entry.daily_usage(),
        unit_label_for(entry.category(), Some(kind)),
        emission_description(kind).dimmed()
    )
}

/// Print a numbered list of entries
pub fn write_entry_list(out: &mut impl Write, entries: &[EmissionEntry]) -> io::Result<()> {
    if entries.is_empty() {
        writeln!(out, "No entries.")?;
        return Ok(());
    }

    for (i, entry) in entries.iter().enumerate() {
        writeln!(out, "{:>3}. {}", i + 1, entry_line(entry))?;
    }
    Ok(())
}

/// Print the emission summary block
pub fn write_summary(
    out: &mut impl Write,
    summary: &EmissionSummary,
    precision: usize,
) -> io::Result<()> {
    writeln!(out, "{}", "Emission Summary".bold())?;
    writeln!(
        out,
        "Total Carbon Footprint: {}",
        format_kg(summary.total_carbon_footprint, precision).bold()
    )?;
    writeln!(
        out,
        "Based on {} entries over {} days",
        summary.entries.len(),
        summary.number_of_days
    )?;
    for (category, amount) in &summary.by_category {
        writeln!(
            out,
            "  {}: {}",
            format_category(*category),
            format_kg(*amount, precision)
        )?;
    }
    Ok(())
}

pub fn print_summary(summary: &EmissionSummary, precision: usize) -> io::Result<()> {
    write_summary(&mut io::stdout().lock(), summary, precision)
}
