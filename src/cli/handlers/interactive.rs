use crate::factors::{emission_description, format_type_label, list_types_for};
use crate::error::FootprintError;
use crate::model::{EmissionCategory, EntryDraft};
use crate::storage::{EntrySheet, load_sheet, save_sheet};
use crate::validation;
use crate::worksheet::{DaysInput, Worksheet};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use super::CommandContext;
use super::utils::{entry_line, write_entry_list, write_summary};

const DAYS_NOTICE: &str = "Please enter a valid number of days (minimum 1)";

const HELP: &str = "\
Commands:
  add <category> <type> <usage>   Add an entry (usage per day)
  remove <n>                      Remove entry number n
  days [n]                        Set the number of days (blank clears it)
  list                            Show current entries
  types <category>                Show the types of a category
  summary                         Show total and per-category emissions
  save <path>                     Save entries to a .toml/.yaml/.json sheet
  help                            Show this help
  quit                            Leave";

pub fn handle_interactive(ctx: &CommandContext, load: Option<PathBuf>) -> Result<()> {
    let worksheet = match load {
        Some(path) => {
            let sheet = load_sheet(&path)
                .with_context(|| format!("Failed to load entry sheet {}", path.display()))?;
            let days = match sheet.days {
                Some(d) => d,
                None => ctx.default_days()?,
            };
            Worksheet::with_entries(sheet.entries, days)
        }
        None => {
            let mut worksheet = Worksheet::new();
            worksheet.set_days(ctx.default_days()?.into());
            worksheet
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(ctx, worksheet, stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// Drives a worksheet from line-oriented commands until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    ctx: &CommandContext,
    mut worksheet: Worksheet,
    input: R,
    out: &mut W,
) -> Result<Worksheet> {
    writeln!(out, "Carbon Footprint Calculator. Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();

        match command {
            "add" => add(&mut worksheet, &args, out)?,
            "remove" | "rm" => remove(&mut worksheet, &args, out)?,
            "days" => days(&mut worksheet, &args, out)?,
            "list" | "ls" => write_entry_list(out, worksheet.entries())?,
            "types" => types(&args, out)?,
            "summary" => summary(ctx, &worksheet, out)?,
            "save" => save(&worksheet, &args, out)?,
            "help" | "?" => writeln!(out, "{}", HELP)?,
            "quit" | "exit" | "q" => break,
            other => writeln!(
                out,
                "{} {} (type 'help')",
                "Unknown command:".red(),
                other
            )?,
        }
    }

    Ok(worksheet)
}

fn add<W: Write>(worksheet: &mut Worksheet, args: &[&str], out: &mut W) -> Result<()> {
    let [category, type_name, usage] = args else {
        writeln!(out, "Usage: add <category> <type> <usage>")?;
        return Ok(());
    };

    let category = match category.parse::<EmissionCategory>() {
        Ok(category) => category,
        Err(e) => {
            writeln!(out, "{} {}", "Rejected:".red(), e)?;
            return Ok(());
        }
    };

    let Ok(daily_usage) = usage.parse::<f64>() else {
        writeln!(
            out,
            "{} daily usage '{}' is not a number",
            "Rejected:".red(),
            usage
        )?;
        return Ok(());
    };

    worksheet.update_current(
        EntryDraft::new()
            .with_category(category)
            .with_type(*type_name)
            .with_daily_usage(daily_usage),
    );

    if worksheet.commit_current() {
        if let Some(entry) = worksheet.entries().last() {
            writeln!(out, "{} {}", "Added".green(), entry_line(entry))?;
        }
    } else {
        let reason = match validation::validate_entry(worksheet.current()) {
            Err(e) => e.to_string(),
            Ok(_) => "entry was not accepted".to_string(),
        };
        writeln!(out, "{} {}", "Rejected:".red(), reason)?;
    }
    Ok(())
}

fn remove<W: Write>(worksheet: &mut Worksheet, args: &[&str], out: &mut W) -> Result<()> {
    let position = match args {
        [n] => n.parse::<usize>().ok().filter(|n| *n > 0),
        _ => None,
    };
    let Some(position) = position else {
        writeln!(out, "Usage: remove <n> (entry number from 'list')")?;
        return Ok(());
    };

    match worksheet.remove_entry(position - 1) {
        Some(entry) => writeln!(out, "{} {}", "Removed".yellow(), entry_line(&entry))?,
        None => writeln!(out, "No entry #{}", position)?,
    }
    Ok(())
}

fn days<W: Write>(worksheet: &mut Worksheet, args: &[&str], out: &mut W) -> Result<()> {
    let input = match DaysInput::parse(&args.join(" ")) {
        Ok(input) => input,
        Err(FootprintError::InvalidDayCount(_)) => {
            writeln!(out, "{}", DAYS_NOTICE.red())?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    worksheet.set_days(input);
    if worksheet.is_valid_number_of_days() {
        writeln!(out, "Number of days: {}", input)?;
    } else {
        writeln!(out, "{}", DAYS_NOTICE.red())?;
    }
    Ok(())
}

fn types<W: Write>(args: &[&str], out: &mut W) -> Result<()> {
    let category = match args {
        [c] => c.parse::<EmissionCategory>().ok(),
        _ => None,
    };
    let Some(category) = category else {
        writeln!(out, "Usage: types <transportation|home_energy|food>")?;
        return Ok(());
    };

    for t in list_types_for(category) {
        writeln!(
            out,
            "  {} ({}) {}",
            t.as_str(),
            format_type_label(t.as_str()),
            emission_description(t).dimmed()
        )?;
    }
    Ok(())
}

fn summary<W: Write>(ctx: &CommandContext, worksheet: &Worksheet, out: &mut W) -> Result<()> {
    if worksheet.entries().is_empty() {
        writeln!(out, "No entries yet. Use 'add' first.")?;
        return Ok(());
    }

    match worksheet.summary() {
        Ok(summary) => write_summary(out, &summary, ctx.precision())?,
        Err(FootprintError::InvalidDayCount(_)) => writeln!(out, "{}", DAYS_NOTICE.red())?,
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn save<W: Write>(worksheet: &Worksheet, args: &[&str], out: &mut W) -> Result<()> {
    let [path] = args else {
        writeln!(out, "Usage: save <path>")?;
        return Ok(());
    };
    let path = Path::new(path);

    let mut sheet = EntrySheet::new(worksheet.entries().to_vec());
    if let Ok(days) = worksheet.days().to_days() {
        sheet = sheet.with_days(days);
    }
    sheet.touch();

    match save_sheet(path, &sheet) {
        Ok(()) => writeln!(
            out,
            "{} {} entries to {}",
            "Saved".green(),
            sheet.entries.len(),
            path.display()
        )?,
        Err(e) => writeln!(out, "{} {}", "Save failed:".red(), e)?,
    }
    Ok(())
}
