use crate::error::{FootprintError, Result};
use crate::model::{EmissionCategory, EmissionEntry, EntryDraft, NumberOfDays};
use crate::validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Toml,
    Yaml,
    Json,
}

/// Picks the sheet format from the file extension.
pub fn detect_format(path: &Path) -> Result<SheetFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);
    match ext.as_deref() {
        Some("toml") => Ok(SheetFormat::Toml),
        Some("yaml") | Some("yml") => Ok(SheetFormat::Yaml),
        Some("json") => Ok(SheetFormat::Json),
        _ => Err(FootprintError::Parse(format!(
            "Unsupported entry sheet format: {} (expected .toml, .yaml, .yml or .json)",
            path.display()
        ))),
    }
}

/// A list of entries plus the period they cover.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EntrySheet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<NumberOfDays>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<DateTime<Utc>>,

    pub entries: Vec<EmissionEntry>,
}

impl EntrySheet {
    pub fn new(entries: Vec<EmissionEntry>) -> Self {
        Self {
            entries,
            ..Default::default()
        }
    }

    pub fn with_days(mut self, days: NumberOfDays) -> Self {
        self.days = Some(days);
        self
    }

    pub fn touch(&mut self) {
        self.saved = Some(Utc::now());
    }
}

#[derive(Debug, Deserialize)]
struct RawSheet {
    #[serde(default)]
    days: Option<i64>,

    #[serde(default)]
    saved: Option<DateTime<Utc>>,

    #[serde(default)]
    entries: Vec<RawSheetEntry>,
}

#[derive(Debug, Deserialize)]
struct RawSheetEntry {
    category: String,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(alias = "dailyUsage")]
    daily_usage: f64,
}

impl RawSheet {
    fn into_sheet(self) -> Result<EntrySheet> {
        let days = self.days.map(validation::validate_days).transpose()?;

        let entries = self
            .entries
            .into_iter()
            .enumerate()
            .map(|(i, raw)| {
                let category: EmissionCategory =
                    raw.category.parse().map_err(|e| at_position(i, e))?;
                validation::validate_entry(
                    &EntryDraft::new()
                        .with_category(category)
                        .with_type(raw.type_name)
                        .with_daily_usage(raw.daily_usage),
                )
                .map_err(|e| at_position(i, e))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(EntrySheet {
            days,
            saved: self.saved,
            entries,
        })
    }
}

/// Tags a rejected entry with its 1-based position in the sheet.
fn at_position(index: usize, err: FootprintError) -> FootprintError {
    let reason = match err {
        FootprintError::InvalidEntry(reason) | FootprintError::Parse(reason) => reason,
        other => other.to_string(),
    };
    FootprintError::InvalidEntry(format!("entry {}: {}", index + 1, reason))
}

pub fn parse_sheet(content: &str, format: SheetFormat) -> Result<EntrySheet> {
    let raw: RawSheet = match format {
        SheetFormat::Toml => toml::from_str(content)?,
        SheetFormat::Yaml => serde_yaml::from_str(content)?,
        SheetFormat::Json => serde_json::from_str(content)?,
    };
    raw.into_sheet()
}

pub fn render_sheet(sheet: &EntrySheet, format: SheetFormat) -> Result<String> {
    let mut output = match format {
        SheetFormat::Toml => toml::to_string_pretty(sheet)?,
        SheetFormat::Yaml => serde_yaml::to_string(sheet)?,
        SheetFormat::Json => serde_json::to_string_pretty(sheet)?,
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

pub fn load_sheet(path: &Path) -> Result<EntrySheet> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    let sheet = parse_sheet(&content, format)?;
    tracing::info!(
        path = %path.display(),
        entries = sheet.entries.len(),
        "Loaded entry sheet"
    );
    Ok(sheet)
}

/// Writes the sheet atomically: temp file in the target directory, fsync, rename.
pub fn save_sheet(path: &Path, sheet: &EntrySheet) -> Result<()> {
    let format = detect_format(path)?;
    let content = render_sheet(sheet, format)?;

    let target_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(target_dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.as_file().sync_all()?;
    temp_file
        .persist(path)
        .map_err(|e| FootprintError::Io(e.error))?;

    tracing::info!(
        path = %path.display(),
        entries = sheet.entries.len(),
        "Saved entry sheet"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EmissionType, FoodType, HomeEnergyType, TransportationType};
    use tempfile::TempDir;

    fn sample() -> EntrySheet {
        EntrySheet::new(vec![
            EmissionEntry::new(TransportationType::GasolineCar, 10.0).unwrap(),
            EmissionEntry::new(HomeEnergyType::NaturalGas, 1.5).unwrap(),
            EmissionEntry::new(FoodType::Beef, 0.5).unwrap(),
        ])
        .with_days(NumberOfDays::new(7).unwrap())
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(Path::new("week.toml")).unwrap(),
            SheetFormat::Toml
        );
        assert_eq!(
            detect_format(Path::new("week.YML")).unwrap(),
            SheetFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("dir/week.json")).unwrap(),
            SheetFormat::Json
        );
        assert!(detect_format(Path::new("week.csv")).is_err());
        assert!(detect_format(Path::new("week")).is_err());
    }

    #[test]
    fn test_parse_toml_sheet() {
        let content = r#"
days = 7

[[entries]]
category = "transportation"
type = "gasoline_car"
daily_usage = 10

[[entries]]
category = "food"
type = "beef"
daily_usage = 0.5
"#;
        let sheet = parse_sheet(content, SheetFormat::Toml).unwrap();
        assert_eq!(sheet.days.map(|d| d.get()), Some(7));
        assert_eq!(sheet.entries.len(), 2);
        assert_eq!(
            sheet.entries[1].kind(),
            EmissionType::Food(FoodType::Beef)
        );
    }

    #[test]
    fn test_parse_yaml_sheet_without_days() {
        let content = r#"
entries:
  - category: home_energy
    type: electricity
    daily_usage: 8
"#;
        let sheet = parse_sheet(content, SheetFormat::Yaml).unwrap();
        assert_eq!(sheet.days, None);
        assert_eq!(sheet.entries.len(), 1);
    }

    #[test]
    fn test_parse_json_sheet_camel_case() {
        let content = r#"{"days": 3, "entries": [{"category": "food", "type": "rice", "dailyUsage": 0.2}]}"#;
        let sheet = parse_sheet(content, SheetFormat::Json).unwrap();
        assert_eq!(sheet.entries[0].daily_usage(), 0.2);
    }

    #[test]
    fn test_invalid_entry_names_position() {
        let content = r#"
[[entries]]
category = "food"
type = "beef"
daily_usage = 1

[[entries]]
category = "transportation"
type = "beef"
daily_usage = 1
"#;
        let err = parse_sheet(content, SheetFormat::Toml).unwrap_err();
        assert!(matches!(err, FootprintError::InvalidEntry(_)));
        assert!(err.to_string().contains("entry 2"));
    }

    #[test]
    fn test_invalid_days_rejected() {
        let content = r#"{"days": 0, "entries": []}"#;
        let err = parse_sheet(content, SheetFormat::Json).unwrap_err();
        assert!(matches!(err, FootprintError::InvalidDayCount(_)));
    }

    #[test]
    fn test_save_and_load_each_format() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["sheet.toml", "sheet.yaml", "sheet.json"] {
            let path = temp_dir.path().join(name);
            let mut sheet = sample();
            sheet.touch();
            save_sheet(&path, &sheet).unwrap();

            let loaded = load_sheet(&path).unwrap();
            assert_eq!(loaded.days, sheet.days, "{name}");
            assert_eq!(loaded.entries, sheet.entries, "{name}");
            assert!(loaded.saved.is_some(), "{name}");
        }
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sheet.json");
        save_sheet(&path, &sample()).unwrap();
        save_sheet(&path, &EntrySheet::default()).unwrap();

        let loaded = load_sheet(&path).unwrap();
        assert!(loaded.entries.is_empty());
    }
}
