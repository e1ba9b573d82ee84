//! File storage for entry sheets.
//!
//! An entry sheet is a batch of entries to be summarized together, written
//! as TOML, YAML or JSON depending on the file extension.
//!
//! ## File Format
//!
//! ```toml
//! days = 7
//!
//! [[entries]]
//! category = "transportation"
//! type = "gasoline_car"
//! daily_usage = 10.0
//!
//! [[entries]]
//! category = "food"
//! type = "beef"
//! daily_usage = 0.5
//! ```
//!
//! ## Components
//!
//! - [`EntrySheet`]: entries plus an optional day count
//! - [`load_sheet`] / [`save_sheet`]: read and atomically write sheets
//! - [`parse_sheet`] / [`render_sheet`]: convert between sheets and text

mod sheet;

pub use sheet::{
    EntrySheet, SheetFormat, detect_format, load_sheet, parse_sheet, render_sheet, save_sheet,
};
