use crate::config::FootprintSettings;
use crate::model::{EmissionCategory, EmissionEntry, NumberOfDays};
use crate::validation;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "footprint")]
#[command(
    author,
    version,
    about = "Estimate a carbon footprint from daily transportation, home energy and food usage"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .footprint.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, env = "FOOTPRINT_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a .footprint.toml config in the current directory
    Init {
        /// Default number of days for calculations
        #[arg(long, default_value_t = FootprintSettings::default().default_days)]
        days: u32,

        /// Decimal places in reports
        #[arg(long, default_value_t = FootprintSettings::default().precision)]
        precision: usize,
    },

    /// List emission categories
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the emission types of a category with their factors
    #[command(visible_alias = "ls")]
    Types {
        /// Category to list
        #[arg(value_enum)]
        category: CategoryArg,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the emission factor for a category and type
    Factor {
        /// Category of the emission type
        #[arg(value_enum)]
        category: CategoryArg,

        /// Emission type, e.g. gasoline_car
        r#type: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Calculate emissions for entries given on the command line
    #[command(visible_alias = "c")]
    Calc {
        /// Entry as <category>:<type>:<daily usage>, e.g. transportation:gasoline_car:10
        #[arg(short = 'e', long = "entry", required = true, value_parser = parse_entry_arg)]
        entries: Vec<EmissionEntry>,

        /// Number of days (defaults to the configured default)
        #[arg(short, long, value_parser = parse_days_arg)]
        days: Option<NumberOfDays>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Calculate emissions for an entry sheet (.toml, .yaml or .json)
    Report {
        /// Path to the entry sheet
        path: PathBuf,

        /// Number of days (overrides the sheet)
        #[arg(short, long, value_parser = parse_days_arg)]
        days: Option<NumberOfDays>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build up a worksheet interactively from stdin
    #[command(visible_alias = "i")]
    Interactive {
        /// Start from the entries of an existing sheet
        #[arg(long)]
        load: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    #[value(alias = "transport")]
    Transportation,
    #[value(name = "home_energy", aliases = ["home-energy", "energy"])]
    HomeEnergy,
    Food,
}

impl From<CategoryArg> for EmissionCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Transportation => EmissionCategory::Transportation,
            CategoryArg::HomeEnergy => EmissionCategory::HomeEnergy,
            CategoryArg::Food => EmissionCategory::Food,
        }
    }
}

fn parse_entry_arg(s: &str) -> Result<EmissionEntry, String> {
    s.parse().map_err(|e: crate::error::FootprintError| e.to_string())
}

fn parse_days_arg(s: &str) -> Result<NumberOfDays, String> {
    validation::parse_days(s).map_err(|e| e.to_string())
}
