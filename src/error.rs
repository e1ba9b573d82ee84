use thiserror::Error;

#[derive(Error, Debug)]
pub enum FootprintError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Invalid number of days: {0}")]
    InvalidDayCount(String),

    #[error("No emission factor for {category} / {type_name}")]
    UnknownFactor { category: String, type_name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),
}

pub type Result<T> = std::result::Result<T, FootprintError>;
