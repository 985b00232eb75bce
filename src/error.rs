use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapperError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Field '{field}' has unexpected type, expected {expected}")]
    InvalidType { field: String, expected: &'static str },

    #[error("Invalid date '{value}': {reason}")]
    DateParse { value: String, reason: String },

    #[error("No mapper registered for source: {0}")]
    UnknownSource(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),
}

impl MapperError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn invalid_type(field: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected,
        }
    }

    /// True for failures that only cost a single field its value.
    pub fn is_field_level(&self) -> bool {
        matches!(self, Self::DateParse { .. })
    }

    /// Short label used for metrics and log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "missing_field",
            Self::InvalidType { .. } => "invalid_type",
            Self::DateParse { .. } => "date_parse",
            Self::UnknownSource(_) => "unknown_source",
            Self::Config(_) => "config",
            Self::Json(_) => "json",
            Self::Toml(_) => "toml",
        }
    }
}

pub type Result<T> = std::result::Result<T, MapperError>;
