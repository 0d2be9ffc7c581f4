use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateFormatError {
    #[error("date '{input}' is shorter than a YYYY-MM-DD prefix")]
    TooShort { input: String },
    #[error("date '{input}' does not start with a valid YYYY-MM-DD calendar date")]
    InvalidDate { input: String },
}

impl DateFormatError {
    pub fn input(&self) -> &str {
        match self {
            Self::TooShort { input } | Self::InvalidDate { input } => input,
        }
    }
}
