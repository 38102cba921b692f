use thiserror::Error;

use crate::Year;

/// Error type for operations at the boundary of the projection engine.
///
/// The projector itself is total over its domain and never fails. These
/// variants cover input validation, configuration loading and the session
/// handoff.
#[derive(Error, Debug)]
pub enum LongviewError {
    #[error("{0}")]
    Error(String),
    #[error("Parameter {name} must be a percentage in [0, 100], got {value}")]
    ParameterOutOfRange { name: &'static str, value: u32 },
    #[error("Year {year} is outside the projection range [{min}, {max}]")]
    YearOutOfRange { year: Year, min: Year, max: Year },
    #[error("No projection has been run yet")]
    NoProjection,
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for LongviewError {
    fn from(err: toml::de::Error) -> Self {
        LongviewError::Config(err.to_string())
    }
}

/// Convenience type for `Result<T, LongviewError>`.
pub type LongviewResult<T> = Result<T, LongviewError>;
