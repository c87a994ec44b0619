//! Erros do motor de cálculo AQI

use thiserror::Error;

use crate::types::Pollutant;

pub type AqmResult<T> = Result<T, AqmError>;

/// Erros do módulo de qualidade do ar
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AqmError {
    #[error("Unsupported pollutant: {0}")]
    UnsupportedPollutant(Pollutant),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
