//! Validation of classification options.

use crate::classify::engine::ClassifyConfig;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("--max-mismap must be a number, got {0}")]
    MismapNotANumber(f64),
    #[error("--max-intron must be a non-negative number, got {0}")]
    InvalidMaxIntron(f64),
}

/// Check option values before any input is read.
///
/// # Errors
///
/// Returns `ValidationError::MismapNotANumber` if `max_mismap` is NaN, or
/// `ValidationError::InvalidMaxIntron` if `max_intron` is NaN or negative.
///
/// # Examples
///
/// ```
/// use maf_splice_types::ClassifyConfig;
/// use maf_splice_types::utils::validation::validate_config;
///
/// assert!(validate_config(&ClassifyConfig::default()).is_ok());
/// assert!(validate_config(&ClassifyConfig { max_intron: -1.0, ..Default::default() }).is_err());
/// ```
pub fn validate_config(config: &ClassifyConfig) -> Result<(), ValidationError> {
    if config.max_mismap.is_nan() {
        return Err(ValidationError::MismapNotANumber(config.max_mismap));
    }
    if config.max_intron.is_nan() || config.max_intron < 0.0 {
        return Err(ValidationError::InvalidMaxIntron(config.max_intron));
    }
    Ok(())
}
