use std::{error::Error, fmt, io, path::PathBuf};

/// The valuation module's result type.
pub type Result<T> = std::result::Result<T, ValuationError>;

/// Startup failures while loading the static artifacts or the configuration.
///
/// All of these are fatal: the application cannot run without its artifacts.
#[derive(Debug)]
pub enum ValuationError {
    /// A file could not be opened or read.
    Io { path: PathBuf, source: io::Error },
    /// The reference table is not valid CSV or a row does not match the schema.
    Csv { path: PathBuf, source: csv::Error },
    /// The reference table parsed but has no rows.
    EmptyReference { path: PathBuf },
    /// The model artifact is not a valid model.
    Model { path: PathBuf, msg: String },
    /// The configuration file is invalid.
    Config(String),
}

impl fmt::Display for ValuationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read '{}': {source}", path.display()),
            Self::Csv { path, source } => {
                write!(f, "invalid reference data '{}': {source}", path.display())
            }
            Self::EmptyReference { path } => {
                write!(f, "reference data '{}' has no rows", path.display())
            }
            Self::Model { path, msg } => write!(f, "invalid model '{}': {msg}", path.display()),
            Self::Config(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for ValuationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Failures raised by a predictor while scoring a feature row.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// The model references a column the feature row does not have.
    UnknownFeature(String),
    /// The model's encoder has no state for this category.
    UnknownCategory { feature: String, value: String },
    /// The model produced NaN or infinity.
    NonFinite(f64),
    /// Any other failure reported by a predictor implementation.
    Other(String),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFeature(name) => write!(f, "model expects unknown feature '{name}'"),
            Self::UnknownCategory { feature, value } => {
                write!(f, "found unknown category '{value}' in column '{feature}'")
            }
            Self::NonFinite(v) => write!(f, "model produced a non-finite value ({v})"),
            Self::Other(msg) => f.write_str(msg),
        }
    }
}

impl Error for PredictError {}

/// Errors caught at the interaction boundary and shown inline to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerError {
    /// The selected neighborhood is not in the reference data.
    LocationNotFound { neighborhood: String },
    /// Assembling or scoring the feature row failed.
    Prediction(PredictError),
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocationNotFound { .. } => f.write_str("Location not found in the dataset."),
            Self::Prediction(e) => write!(f, "Prediction error: {e}"),
        }
    }
}

impl Error for HandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Prediction(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PredictError> for HandlerError {
    fn from(value: PredictError) -> Self {
        Self::Prediction(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_messages() {
        let miss = HandlerError::LocationNotFound {
            neighborhood: "Atlantis".into(),
        };
        assert_eq!(miss.to_string(), "Location not found in the dataset.");

        let failed: HandlerError = PredictError::Other("encoder not fitted".into()).into();
        assert_eq!(failed.to_string(), "Prediction error: encoder not fitted");
        assert!(failed.source().is_some());
    }
}
