use std::{collections::BTreeMap, path::Path};

use serde::Deserialize;

use crate::{
    error::{PredictError, Result, ValuationError},
    features::FeatureRow,
};

/// A fitted regression function.
///
/// Implementations are immutable once loaded and may be shared freely.
pub trait Predictor: Send + Sync {
    /// Scores a single feature row.
    ///
    /// # Errors
    /// Returns a `PredictError` if the row does not fit the model's schema or
    /// the model cannot produce a value.
    fn predict(&self, row: &FeatureRow) -> std::result::Result<f64, PredictError>;
}

/// What a one-hot encoder does with a category it never saw while fitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    #[default]
    Error,
    Ignore,
}

/// One-hot encoded categorical column folded into per-category weights.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoricalEncoder {
    pub categories: BTreeMap<String, f64>,
    #[serde(default)]
    pub handle_unknown: HandleUnknown,
}

/// Linear regression artifact, serialized as JSON.
///
/// ```json
/// {
///   "intercept": -1250000.0,
///   "coefficients": { "size_in_sqft": 1450.0, "quality": 85000.0 },
///   "categorical": {
///     "neighborhood": { "categories": { "Dubai Marina": 320000.0 } }
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinearModel {
    pub intercept: f64,
    #[serde(default)]
    pub coefficients: BTreeMap<String, f64>,
    #[serde(default)]
    pub categorical: BTreeMap<String, CategoricalEncoder>,
}

impl LinearModel {
    /// Loads a model artifact from disk.
    ///
    /// # Errors
    /// Returns a `ValuationError` if the file is missing, is not a valid model
    /// document or has no features at all.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ValuationError::Io {
            path: path.into(),
            source,
        })?;

        let model = Self::from_json(&content).map_err(|msg| ValuationError::Model {
            path: path.into(),
            msg,
        })?;

        log::info!(
            "loaded linear model from {} ({} numeric, {} categorical features)",
            path.display(),
            model.coefficients.len(),
            model.categorical.len()
        );
        Ok(model)
    }

    /// Parses a model artifact from its JSON text.
    ///
    /// # Errors
    /// Returns a human-readable string if the document is invalid.
    pub fn from_json(content: &str) -> std::result::Result<Self, String> {
        let model: Self = serde_json::from_str(content).map_err(|e| e.to_string())?;

        if model.coefficients.is_empty() && model.categorical.is_empty() {
            return Err("model has no features".into());
        }

        Ok(model)
    }
}

impl Predictor for LinearModel {
    fn predict(&self, row: &FeatureRow) -> std::result::Result<f64, PredictError> {
        let mut y = self.intercept;

        for (name, coef) in &self.coefficients {
            let x = row
                .numeric(name)
                .ok_or_else(|| PredictError::UnknownFeature(name.clone()))?;
            y += coef * x;
        }

        for (name, encoder) in &self.categorical {
            let value = row
                .categorical(name)
                .ok_or_else(|| PredictError::UnknownFeature(name.clone()))?;

            match (encoder.categories.get(value), encoder.handle_unknown) {
                (Some(weight), _) => y += weight,
                (None, HandleUnknown::Ignore) => {}
                (None, HandleUnknown::Error) => {
                    return Err(PredictError::UnknownCategory {
                        feature: name.clone(),
                        value: value.to_string(),
                    });
                }
            }
        }

        if !y.is_finite() {
            return Err(PredictError::NonFinite(y));
        }

        Ok(y)
    }
}
