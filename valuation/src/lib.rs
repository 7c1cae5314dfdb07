pub mod config;
pub mod error;
pub mod features;
pub mod format;
pub mod map;
pub mod model;
pub mod neighborhoods;
pub mod session;
pub mod unit;

use std::path::Path;

pub use config::AppConfig;
pub use error::{HandlerError, PredictError, ValuationError};
pub use features::{FeatureRow, PropertyInput};
pub use model::{LinearModel, Predictor};
pub use neighborhoods::{NeighborhoodRecord, Neighborhoods};
pub use session::{Estimate, Phase, Session};
pub use unit::UnitType;

/// Decorative text art drawn behind the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Background {
    lines: Vec<String>,
}

impl Background {
    /// Reads the background art from disk.
    ///
    /// # Errors
    /// Returns a `ValuationError` if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> error::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ValuationError::Io {
            path: path.into(),
            source,
        })?;

        Ok(Self {
            lines: content.lines().map(str::to_owned).collect(),
        })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

/// Everything read from disk at startup. Immutable once loaded.
pub struct Artifacts {
    pub neighborhoods: Neighborhoods,
    pub model: LinearModel,
    pub background: Background,
}

impl Artifacts {
    /// Loads every static artifact named by the configuration.
    ///
    /// # Errors
    /// Returns the first `ValuationError` encountered; any missing or malformed
    /// artifact is fatal.
    pub fn load(config: &AppConfig) -> error::Result<Self> {
        log::info!("loading static artifacts");
        let model = LinearModel::load(&config.model_path)?;
        let neighborhoods = Neighborhoods::load(&config.neighborhoods_path)?;
        let background = Background::load(&config.background_path)?;

        Ok(Self {
            neighborhoods,
            model,
            background,
        })
    }

    /// Starts an interaction over these artifacts.
    pub fn session(&self, currency: &str) -> Session<'_> {
        Session::new(&self.neighborhoods, &self.model, currency)
    }
}
