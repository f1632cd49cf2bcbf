//! Pre-trained model artifact.
//!
//! The estimator only ever sees the [`Predictor`] trait; the concrete artifact
//! here is a fitted linear regression stored as a JSON document and loaded
//! once at startup. Swapping the artifact format touches only this module.

use serde::Deserialize;
use std::path::Path;

/// Number of features the premium model consumes.
pub const NUM_FEATURES: usize = 6;

/// Failures raised by model loading or invocation.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model artifact '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed model artifact: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("input has {actual} features, model expects {expected}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("model artifact declares {0} coefficients, expected {1}")]
    BadCoefficientCount(usize, usize),
}

/// Capability interface for a fitted regression model: rows of features in,
/// one prediction per row out. This service always supplies a batch of one.
pub trait Predictor: Send + Sync {
    /// Predict one value per input row.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::ShapeMismatch` if a row does not match the
    /// feature count the model was fitted with.
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, ModelError>;

    /// Human-readable model name.
    fn name(&self) -> &str;

    /// Artifact version string.
    fn version(&self) -> &str;
}

/// The serialized artifact layout.
#[derive(Debug, Clone, Deserialize)]
struct ModelDocument {
    name: String,
    version: String,
    intercept: f64,
    coefficients: Vec<f64>,
}

/// A fitted linear regression: `prediction = intercept + coefficients . row`.
#[derive(Debug, Clone)]
pub struct LinearModel {
    name: String,
    version: String,
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearModel {
    /// Load the artifact from a JSON file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid JSON, or declares a
    /// coefficient count other than [`NUM_FEATURES`].
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let doc: ModelDocument = serde_json::from_str(&raw)?;

        if doc.coefficients.len() != NUM_FEATURES {
            return Err(ModelError::BadCoefficientCount(
                doc.coefficients.len(),
                NUM_FEATURES,
            ));
        }

        Ok(Self {
            name: doc.name,
            version: doc.version,
            intercept: doc.intercept,
            coefficients: doc.coefficients,
        })
    }

    fn predict_row(&self, row: &[f64]) -> f64 {
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(row)
            .map(|(c, x)| c * x)
            .sum();
        self.intercept + dot
    }
}

impl Predictor for LinearModel {
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, ModelError> {
        for row in rows {
            if row.len() != self.coefficients.len() {
                return Err(ModelError::ShapeMismatch {
                    expected: self.coefficients.len(),
                    actual: row.len(),
                });
            }
        }
        Ok(rows.iter().map(|row| self.predict_row(row)).collect())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }
}
