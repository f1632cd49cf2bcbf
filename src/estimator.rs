//! Premium estimation: encode a profile and invoke the model once.

use crate::error::AppError;
use crate::model::Predictor;
use crate::profile::InsuredProfile;

/// Estimate the premium for one insured profile.
///
/// Pure per invocation: encodes the categorical fields, assembles the feature
/// vector in training order, invokes the model with a batch of one, and
/// returns the single result. The caller validates field domains beforehand;
/// this function does not re-validate. Model failures propagate unchanged.
///
/// # Errors
///
/// Propagates any `ModelError` from the predictor as `AppError::Model`.
pub fn estimate(profile: &InsuredProfile, model: &dyn Predictor) -> Result<f64, AppError> {
    let features = profile.encode();
    let rows = vec![features.to_vec()];

    let predictions = model.predict(&rows)?;
    predictions
        .first()
        .copied()
        .ok_or_else(|| AppError::InternalError("model returned an empty batch".to_string()))
}
