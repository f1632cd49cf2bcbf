//! Premium prediction endpoint.

use crate::{
    config::Config,
    error::AppError,
    estimator,
    model::Predictor,
    profile::{Gender, InsuredProfile, Region, Smoker},
};
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub model: Arc<dyn Predictor>,
}

/// Raw submission from the form. Categorical fields arrive as the display
/// strings the controls offer ("Female", "Yes", "SouthWest") and are parsed
/// into the closed enums before any encoding happens.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub age: u32,
    pub gender: String,
    pub bmi: f64,
    pub children: u32,
    pub smoker: String,
    pub region: String,
}

/// Response for a successful prediction
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Estimated premium as a raw number.
    pub premium: f64,
    /// Premium formatted for display, e.g. "$1234.56".
    pub formatted: String,
    /// Echo of the submitted profile for user confirmation.
    pub profile: InsuredProfile,
}

/// POST /api/v1/predict - Estimate the insurance premium for one profile
pub async fn handle_predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    let start = Instant::now();

    let profile = InsuredProfile {
        age: request.age,
        gender: request.gender.parse::<Gender>()?,
        bmi: request.bmi,
        children: request.children,
        smoker: request.smoker.parse::<Smoker>()?,
        region: request.region.parse::<Region>()?,
    };
    profile.validate()?;

    let premium = estimator::estimate(&profile, state.model.as_ref())?;

    tracing::info!(
        model = %state.model.name(),
        age = profile.age,
        region = %profile.region,
        smoker = %profile.smoker,
        premium = premium,
        duration_us = start.elapsed().as_micros() as u64,
        "Estimated premium"
    );

    let formatted = format!("{}{:.2}", state.config.model.currency_symbol, premium);

    Ok(Json(PredictResponse {
        premium,
        formatted,
        profile,
    }))
}
