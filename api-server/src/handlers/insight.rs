//! Prediction and behavioral analysis handlers

use axum::{extract::State, Json};
use insight_core::{analyze as analyze_behavior, derive_features, performance, FeatureVector, InteractionRecord};

use crate::extract::ValidatedJson;
use crate::models::{AnalyzeResponse, InteractionInput, PredictResponse, PredictionSummary, Recommendations};
use crate::{AppResult, AppState};

/// Model prediction plus behavioral analysis
pub async fn predict(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<InteractionInput>,
) -> AppResult<Json<PredictResponse>> {
    let record = InteractionRecord::from(input);
    let derived = derive_features(&record);
    let features = FeatureVector::from_parts(&record, &derived);

    // Runs inline on the worker; a 15-input regressor finishes in microseconds
    let score = state.model.predict(&features)?;
    let band = performance::categorize(score);
    let analysis = analyze_behavior(&record, &derived);

    tracing::debug!(
        score,
        category = band.name,
        profile = %analysis.learner_profile,
        "Prediction served"
    );

    Ok(Json(PredictResponse {
        prediction: PredictionSummary::new(score, band),
        analysis,
        recommendations: Recommendations {
            learning_material: performance::recommend_learning_material(band.number),
            feedback_message: performance::feedback_message(band.number),
        },
        raw_metrics: derived,
    }))
}

/// Behavioral analysis only; never touches the model
pub async fn analyze(
    ValidatedJson(input): ValidatedJson<InteractionInput>,
) -> AppResult<Json<AnalyzeResponse>> {
    let record = InteractionRecord::from(input);
    let derived = derive_features(&record);
    let analysis = analyze_behavior(&record, &derived);

    tracing::debug!(profile = %analysis.learner_profile, "Analysis served");

    Ok(Json(AnalyzeResponse {
        analysis,
        computed_metrics: derived,
    }))
}
