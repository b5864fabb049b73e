use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};

use super::AppState;
use crate::api::models::{SaveResponse, SaveResult};
use crate::error::Result;
use crate::repositories::{NewWeatherReading, WeatherReading};

/// GET /
pub async fn root() -> &'static str {
    "Hello World"
}

/// GET /weather
/// Returns every stored reading as a bare JSON array.
pub async fn list_readings(State(state): State<AppState>) -> Result<Json<Vec<WeatherReading>>> {
    let readings = state.repository.find_all().await?;

    Ok(Json(readings))
}

/// POST /weather
/// Accepts a partial reading field set and persists it. The response carries
/// the serving timestamp, not the assigned id.
pub async fn create_reading(
    State(state): State<AppState>,
    Json(new): Json<NewWeatherReading>,
) -> Result<Json<SaveResponse>> {
    state.repository.save(&new).await?;

    Ok(Json(SaveResponse {
        result: SaveResult {
            message: "saved".to_string(),
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        },
    }))
}
