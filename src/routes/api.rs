//! Handler for the `/api` color endpoint.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ApiQuery {
    pub format: Option<String>,
}

/// Structured response for `format=json`.
#[derive(Debug, Serialize)]
pub struct ColorResponse {
    pub color: String,
    pub hostname: String,
}

/// Color endpoint. Returns JSON when `format=json` is given, otherwise a
/// plain delimited string. Any other format value gets the plain form too.
pub async fn color(State(state): State<AppState>, Query(query): Query<ApiQuery>) -> Response {
    if query.format.as_deref() == Some("json") {
        Json(ColorResponse {
            color: state.color.to_string(),
            hostname: state.hostname.to_string(),
        })
        .into_response()
    } else {
        format!("COLOR : {}, HOSTNAME : {}", state.color, state.hostname).into_response()
    }
}
