//! Handler for the root HTML page.

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RootQuery {
    pub colorkey: Option<String>,
}

/// Root page showing the resolved color and hostname.
///
/// In database mode a `colorkey` query parameter selects the color per
/// request; an absent key falls back to the statically resolved color, while a
/// lookup failure surfaces as a server error. Color and hostname are
/// operator-controlled, so they are embedded without escaping.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<RootQuery>,
) -> Result<Html<String>, AppError> {
    let color = match (&state.store, query.colorkey.as_deref()) {
        (Some(store), Some(key)) => {
            tracing::debug!(colorkey = %key, "Looking up color");
            store
                .get_color(key)
                .await?
                .unwrap_or_else(|| state.color.to_string())
        }
        _ => state.color.to_string(),
    };

    Ok(Html(format!(
        "<h1 style=\"color:{};\">Hello from Color-API!</h1>\n<h2>Hostname: {}</h2>",
        color, state.hostname
    )))
}
