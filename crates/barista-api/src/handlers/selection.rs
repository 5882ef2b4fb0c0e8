//! Selection handlers: customize a drink, list the history

use axum::{extract::State, http::StatusCode, response::Json};
use barista_core::{derive, SelectionRecord};
use validator::Validate;

use crate::{
    error::AppError,
    models::selection::{HistoryResponse, SelectionRequest, SelectionResponse},
    state::AppState,
};

/// Customize a drink and log the selection
///
/// Derives a recipe for the requested drink and flavor, appends a record to
/// the selection log and returns both. An unknown drink identifier yields
/// 404 and writes nothing.
#[utoipa::path(
    post,
    path = "/api/v1/selections",
    request_body = SelectionRequest,
    responses(
        (status = 201, description = "Selection created and logged", body = SelectionResponse),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Unknown drink identifier"),
        (status = 500, description = "Internal server error")
    ),
    tag = "selections"
)]
pub async fn create_selection(
    State(state): State<AppState>,
    Json(request): Json<SelectionRequest>,
) -> Result<(StatusCode, Json<SelectionResponse>), AppError> {
    request.validate()?;

    // Missing or blank flavor means "no flavor".
    let flavor = request
        .flavor
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .unwrap_or("None");

    tracing::info!("Customizing {} with flavor {flavor}", request.drink_type);

    let recipe = derive(&request.drink_type, flavor)?;

    let record = SelectionRecord::stamped(&request.drink_type, flavor, &recipe.title);
    state.log.append(record.clone())?;

    Ok((
        StatusCode::CREATED,
        Json(SelectionResponse {
            recipe: recipe.into(),
            record: record.into(),
        }),
    ))
}

/// List all logged selections
#[utoipa::path(
    get,
    path = "/api/v1/selections",
    responses(
        (status = 200, description = "Selections listed successfully", body = HistoryResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "selections"
)]
pub async fn list_selections(
    State(state): State<AppState>,
) -> Result<Json<HistoryResponse>, AppError> {
    let records = state.log.load()?;

    let selections: Vec<_> = records.into_iter().map(Into::into).collect();
    let total_count = selections.len();

    Ok(Json(HistoryResponse {
        selections,
        total_count,
    }))
}
