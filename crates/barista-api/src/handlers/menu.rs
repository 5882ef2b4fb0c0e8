//! Drink menu handler

use axum::response::Json;
use barista_core::catalog;

use crate::models::menu::{DrinkDto, MenuResponse};

/// Get the drink catalog and flavor options
#[utoipa::path(
    get,
    path = "/api/v1/menu",
    responses(
        (status = 200, description = "Menu listed successfully", body = MenuResponse),
    ),
    tag = "menu"
)]
pub async fn get_menu() -> Json<MenuResponse> {
    let drinks = catalog::all()
        .map(|(id, base)| DrinkDto::from_catalog(id, base))
        .collect();

    let flavors = catalog::FLAVORS.iter().map(|f| f.to_string()).collect();

    Json(MenuResponse { drinks, flavors })
}
