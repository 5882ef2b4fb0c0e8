use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::{health, menu, selection},
    models::menu::{DrinkDto, MenuResponse},
    models::selection::{
        HistoryResponse, RecipeDto, SelectionRecordDto, SelectionRequest, SelectionResponse,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Barista API",
        version = "1.0.0",
        description = "Coffee drink customization and selection history API"
    ),
    paths(
        crate::handlers::menu::get_menu,
        crate::handlers::selection::create_selection,
        crate::handlers::selection::list_selections,
        crate::handlers::health::health,
    ),
    components(
        schemas(
            MenuResponse,
            DrinkDto,
            SelectionRequest,
            SelectionResponse,
            RecipeDto,
            SelectionRecordDto,
            HistoryResponse,
        )
    ),
    tags(
        (name = "menu", description = "Drink catalog"),
        (name = "selections", description = "Drink customization and history"),
        (name = "health", description = "Service health"),
    )
)]
struct ApiDoc;

pub fn create_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let doc = ApiDoc::openapi();

    Router::new()
        .route("/api/v1/menu", get(menu::get_menu))
        .route(
            "/api/v1/selections",
            post(selection::create_selection).get(selection::list_selections),
        )
        .route("/health", get(health::health))
        .layer(cors)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc))
        .with_state(state)
}
