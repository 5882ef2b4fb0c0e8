//! Handler-level API tests against a temporary selection store.

use axum::{extract::State, http::StatusCode, Json};
use barista_api::{
    error::AppError,
    handlers::{menu, selection},
    models::selection::SelectionRequest,
    state::AppState,
};
use barista_core::{CoreError, SelectionLog};
use tempfile::TempDir;

fn test_state(dir: &TempDir) -> AppState {
    AppState {
        log: SelectionLog::new(dir.path().join("selections.json")),
    }
}

fn request(drink_type: &str, flavor: Option<&str>) -> SelectionRequest {
    SelectionRequest {
        drink_type: drink_type.to_string(),
        flavor: flavor.map(|f| f.to_string()),
    }
}

#[tokio::test]
async fn menu_lists_all_drinks_and_flavors() {
    let Json(response) = menu::get_menu().await;

    let ids: Vec<&str> = response.drinks.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["drip", "iced_coffee", "latte_hot", "latte_iced", "cortado"]
    );
    assert_eq!(
        response.flavors,
        vec!["None", "Vanilla", "Caramel", "Hazelnut", "Mocha"]
    );
}

#[tokio::test]
async fn create_selection_returns_recipe_and_logs_record() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    let (status, Json(response)) = selection::create_selection(
        State(state.clone()),
        Json(request("latte_hot", Some("Vanilla"))),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response.recipe.title, "Vanilla Hot Latte");
    assert_eq!(
        response.recipe.ingredients.last().unwrap(),
        "20ml vanilla syrup"
    );
    assert_eq!(
        response.recipe.steps.last().unwrap(),
        "Add vanilla syrup to taste and stir well."
    );
    assert_eq!(response.record.drink_type, "latte_hot");
    assert_eq!(response.record.flavor, "Vanilla");
    assert_eq!(response.record.recipe_title, "Vanilla Hot Latte");

    let stored = state.log.load().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].recipe_title, "Vanilla Hot Latte");
}

#[tokio::test]
async fn missing_flavor_defaults_to_none() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    let (_, Json(response)) =
        selection::create_selection(State(state.clone()), Json(request("drip", None)))
            .await
            .unwrap();

    assert_eq!(response.recipe.title, "Drip Coffee");
    assert_eq!(response.record.flavor, "None");

    // Blank flavor behaves the same way.
    let (_, Json(response)) =
        selection::create_selection(State(state), Json(request("drip", Some("   "))))
            .await
            .unwrap();
    assert_eq!(response.record.flavor, "None");
}

#[tokio::test]
async fn unknown_drink_is_rejected_without_log_write() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    let err = selection::create_selection(
        State(state.clone()),
        Json(request("espresso_martini", Some("Vanilla"))),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        AppError::Core(CoreError::UnknownDrink(ref id)) if id == "espresso_martini"
    ));
    assert!(state.log.load().unwrap().is_empty());
}

#[tokio::test]
async fn empty_drink_type_fails_validation() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    let err = selection::create_selection(State(state), Json(request("", None)))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ValidationError(_)));
}

#[tokio::test]
async fn history_returns_selections_in_submission_order() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    for (drink, flavor) in [
        ("drip", None),
        ("iced_coffee", Some("Caramel")),
        ("cortado", Some("Mocha")),
    ] {
        selection::create_selection(State(state.clone()), Json(request(drink, flavor)))
            .await
            .unwrap();
    }

    let Json(history) = selection::list_selections(State(state)).await.unwrap();

    assert_eq!(history.total_count, 3);
    let titles: Vec<&str> = history
        .selections
        .iter()
        .map(|s| s.recipe_title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Drip Coffee", "Caramel Iced Coffee", "Mocha Cortado"]
    );
}

#[tokio::test]
async fn history_on_fresh_store_is_empty() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    let Json(history) = selection::list_selections(State(state)).await.unwrap();
    assert_eq!(history.total_count, 0);
    assert!(history.selections.is_empty());
}
