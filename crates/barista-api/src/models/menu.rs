//! Menu data models

use barista_core::catalog::BaseRecipe;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One drink on the menu
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DrinkDto {
    /// Catalog key, e.g. "latte_hot"
    pub id: String,

    /// Display name, e.g. "Hot Latte"
    pub name: String,

    /// Ordered ingredient lines of the base recipe
    pub ingredients: Vec<String>,

    /// Ordered preparation steps of the base recipe
    pub steps: Vec<String>,
}

impl DrinkDto {
    pub fn from_catalog(id: &str, base: &BaseRecipe) -> Self {
        Self {
            id: id.to_string(),
            name: base.name.clone(),
            ingredients: base.ingredients.clone(),
            steps: base.steps.clone(),
        }
    }
}

/// Menu response: the full drink catalog plus the flavor options
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuResponse {
    /// Drinks in menu display order
    pub drinks: Vec<DrinkDto>,

    /// Flavor display names; "None" means no flavor
    pub flavors: Vec<String>,
}
