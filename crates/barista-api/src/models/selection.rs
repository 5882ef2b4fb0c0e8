//! Selection and recipe data models

use barista_core::{DerivedRecipe, SelectionRecord};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to customize a drink and log the selection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct SelectionRequest {
    /// Drink identifier, one of the fixed catalog keys
    #[validate(length(min = 1, message = "Drink type cannot be empty"))]
    pub drink_type: String,

    /// Flavor display name; omitted or empty means no flavor
    pub flavor: Option<String>,
}

/// A derived recipe ready for display
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeDto {
    /// Display title, flavor-prefixed when a flavor was chosen
    pub title: String,

    /// Ordered ingredient lines
    pub ingredients: Vec<String>,

    /// Ordered preparation steps
    pub steps: Vec<String>,
}

impl From<DerivedRecipe> for RecipeDto {
    fn from(recipe: DerivedRecipe) -> Self {
        Self {
            title: recipe.title,
            ingredients: recipe.ingredients,
            steps: recipe.steps,
        }
    }
}

/// One logged selection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SelectionRecordDto {
    pub drink_type: String,
    pub flavor: String,
    pub recipe_title: String,
    /// ISO-8601 local time, second precision
    pub timestamp: String,
}

impl From<SelectionRecord> for SelectionRecordDto {
    fn from(record: SelectionRecord) -> Self {
        Self {
            drink_type: record.drink_type,
            flavor: record.flavor,
            recipe_title: record.recipe_title,
            timestamp: record.timestamp,
        }
    }
}

/// Response from creating a selection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SelectionResponse {
    /// The derived recipe
    pub recipe: RecipeDto,

    /// The record appended to the selection log
    pub record: SelectionRecordDto,
}

/// Full selection history in stored order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryResponse {
    pub selections: Vec<SelectionRecordDto>,
    pub total_count: usize,
}
