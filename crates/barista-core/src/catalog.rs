//! Static drink catalog
//!
//! The catalog is built once at first access and never mutated afterwards.
//! Lookups hand out shared references into the static table.

use std::{collections::HashMap, sync::LazyLock};

use serde::Serialize;

/// A catalog entry: display name plus ordered ingredient and step lists.
#[derive(Debug, Clone, Serialize)]
pub struct BaseRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl BaseRecipe {
    fn new(name: &str, ingredients: &[&str], steps: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Drink identifiers in menu display order.
pub const DRINK_IDS: &[&str] = &["drip", "iced_coffee", "latte_hot", "latte_iced", "cortado"];

/// Flavor display names offered to the client; "None" means no flavor.
///
/// Submitted flavors are not checked against this list.
pub const FLAVORS: &[&str] = &["None", "Vanilla", "Caramel", "Hazelnut", "Mocha"];

static CATALOG: LazyLock<HashMap<&'static str, BaseRecipe>> = LazyLock::new(|| {
    let mut catalog = HashMap::new();

    catalog.insert(
        "drip",
        BaseRecipe::new(
            "Drip Coffee",
            &[
                "20g medium-ground coffee",
                "300ml hot water (~96°C)",
                "Filter and drip coffee maker",
            ],
            &[
                "Place a filter in the drip coffee maker.",
                "Add 20g of medium-ground coffee to the filter.",
                "Pour 300ml of water into the reservoir.",
                "Start the machine and let the coffee brew.",
                "Serve immediately.",
            ],
        ),
    );

    catalog.insert(
        "iced_coffee",
        BaseRecipe::new(
            "Iced Coffee",
            &[
                "20g medium-ground coffee",
                "200ml hot water (~96°C)",
                "A glass full of ice",
            ],
            &[
                "Brew a strong cup of drip coffee using 20g coffee and 200ml water.",
                "Fill a glass with ice.",
                "Pour the hot coffee over the ice.",
                "Stir and serve.",
            ],
        ),
    );

    catalog.insert(
        "latte_hot",
        BaseRecipe::new(
            "Hot Latte",
            &[
                "1 shot espresso (18–20g coffee)",
                "180–200ml steamed milk",
            ],
            &[
                "Pull 1 shot of espresso into a cup.",
                "Steam the milk until it reaches 60–65°C with light microfoam.",
                "Pour steamed milk over the espresso, holding back the foam at first.",
                "Finish with a thin layer of foam on top.",
            ],
        ),
    );

    catalog.insert(
        "latte_iced",
        BaseRecipe::new(
            "Iced Latte",
            &[
                "1 shot espresso",
                "150–180ml cold milk",
                "Ice cubes",
            ],
            &[
                "Fill a tall glass with ice.",
                "Pull 1 shot of espresso.",
                "Pour cold milk over the ice.",
                "Add the espresso shot on top.",
                "Stir gently and serve.",
            ],
        ),
    );

    catalog.insert(
        "cortado",
        BaseRecipe::new(
            "Cortado",
            &[
                "1 shot espresso",
                "Equal part steamed milk (30–40ml)",
            ],
            &[
                "Pull 1 shot of espresso into a small glass.",
                "Steam a small amount of milk with very light foam.",
                "Pour an equal amount of milk into the espresso.",
                "Serve immediately.",
            ],
        ),
    );

    catalog
});

/// Look up the base recipe for a drink identifier.
pub fn get(drink_id: &str) -> Option<&'static BaseRecipe> {
    CATALOG.get(drink_id)
}

/// Iterate over all catalog entries in menu display order.
pub fn all() -> impl Iterator<Item = (&'static str, &'static BaseRecipe)> {
    DRINK_IDS
        .iter()
        .filter_map(|id| CATALOG.get(*id).map(|recipe| (*id, recipe)))
}
