//! Recipe derivation
//!
//! Pure function that clones a base recipe from the catalog and optionally
//! extends it with one flavor ingredient and one flavor step.

use serde::Serialize;

use crate::{
    catalog,
    error::{CoreError, Result},
};

/// A recipe derived from a catalog entry for a specific flavor choice.
///
/// Owns its lists; never aliases the static catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// Derive a recipe for `drink_id` with the given flavor.
///
/// The flavor is trimmed first; any case variant of "none" means no flavor.
/// With a flavor present, one syrup ingredient and one syrup step are
/// appended and the title is prefixed with the original-case flavor. Iced
/// drinks get 15ml of syrup, hot drinks 20ml.
pub fn derive(drink_id: &str, flavor: &str) -> Result<DerivedRecipe> {
    let base =
        catalog::get(drink_id).ok_or_else(|| CoreError::UnknownDrink(drink_id.to_string()))?;

    let flavor = flavor.trim();
    let flavor_lower = flavor.to_lowercase();
    let has_flavor = flavor_lower != "none";

    let mut ingredients = base.ingredients.clone();
    let mut steps = base.steps.clone();
    let mut title = base.name.clone();

    if has_flavor {
        let quantity = if drink_id.contains("iced") { 15 } else { 20 };
        ingredients.push(format!("{quantity}ml {flavor_lower} syrup"));
        steps.push(format!("Add {flavor_lower} syrup to taste and stir well."));
        title = format!("{flavor} {title}");
    }

    Ok(DerivedRecipe {
        title,
        ingredients,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn none_flavor_leaves_base_recipe_untouched() {
        for variant in ["None", "none", "NONE", "  none  ", " None"] {
            for (id, base) in catalog::all() {
                let derived = derive(id, variant).unwrap();
                assert_eq!(derived.title, base.name);
                assert_eq!(derived.ingredients, base.ingredients);
                assert_eq!(derived.steps, base.steps);
            }
        }
    }

    #[test]
    fn flavor_appends_one_ingredient_and_one_step() {
        for (id, base) in catalog::all() {
            let derived = derive(id, "Caramel").unwrap();
            assert_eq!(derived.ingredients.len(), base.ingredients.len() + 1);
            assert_eq!(derived.steps.len(), base.steps.len() + 1);
            assert!(derived.title.starts_with("Caramel "));
            assert_eq!(&derived.ingredients[..base.ingredients.len()], &base.ingredients[..]);
            assert_eq!(&derived.steps[..base.steps.len()], &base.steps[..]);
        }
    }

    #[test]
    fn syrup_quantity_depends_on_iced_substring() {
        let cases = [
            ("iced_coffee", "15ml"),
            ("drip", "20ml"),
            ("latte_iced", "15ml"),
            ("cortado", "20ml"),
        ];
        for (id, prefix) in cases {
            let derived = derive(id, "Hazelnut").unwrap();
            let syrup = derived.ingredients.last().unwrap();
            assert!(
                syrup.starts_with(prefix),
                "{id}: expected {prefix}, got {syrup}"
            );
        }
    }

    #[test]
    fn unknown_drink_is_rejected() {
        let err = derive("espresso_martini", "Vanilla").unwrap_err();
        assert!(matches!(err, CoreError::UnknownDrink(ref id) if id == "espresso_martini"));
    }

    #[test]
    fn vanilla_hot_latte_scenario() {
        let derived = derive("latte_hot", "Vanilla").unwrap();
        assert_eq!(derived.title, "Vanilla Hot Latte");
        assert_eq!(derived.ingredients.last().unwrap(), "20ml vanilla syrup");
        assert_eq!(
            derived.steps.last().unwrap(),
            "Add vanilla syrup to taste and stir well."
        );
    }

    #[test]
    fn flavor_is_trimmed_and_lowercased_where_required() {
        let derived = derive("drip", "  Mocha  ").unwrap();
        assert_eq!(derived.title, "Mocha Drip Coffee");
        assert_eq!(derived.ingredients.last().unwrap(), "20ml mocha syrup");
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = derive("latte_iced", "Vanilla").unwrap();
        let b = derive("latte_iced", "Vanilla").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn arbitrary_flavor_strings_are_accepted() {
        let derived = derive("cortado", "Pumpkin Spice").unwrap();
        assert_eq!(derived.title, "Pumpkin Spice Cortado");
        assert_eq!(derived.ingredients.last().unwrap(), "20ml pumpkin spice syrup");
    }
}
