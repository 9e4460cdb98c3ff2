use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{IngredientCategory, IngredientType};

/// Guest count bounds enforced by callers of the calculator.
pub const MIN_GUESTS: u32 = 1;
pub const MAX_GUESTS: u32 = 50;

/// Seasoning ratios are expressed per this many gallons of boil water.
pub const REFERENCE_POT_GALLONS: f64 = 10.0;

/// Ingredient whose quantity scales with pot volume instead of guests.
pub const SEASONING_ID: &str = "seasoning";

/// Proteins that get cut back when more than one of them shares the pot.
/// Sausage is always served at its full ratio.
pub const REDUCIBLE_PROTEINS: [&str; 3] = ["crawfish", "shrimp", "crab"];

/// Countable units, shown as whole numbers.
pub const DISCRETE_UNITS: [&str; 3] = ["each", "ears", "cloves"];

/// Shopping list order by product category. Anything else goes last.
pub const CATEGORY_ORDER: [&str; 4] = ["protein", "vegetable", "seasoning", "sauce"];

/// Product categories the catalog knows about.
pub const PRODUCT_CATEGORIES: [&str; 5] = ["protein", "seasoning", "sauce", "vegetable", "equipment"];

/// Tolerance applied before taking a ceiling so float noise does not bump a
/// value to the next step.
pub const ROUNDING_EPSILON: f64 = 1e-9;

// ─────────────────────────────────────────────────────────────────────────────
// Ingredient catalog
// ─────────────────────────────────────────────────────────────────────────────

pub static INGREDIENTS: [IngredientType; 11] = [
    IngredientType { id: "crawfish", name: "Crawfish", icon: "🦞", category: IngredientCategory::Protein },
    IngredientType { id: "shrimp", name: "Shrimp", icon: "🦐", category: IngredientCategory::Protein },
    IngredientType { id: "crab", name: "Crab", icon: "🦀", category: IngredientCategory::Protein },
    IngredientType { id: "sausage", name: "Sausage", icon: "🌭", category: IngredientCategory::Protein },
    IngredientType { id: "corn", name: "Corn", icon: "🌽", category: IngredientCategory::Vegetable },
    IngredientType { id: "potatoes", name: "Potatoes", icon: "🥔", category: IngredientCategory::Vegetable },
    IngredientType { id: "onions", name: "Onions", icon: "🧅", category: IngredientCategory::Vegetable },
    IngredientType { id: "garlic", name: "Garlic", icon: "🧄", category: IngredientCategory::Vegetable },
    IngredientType { id: "lemons", name: "Lemons", icon: "🍋", category: IngredientCategory::Vegetable },
    IngredientType { id: "seasoning", name: "Seasoning", icon: "🌶️", category: IngredientCategory::Seasoning },
    IngredientType { id: "hot_sauce", name: "Hot Sauce", icon: "🔥", category: IngredientCategory::Seasoning },
];

static INGREDIENTS_BY_ID: LazyLock<HashMap<&'static str, &'static IngredientType>> =
    LazyLock::new(|| INGREDIENTS.iter().map(|i| (i.id, i)).collect());

/// All catalog ingredients in display order.
pub fn ingredients_list() -> &'static [IngredientType] {
    &INGREDIENTS
}

/// Look up a catalog ingredient by id.
pub fn ingredient(id: &str) -> Option<&'static IngredientType> {
    INGREDIENTS_BY_ID.get(id).copied()
}

/// Display name for an ingredient id, falling back to the id itself.
pub fn ingredient_name(id: &str) -> &str {
    ingredient(id).map(|i| i.name).unwrap_or(id)
}

pub fn is_reducible_protein(id: &str) -> bool {
    REDUCIBLE_PROTEINS.contains(&id)
}

pub fn is_discrete_unit(unit: &str) -> bool {
    DISCRETE_UNITS.contains(&unit)
}

/// Sort rank of a product category; unknown categories rank after all known ones.
pub fn category_rank(category: &str) -> usize {
    CATEGORY_ORDER
        .iter()
        .position(|c| *c == category)
        .unwrap_or(CATEGORY_ORDER.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        assert_eq!(ingredient("hot_sauce").map(|i| i.name), Some("Hot Sauce"));
        assert!(ingredient("lobster").is_none());
        assert_eq!(ingredient_name("lobster"), "lobster");
        assert_eq!(ingredients_list().len(), 11);
    }

    #[test]
    fn test_sausage_not_reducible() {
        assert!(!is_reducible_protein("sausage"));
        assert!(is_reducible_protein("crab"));
    }

    #[test]
    fn test_category_rank() {
        assert_eq!(category_rank("protein"), 0);
        assert_eq!(category_rank("sauce"), 3);
        assert_eq!(category_rank("equipment"), 4);
        assert_eq!(category_rank("mystery"), 4);
    }
}
