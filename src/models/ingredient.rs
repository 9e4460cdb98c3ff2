use serde::{Deserialize, Serialize};

/// Category tag of a catalog ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Protein,
    Vegetable,
    Seasoning,
}

/// A known ingredient from the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngredientType {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub category: IngredientCategory,
}

/// Per-person consumption rate for one ingredient.
///
/// `ingredient_type` is the ingredient id the ratio applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRatio {
    #[serde(default)]
    pub id: String,

    pub ingredient_type: String,

    pub base_ratio_per_person: f64,

    pub unit: String,

    #[serde(default)]
    pub reduction_factor: f64,

    #[serde(default)]
    pub notes: String,
}

impl IngredientRatio {
    pub fn new(ingredient_type: &str, base_ratio_per_person: f64, unit: &str) -> Self {
        Self {
            id: String::new(),
            ingredient_type: ingredient_type.to_string(),
            base_ratio_per_person,
            unit: unit.to_string(),
            reduction_factor: 0.0,
            notes: String::new(),
        }
    }

    pub fn with_reduction(mut self, reduction_factor: f64) -> Self {
        self.reduction_factor = reduction_factor;
        self
    }

    /// Non-negative base ratio and a reduction factor within [0, 1].
    pub fn is_valid(&self) -> bool {
        self.base_ratio_per_person >= 0.0 && (0.0..=1.0).contains(&self.reduction_factor)
    }
}

/// A computed quantity for one selected ingredient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatedIngredient {
    pub ingredient: String,
    pub quantity: f64,
    pub unit: String,
    pub display_text: String,
}
