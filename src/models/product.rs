use serde::{Deserialize, Deserializer, Serialize};

/// A purchasable catalog product.
///
/// `category` and `sub_category` are matched against ingredient ids when
/// building a shopping list, so a product with sub-category `shrimp` covers
/// the `shrimp` ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub brand: String,

    pub category: String,

    #[serde(default)]
    pub sub_category: Option<String>,

    pub price: f64,

    pub unit: String,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default = "default_in_stock", deserialize_with = "in_stock_or_default")]
    pub in_stock: bool,

    #[serde(default, deserialize_with = "featured_or_default")]
    pub featured: bool,
}

fn default_in_stock() -> bool {
    true
}

// A blank CSV cell or a JSON null reads as the default.
fn in_stock_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_in_stock))
}

fn featured_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    /// Whether this product can stand in for the given ingredient id.
    pub fn covers(&self, ingredient: &str) -> bool {
        self.sub_category.as_deref() == Some(ingredient) || self.category == ingredient
    }

    /// Basic validation: named, priced and sold in some unit.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.unit.trim().is_empty() && self.price >= 0.0
    }
}

/// One shopping list line: a product and how many of its units to buy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingListItem {
    /// Ingredient id this line covers.
    pub ingredient: String,

    pub product: Product,

    /// Whole units of `product.unit` to buy.
    pub quantity: u32,

    pub total_price: f64,
}
