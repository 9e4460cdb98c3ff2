use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{CalculatorInput, PotSize, ShoppingListItem, SpiceLevel};
use crate::planner::round_currency;

/// A shopping list line as stored with a saved list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedListItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit: String,
    pub total_price: f64,
}

impl From<&ShoppingListItem> for SavedListItem {
    fn from(item: &ShoppingListItem) -> Self {
        Self {
            product_id: item.product.id.clone(),
            product_name: item.product.name.clone(),
            quantity: item.quantity,
            unit: item.product.unit.clone(),
            total_price: item.total_price,
        }
    }
}

/// Payload handed to the store when saving a list.
///
/// The store assigns the id and creation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSavedList {
    pub list_name: String,
    pub num_guests: u32,
    pub pot_size: PotSize,
    pub spice_level: SpiceLevel,
    pub selected_ingredients: Vec<String>,
    pub calculated_products: Vec<SavedListItem>,
}

impl NewSavedList {
    /// Snapshot the current input and its shopping list under a name.
    pub fn from_shopping_list(
        list_name: &str,
        input: &CalculatorInput,
        items: &[ShoppingListItem],
    ) -> Self {
        Self {
            list_name: list_name.to_string(),
            num_guests: input.num_guests,
            pot_size: input.pot_size,
            spice_level: input.spice_level,
            selected_ingredients: input.selected_ingredients.clone(),
            calculated_products: items.iter().map(SavedListItem::from).collect(),
        }
    }
}

/// A persisted list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedList {
    pub id: String,
    pub list_name: String,
    pub num_guests: u32,
    pub pot_size: PotSize,
    pub spice_level: SpiceLevel,
    pub selected_ingredients: Vec<String>,
    pub calculated_products: Vec<SavedListItem>,
    pub created_at: DateTime<Utc>,
}

impl SavedList {
    /// Attach store-assigned identity to a payload.
    pub fn from_payload(id: String, created_at: DateTime<Utc>, payload: NewSavedList) -> Self {
        Self {
            id,
            list_name: payload.list_name,
            num_guests: payload.num_guests,
            pot_size: payload.pot_size,
            spice_level: payload.spice_level,
            selected_ingredients: payload.selected_ingredients,
            calculated_products: payload.calculated_products,
            created_at,
        }
    }

    /// Sum of the stored line totals.
    pub fn total_price(&self) -> f64 {
        round_currency(self.calculated_products.iter().map(|p| p.total_price).sum())
    }
}
