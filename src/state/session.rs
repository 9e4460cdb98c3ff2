use std::collections::HashMap;

use tracing::debug;

use crate::models::{
    CalculatedIngredient, CalculatorInput, IngredientRatio, NewSavedList, PotSize, Product,
    ShoppingListItem, SpiceLevel,
};
use crate::planner::{
    build_shopping_list, calculate_ingredients, shopping_list_total, MAX_GUESTS, MIN_GUESTS,
};
use crate::state::store::{load_in_stock_products, load_ratio_table, RecipeStore};

/// Holds the current calculator input with its derived ingredients and
/// shopping list. Every change recomputes both from scratch.
pub struct CalculatorSession {
    input: CalculatorInput,
    ratios: HashMap<String, IngredientRatio>,
    products: Vec<Product>,
    calculated: Vec<CalculatedIngredient>,
    shopping_list: Vec<ShoppingListItem>,
}

impl CalculatorSession {
    /// Create a session from already loaded reference data.
    pub fn new(
        input: CalculatorInput,
        ratios: HashMap<String, IngredientRatio>,
        products: Vec<Product>,
    ) -> Self {
        let mut session = Self {
            input,
            ratios,
            products,
            calculated: Vec::new(),
            shopping_list: Vec::new(),
        };
        session.recalculate();
        session
    }

    /// Create a session with ratios and products fetched from a store.
    pub fn from_store<S: RecipeStore + ?Sized>(input: CalculatorInput, store: &S) -> Self {
        Self::new(input, load_ratio_table(store), load_in_stock_products(store))
    }

    /// Re-fetch reference data and recompute.
    pub fn reload<S: RecipeStore + ?Sized>(&mut self, store: &S) {
        self.ratios = load_ratio_table(store);
        self.products = load_in_stock_products(store);
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.calculated = calculate_ingredients(&self.input, &self.ratios);
        self.shopping_list = build_shopping_list(&self.calculated, &self.products);
        debug!(
            ingredients = self.calculated.len(),
            items = self.shopping_list.len(),
            "recalculated"
        );
    }

    pub fn input(&self) -> &CalculatorInput {
        &self.input
    }

    pub fn calculated(&self) -> &[CalculatedIngredient] {
        &self.calculated
    }

    pub fn shopping_list(&self) -> &[ShoppingListItem] {
        &self.shopping_list
    }

    pub fn total(&self) -> f64 {
        shopping_list_total(&self.shopping_list)
    }

    /// Replace the whole input.
    pub fn set_input(&mut self, input: CalculatorInput) {
        self.input = input;
        self.recalculate();
    }

    pub fn toggle_ingredient(&mut self, id: &str) {
        self.input.toggle(id);
        self.recalculate();
    }

    /// Add a guest, up to the maximum. Returns whether the count changed.
    pub fn increment_guests(&mut self) -> bool {
        if self.input.num_guests >= MAX_GUESTS {
            return false;
        }
        self.input.num_guests += 1;
        self.recalculate();
        true
    }

    /// Remove a guest, down to the minimum. Returns whether the count changed.
    pub fn decrement_guests(&mut self) -> bool {
        if self.input.num_guests <= MIN_GUESTS {
            return false;
        }
        self.input.num_guests -= 1;
        self.recalculate();
        true
    }

    pub fn set_pot_size(&mut self, pot_size: PotSize) {
        self.input.pot_size = pot_size;
        self.recalculate();
    }

    pub fn set_spice_level(&mut self, spice_level: SpiceLevel) {
        self.input.spice_level = spice_level;
        self.recalculate();
    }

    /// Payload for saving the current shopping list under `name`.
    pub fn saved_list_payload(&self, name: &str) -> NewSavedList {
        NewSavedList::from_shopping_list(name, &self.input, &self.shopping_list)
    }
}
