use std::collections::HashMap;

use tracing::warn;

use crate::error::Result;
use crate::models::{IngredientRatio, NewSavedList, Product, SavedList};
use crate::planner::index_ratios;

/// Record store holding ingredient ratios, products and saved lists.
///
/// Every call may fail; callers that feed the calculator should go through
/// [`load_ratio_table`] and [`load_in_stock_products`], which turn failures
/// into empty inputs.
pub trait RecipeStore {
    /// All ratio records.
    fn fetch_ingredient_ratios(&self) -> Result<Vec<IngredientRatio>>;

    /// Products with `in_stock == true`, in catalog order.
    fn fetch_in_stock_products(&self) -> Result<Vec<Product>>;

    /// Save a list. The store assigns its id and creation time.
    fn persist_saved_list(&mut self, payload: NewSavedList) -> Result<SavedList>;

    /// Saved lists, newest first.
    fn fetch_saved_lists(&self) -> Result<Vec<SavedList>>;

    fn delete_saved_list(&mut self, id: &str) -> Result<()>;
}

/// Fetch the ratio table keyed by ingredient id, or an empty table on failure.
pub fn load_ratio_table<S: RecipeStore + ?Sized>(store: &S) -> HashMap<String, IngredientRatio> {
    match store.fetch_ingredient_ratios() {
        Ok(ratios) => {
            for ratio in ratios.iter().filter(|r| !r.is_valid()) {
                warn!(ingredient = %ratio.ingredient_type, "ratio record out of range");
            }
            index_ratios(ratios)
        }
        Err(e) => {
            warn!(error = %e, "failed to fetch ingredient ratios");
            HashMap::new()
        }
    }
}

/// Fetch the in-stock product snapshot, or an empty one on failure.
pub fn load_in_stock_products<S: RecipeStore + ?Sized>(store: &S) -> Vec<Product> {
    match store.fetch_in_stock_products() {
        Ok(products) => products,
        Err(e) => {
            warn!(error = %e, "failed to fetch products");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoilError;

    struct OfflineStore;

    impl RecipeStore for OfflineStore {
        fn fetch_ingredient_ratios(&self) -> Result<Vec<IngredientRatio>> {
            Err(BoilError::InvalidInput("offline".to_string()))
        }

        fn fetch_in_stock_products(&self) -> Result<Vec<Product>> {
            Err(BoilError::InvalidInput("offline".to_string()))
        }

        fn persist_saved_list(&mut self, _payload: NewSavedList) -> Result<SavedList> {
            Err(BoilError::InvalidInput("offline".to_string()))
        }

        fn fetch_saved_lists(&self) -> Result<Vec<SavedList>> {
            Ok(Vec::new())
        }

        fn delete_saved_list(&mut self, id: &str) -> Result<()> {
            Err(BoilError::ListNotFound(id.to_string()))
        }
    }

    #[test]
    fn test_failed_fetch_degrades_to_empty() {
        let store = OfflineStore;
        assert!(load_ratio_table(&store).is_empty());
        assert!(load_in_stock_products(&store).is_empty());
    }
}
