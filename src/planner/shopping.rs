use tracing::debug;

use crate::models::{CalculatedIngredient, Product, ShoppingListItem};
use crate::planner::calculations::{round_currency, round_up_whole};
use crate::planner::constants::category_rank;
use crate::planner::conversion::convert_units;

/// Pick the product to buy for an ingredient.
///
/// The first featured candidate wins; otherwise the first candidate in
/// catalog order.
pub fn select_product<'a>(ingredient: &str, products: &'a [Product]) -> Option<&'a Product> {
    let mut candidates = products.iter().filter(|p| p.covers(ingredient));
    let first = candidates.next()?;
    if first.featured {
        return Some(first);
    }
    candidates.find(|p| p.featured).or(Some(first))
}

/// Whole units of `product` needed to cover a calculated ingredient.
pub fn purchasable_quantity(calculated: &CalculatedIngredient, product: &Product) -> u32 {
    let quantity = if product.unit != calculated.unit {
        convert_units(
            calculated.quantity,
            &calculated.unit,
            &product.unit,
            &calculated.ingredient,
        )
    } else {
        calculated.quantity
    };

    round_up_whole(quantity).max(0.0) as u32
}

/// Build a shopping list from calculated ingredients and an in-stock catalog snapshot.
///
/// Ingredients with no matching product are left out. The result is ordered
/// protein, vegetable, seasoning, sauce, then any other category, keeping
/// input order within a category.
pub fn build_shopping_list(
    calculated: &[CalculatedIngredient],
    products: &[Product],
) -> Vec<ShoppingListItem> {
    let mut list: Vec<ShoppingListItem> = calculated
        .iter()
        .filter_map(|c| {
            let Some(product) = select_product(&c.ingredient, products) else {
                debug!(ingredient = %c.ingredient, "no in-stock product, skipping");
                return None;
            };

            let quantity = purchasable_quantity(c, product);
            Some(ShoppingListItem {
                ingredient: c.ingredient.clone(),
                product: product.clone(),
                quantity,
                total_price: round_currency(quantity as f64 * product.price),
            })
        })
        .collect();

    // sort_by_key is stable
    list.sort_by_key(|item| category_rank(&item.product.category));
    list
}

/// Estimated total of a shopping list, in cents precision.
pub fn shopping_list_total(items: &[ShoppingListItem]) -> f64 {
    round_currency(items.iter().map(|i| i.total_price).sum())
}
