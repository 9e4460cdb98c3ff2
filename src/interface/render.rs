use crate::models::{CalculatedIngredient, CalculatorInput, SavedList, ShoppingListItem};
use crate::planner::constants::ingredients_list;
use crate::planner::shopping_list_total;

/// Display the input summary.
pub fn display_input(input: &CalculatorInput) {
    println!();
    println!(
        "Guests: {} | Pot: {} | Spice: {}",
        input.num_guests,
        input.pot_size.label(),
        input.spice_level.label()
    );
}

/// Display calculated ingredient quantities.
pub fn display_calculated(calculated: &[CalculatedIngredient]) {
    if calculated.is_empty() {
        println!("No ingredients calculated (nothing selected or no ratios loaded).");
        return;
    }

    println!();
    println!("=== Ingredients ===");
    println!();
    for item in calculated {
        println!("  {}", item.display_text);
    }
}

/// Display a shopping list with its estimated total.
pub fn display_shopping_list(items: &[ShoppingListItem]) {
    if items.is_empty() {
        println!();
        println!("No items in your shopping list.");
        return;
    }

    println!();
    println!("=== Shopping List ===");
    println!();

    let max_name_len = items.iter().map(|i| i.product.name.len()).max().unwrap_or(10);

    for (i, item) in items.iter().enumerate() {
        let brand = if item.product.brand.is_empty() {
            String::new()
        } else {
            format!(" [{}]", item.product.brand)
        };

        println!(
            "{:>3}. {:<width$} {:>4} {:<6} ${:>8.2}{}",
            i + 1,
            item.product.name,
            item.quantity,
            item.product.unit,
            item.total_price,
            brand,
            width = max_name_len
        );
    }

    println!();
    println!("Estimated total: ${:.2}", shopping_list_total(items));
    println!();
}

/// Display saved lists.
pub fn display_saved_lists(lists: &[SavedList]) {
    if lists.is_empty() {
        println!("No saved lists yet.");
        return;
    }

    println!();
    println!("=== Saved Lists ({}) ===", lists.len());

    for list in lists {
        println!();
        println!("{}  ({})", list.list_name, list.id);
        println!(
            "  {} | {} guests | {} pot | {} spice | {} items | ${:.2}",
            list.created_at.format("%b %-d, %Y"),
            list.num_guests,
            list.pot_size.label(),
            list.spice_level.label(),
            list.calculated_products.len(),
            list.total_price()
        );
        for product in &list.calculated_products {
            println!(
                "    - {} x{} {} (${:.2})",
                product.product_name, product.quantity, product.unit, product.total_price
            );
        }
    }

    println!();
}

/// Display the ingredient catalog.
pub fn display_ingredients() {
    println!();
    println!("=== Ingredients ===");
    println!();
    for ingredient in ingredients_list() {
        println!(
            "  {} {:<10} {:<12} {:?}",
            ingredient.icon, ingredient.id, ingredient.name, ingredient.category
        );
    }
    println!();
}
