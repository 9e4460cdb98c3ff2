use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::models::{CalculatedIngredient, CalculatorInput, IngredientRatio};
use crate::planner::constants::*;

/// Round up to the next multiple of 0.1.
///
/// Values within `ROUNDING_EPSILON` tenths above a step stay on that step, so
/// float noise such as `0.33 * 10.0 == 3.3000000000000003` gives 3.3 where a
/// plain ceiling gives 3.4. Anything further above a step still rounds up:
/// 5.000001 gives 5.1.
pub fn round_up_tenth(value: f64) -> f64 {
    positive_zero((value * 10.0 - ROUNDING_EPSILON).ceil() / 10.0)
}

/// Round up to the next whole number.
pub fn round_up_whole(value: f64) -> f64 {
    positive_zero((value - ROUNDING_EPSILON).ceil())
}

// ceil of a tiny negative number is -0.0, which would print as "-0"
fn positive_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Round to cents.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a quantity with its unit.
///
/// Countable units show a whole number, everything else one decimal.
pub fn format_quantity(quantity: f64, unit: &str) -> String {
    if is_discrete_unit(unit) {
        format!("{} {}", round_up_whole(quantity), unit)
    } else {
        format!("{:.1} {}", quantity, unit)
    }
}

/// Whether several reducible proteins are selected together.
pub fn should_reduce_proteins(selected: &[String]) -> bool {
    let distinct: HashSet<&str> = selected
        .iter()
        .map(String::as_str)
        .filter(|id| is_reducible_protein(id))
        .collect();
    distinct.len() > 1
}

/// Raw (unrounded) total for one ingredient.
fn raw_quantity(
    ingredient: &str,
    ratio: &IngredientRatio,
    input: &CalculatorInput,
    reduce_proteins: bool,
) -> f64 {
    if ingredient == SEASONING_ID {
        return (input.pot_size.gallons() / REFERENCE_POT_GALLONS) * ratio.base_ratio_per_person;
    }

    let mut per_person = ratio.base_ratio_per_person;
    if reduce_proteins && is_reducible_protein(ingredient) {
        per_person *= 1.0 - ratio.reduction_factor;
    }

    per_person * input.num_guests as f64
}

/// Calculate quantities for every selected ingredient.
///
/// Output order follows the selection order. Ingredients without a ratio are
/// skipped, and a repeated id only counts once.
pub fn calculate_ingredients(
    input: &CalculatorInput,
    ratios: &HashMap<String, IngredientRatio>,
) -> Vec<CalculatedIngredient> {
    let reduce_proteins = should_reduce_proteins(&input.selected_ingredients);
    let mut seen = HashSet::new();
    let mut results = Vec::new();

    for ingredient in &input.selected_ingredients {
        if !seen.insert(ingredient.as_str()) {
            continue;
        }

        let Some(ratio) = ratios.get(ingredient) else {
            debug!(ingredient = %ingredient, "no ratio for ingredient, skipping");
            continue;
        };

        let quantity = round_up_tenth(raw_quantity(ingredient, ratio, input, reduce_proteins));

        results.push(CalculatedIngredient {
            ingredient: ingredient.clone(),
            quantity,
            unit: ratio.unit.clone(),
            display_text: format!(
                "{}: {}",
                ingredient_name(ingredient),
                format_quantity(quantity, &ratio.unit)
            ),
        });
    }

    results
}

/// Index a ratio list by ingredient id. Later records win on duplicates.
pub fn index_ratios(ratios: Vec<IngredientRatio>) -> HashMap<String, IngredientRatio> {
    ratios
        .into_iter()
        .map(|r| (r.ingredient_type.clone(), r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PotSize, SpiceLevel};

    fn ratios() -> HashMap<String, IngredientRatio> {
        index_ratios(vec![
            IngredientRatio::new("shrimp", 0.5, "lb").with_reduction(0.25),
            IngredientRatio::new("crab", 0.5, "lb").with_reduction(0.25),
            IngredientRatio::new("sausage", 0.25, "lb").with_reduction(0.5),
            IngredientRatio::new("corn", 1.0, "ears"),
            IngredientRatio::new("seasoning", 2.0, "lb"),
        ])
    }

    fn input(guests: u32, ids: &[&str]) -> CalculatorInput {
        CalculatorInput::new(guests, PotSize::Medium, SpiceLevel::Medium)
            .with_ingredients(ids.iter().copied())
    }

    #[test]
    fn test_round_up_tenth() {
        assert_eq!(round_up_tenth(3.75), 3.8);
        assert_eq!(round_up_tenth(5.0), 5.0);
        assert_eq!(round_up_tenth(0.01), 0.1);
        // 0.1 * 3 is 0.30000000000000004 in floating point
        assert_eq!(round_up_tenth(0.1 * 3.0), 0.3);
        assert!(round_up_tenth(0.0).is_sign_positive());
        assert_eq!(round_up_tenth(0.33 * 10.0), 3.3);
        assert_eq!(round_up_tenth(5.000_001), 5.1);
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(5.0, "lb"), "5.0 lb");
        assert_eq!(format_quantity(12.3, "ears"), "13 ears");
        assert_eq!(format_quantity(4.0, "each"), "4 each");
        assert_eq!(format_quantity(0.6, "cloves"), "1 cloves");
    }

    #[test]
    fn test_single_protein() {
        let result = calculate_ingredients(&input(10, &["shrimp"]), &ratios());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].quantity, 5.0);
        assert_eq!(result[0].unit, "lb");
        assert_eq!(result[0].display_text, "Shrimp: 5.0 lb");
    }

    #[test]
    fn test_multiple_proteins_reduced() {
        let result = calculate_ingredients(&input(10, &["shrimp", "crab"]), &ratios());
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].quantity, 3.8);
        assert_eq!(result[1].quantity, 3.8);
    }

    #[test]
    fn test_sausage_does_not_trigger_or_receive_reduction() {
        let result = calculate_ingredients(&input(10, &["shrimp", "sausage"]), &ratios());
        assert_eq!(result[0].quantity, 5.0);
        assert_eq!(result[1].quantity, 2.5);

        let result = calculate_ingredients(&input(10, &["shrimp", "crab", "sausage"]), &ratios());
        assert_eq!(result[2].ingredient, "sausage");
        assert_eq!(result[2].quantity, 2.5);
    }

    #[test]
    fn test_duplicates_counted_once() {
        let mut input = input(10, &["shrimp"]);
        input.selected_ingredients.push("shrimp".to_string());
        assert!(!should_reduce_proteins(&input.selected_ingredients));

        let result = calculate_ingredients(&input, &ratios());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].quantity, 5.0);
    }

    #[test]
    fn test_missing_ratio_skipped() {
        let result = calculate_ingredients(&input(10, &["lemons", "corn"]), &ratios());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].ingredient, "corn");
        assert_eq!(result[0].display_text, "Corn: 10 ears");
    }

    #[test]
    fn test_seasoning_uses_pot_size() {
        let mut input = input(10, &["seasoning"]);
        let medium = calculate_ingredients(&input, &ratios());
        assert_eq!(medium[0].quantity, 2.0);

        input.num_guests = 40;
        let more_guests = calculate_ingredients(&input, &ratios());
        assert_eq!(more_guests[0].quantity, 2.0);

        input.pot_size = PotSize::Large;
        let large = calculate_ingredients(&input, &ratios());
        assert_eq!(large[0].quantity, 2.8);
    }

    #[test]
    fn test_empty_selection() {
        let input = CalculatorInput::new(10, PotSize::Small, SpiceLevel::Hot);
        assert!(calculate_ingredients(&input, &ratios()).is_empty());
    }

    #[test]
    fn test_unknown_ingredient_display_falls_back_to_id() {
        let mut ratios = ratios();
        ratios.insert("beer".to_string(), IngredientRatio::new("beer", 1.0, "can"));
        let result = calculate_ingredients(&input(3, &["beer"]), &ratios);
        assert_eq!(result[0].display_text, "beer: 3.0 can");
    }
}
