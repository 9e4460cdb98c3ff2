use tracing::debug;

/// How a conversion rule maps the source quantity.
#[derive(Debug, Clone, Copy)]
enum Factor {
    Multiply(f64),
    Divide(f64),
}

/// Ingredient-specific conversion from a recipe unit to a product unit.
struct ConversionRule {
    ingredient: &'static str,
    from: &'static str,
    to: &'static str,
    factor: Factor,
}

const CONVERSION_RULES: [ConversionRule; 4] = [
    // 8 potatoes to a bag
    ConversionRule { ingredient: "potatoes", from: "each", to: "bag", factor: Factor::Divide(8.0) },
    // half a pound per onion
    ConversionRule { ingredient: "onions", from: "each", to: "lb", factor: Factor::Multiply(0.5) },
    // 10 cloves to a bulb
    ConversionRule { ingredient: "garlic", from: "cloves", to: "bulb", factor: Factor::Divide(10.0) },
    // 12 oz bottles
    ConversionRule { ingredient: "hot_sauce", from: "oz", to: "bottle", factor: Factor::Divide(12.0) },
];

/// Convert a quantity between units for a given ingredient.
///
/// Same units are returned unchanged. Pairs without a rule are treated as
/// compatible and also returned unchanged; this never fails.
pub fn convert_units(quantity: f64, from_unit: &str, to_unit: &str, ingredient: &str) -> f64 {
    if from_unit == to_unit {
        return quantity;
    }

    let rule = CONVERSION_RULES
        .iter()
        .find(|r| r.ingredient == ingredient && r.from == from_unit && r.to == to_unit);

    match rule {
        Some(rule) => match rule.factor {
            Factor::Multiply(f) => quantity * f,
            Factor::Divide(d) => quantity / d,
        },
        None => {
            debug!(ingredient, from_unit, to_unit, "no conversion rule, using quantity as-is");
            quantity
        }
    }
}
