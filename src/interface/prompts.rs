use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::{BoilError, Result};
use crate::models::{CalculatorInput, IngredientType, PotSize, SpiceLevel};
use crate::planner::constants::{ingredients_list, MAX_GUESTS, MIN_GUESTS};

/// Minimum Jaro-Winkler score for a fuzzy ingredient match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.85;

/// Resolve user text to a catalog ingredient.
///
/// Exact id or display name (case-insensitive) first, then the closest fuzzy
/// match above the threshold.
pub fn resolve_ingredient(text: &str) -> Option<&'static IngredientType> {
    let needle = text.trim().to_lowercase().replace([' ', '-'], "_");
    if needle.is_empty() {
        return None;
    }

    let catalog = ingredients_list();

    if let Some(exact) = catalog
        .iter()
        .find(|i| i.id == needle || i.name.to_lowercase().replace(' ', "_") == needle)
    {
        return Some(exact);
    }

    catalog
        .iter()
        .map(|i| (i, jaro_winkler(i.id, &needle)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
}

/// Resolve every entry to a catalog id, failing on the first unknown one.
pub fn resolve_ingredients(texts: &[String]) -> Result<Vec<String>> {
    texts
        .iter()
        .map(|t| {
            resolve_ingredient(t)
                .map(|i| i.id.to_string())
                .ok_or_else(|| BoilError::UnknownIngredient(t.clone()))
        })
        .collect()
}

/// Prompt for the number of guests.
pub fn prompt_guests(default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(format!("How many people ({}-{})?", MIN_GUESTS, MAX_GUESTS))
        .default(default.to_string())
        .interact_text()?;

    let guests: u32 = input
        .trim()
        .parse()
        .map_err(|_| BoilError::InvalidInput("Invalid number".to_string()))?;

    if !(MIN_GUESTS..=MAX_GUESTS).contains(&guests) {
        return Err(BoilError::InvalidInput(format!(
            "Guest count must be between {} and {}",
            MIN_GUESTS, MAX_GUESTS
        )));
    }

    Ok(guests)
}

/// Prompt for the pot size.
pub fn prompt_pot_size(default: PotSize) -> Result<PotSize> {
    let options: Vec<&str> = PotSize::ALL.iter().map(|p| p.label()).collect();
    let default_index = PotSize::ALL.iter().position(|p| *p == default).unwrap_or(1);

    let selection = Select::new()
        .with_prompt("Size of pot")
        .items(&options)
        .default(default_index)
        .interact()?;

    Ok(PotSize::ALL[selection])
}

/// Prompt for the spice level.
pub fn prompt_spice_level(default: SpiceLevel) -> Result<SpiceLevel> {
    let options: Vec<String> = SpiceLevel::ALL
        .iter()
        .map(|l| format!("{} {}", l.label(), "🔥".repeat(l.flames())))
        .collect();
    let default_index = SpiceLevel::ALL.iter().position(|l| *l == default).unwrap_or(1);

    let selection = Select::new()
        .with_prompt("Spice level")
        .items(&options)
        .default(default_index)
        .interact()?;

    Ok(SpiceLevel::ALL[selection])
}

/// Prompt for the ingredients to include, pre-checking the current selection.
pub fn prompt_ingredients(selected: &[String]) -> Result<Vec<String>> {
    let catalog = ingredients_list();
    let options: Vec<String> = catalog
        .iter()
        .map(|i| format!("{} {}", i.icon, i.name))
        .collect();
    let defaults: Vec<bool> = catalog
        .iter()
        .map(|i| selected.iter().any(|s| s == i.id))
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt("Ingredients (space to toggle, enter to confirm)")
        .items(&options)
        .defaults(&defaults)
        .interact()?;

    Ok(chosen.into_iter().map(|idx| catalog[idx].id.to_string()).collect())
}

/// Prompt for a non-empty list name.
pub fn prompt_list_name() -> Result<String> {
    let name: String = Input::new()
        .with_prompt("List name (e.g. Summer Crawfish Boil)")
        .interact_text()?;

    let name = name.trim();
    if name.is_empty() {
        return Err(BoilError::InvalidInput(
            "Please enter a name for this list".to_string(),
        ));
    }
    Ok(name.to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full calculator input, starting from `current`.
pub fn collect_calculator_input(current: &CalculatorInput) -> Result<CalculatorInput> {
    let num_guests = prompt_guests(current.num_guests)?;
    let pot_size = prompt_pot_size(current.pot_size)?;
    let spice_level = prompt_spice_level(current.spice_level)?;
    let selected = prompt_ingredients(&current.selected_ingredients)?;

    Ok(CalculatorInput::new(num_guests, pot_size, spice_level).with_ingredients(selected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact() {
        assert_eq!(resolve_ingredient("shrimp").map(|i| i.id), Some("shrimp"));
        assert_eq!(resolve_ingredient("Hot Sauce").map(|i| i.id), Some("hot_sauce"));
        assert_eq!(resolve_ingredient("  CRAB ").map(|i| i.id), Some("crab"));
    }

    #[test]
    fn test_resolve_fuzzy() {
        assert_eq!(resolve_ingredient("crawfsh").map(|i| i.id), Some("crawfish"));
        assert_eq!(resolve_ingredient("potatos").map(|i| i.id), Some("potatoes"));
    }

    #[test]
    fn test_resolve_unknown() {
        assert!(resolve_ingredient("lobster tail").is_none());
        assert!(resolve_ingredient("").is_none());
    }

    #[test]
    fn test_resolve_ingredients_reports_unknown() {
        let ok = resolve_ingredients(&["shrimp".to_string(), "corn".to_string()]).unwrap();
        assert_eq!(ok, vec!["shrimp", "corn"]);

        let err = resolve_ingredients(&["shrimp".to_string(), "xyz".to_string()]);
        assert!(matches!(err, Err(BoilError::UnknownIngredient(t)) if t == "xyz"));
    }
}
