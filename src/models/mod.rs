pub mod ingredient;
pub mod input;
pub mod product;
pub mod saved_list;

pub use ingredient::{CalculatedIngredient, IngredientCategory, IngredientRatio, IngredientType};
pub use input::{CalculatorInput, PotSize, SpiceLevel};
pub use product::{Product, ShoppingListItem};
pub use saved_list::{NewSavedList, SavedList, SavedListItem};
