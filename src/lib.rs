pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{BoilError, Result};
pub use models::{CalculatedIngredient, CalculatorInput, Product, ShoppingListItem};
