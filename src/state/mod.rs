mod persistence;
mod session;
mod store;

pub use persistence::{load_products, load_ratios, load_saved_lists, save_saved_lists, FileStore};
pub use session::CalculatorSession;
pub use store::{load_in_stock_products, load_ratio_table, RecipeStore};
