pub mod calculations;
pub mod constants;
pub mod conversion;
pub mod shopping;

pub use calculations::{
    calculate_ingredients, format_quantity, index_ratios, round_currency, round_up_tenth,
    round_up_whole, should_reduce_proteins,
};
pub use constants::*;
pub use conversion::convert_units;
pub use shopping::{build_shopping_list, purchasable_quantity, select_product, shopping_list_total};
