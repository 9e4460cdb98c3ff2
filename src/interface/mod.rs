pub mod prompts;
pub mod render;

pub use prompts::{
    collect_calculator_input, prompt_guests, prompt_ingredients, prompt_list_name,
    prompt_pot_size, prompt_spice_level, prompt_yes_no, resolve_ingredient, resolve_ingredients,
};
pub use render::{
    display_calculated, display_ingredients, display_input, display_saved_lists,
    display_shopping_list,
};
