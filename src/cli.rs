use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DataPaths;
use crate::models::{PotSize, SpiceLevel};

/// Boil Planner — scales a seafood boil to your guests and pot, then prices the shopping list.
#[derive(Parser, Debug)]
#[command(name = "boil-planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the ingredient ratios JSON file.
    #[arg(long, env = "BOIL_RATIOS", default_value = "ratios.json")]
    pub ratios: PathBuf,

    /// Path to the product catalog (JSON, or CSV by extension).
    #[arg(long, env = "BOIL_PRODUCTS", default_value = "products.json")]
    pub products: PathBuf,

    /// Path to the saved lists JSON file.
    #[arg(long, env = "BOIL_LISTS", default_value = "saved_lists.json")]
    pub lists: PathBuf,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn data_paths(&self) -> DataPaths {
        DataPaths {
            ratios: self.ratios.clone(),
            products: self.products.clone(),
            lists: self.lists.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk through guests, pot, spice and ingredients interactively.
    Interactive,

    /// Calculate quantities and a shopping list from flags.
    Calculate {
        /// Number of guests (1-50).
        #[arg(short, long, default_value_t = 10)]
        guests: u32,

        /// Pot size.
        #[arg(short, long, value_enum, default_value_t = PotSize::Medium)]
        pot: PotSize,

        /// Spice level.
        #[arg(short, long, value_enum, default_value_t = SpiceLevel::Medium)]
        spice: SpiceLevel,

        /// Ingredient id or name; repeat for several.
        #[arg(short, long = "ingredient", required = true)]
        ingredients: Vec<String>,

        /// Save the resulting list under this name.
        #[arg(long)]
        save: Option<String>,
    },

    /// List the known ingredients.
    Ingredients,

    /// Show saved lists, newest first.
    Lists,

    /// Delete a saved list.
    DeleteList {
        /// Id of the list to delete.
        id: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}
