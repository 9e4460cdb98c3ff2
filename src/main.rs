use clap::Parser;
use tracing::info;

use boil_planner_rs::cli::{Cli, Command};
use boil_planner_rs::config::DataPaths;
use boil_planner_rs::error::{BoilError, Result};
use boil_planner_rs::interface::{
    collect_calculator_input, display_calculated, display_ingredients, display_input,
    display_saved_lists, display_shopping_list, prompt_list_name, prompt_yes_no,
    resolve_ingredients,
};
use boil_planner_rs::logging::init_logging;
use boil_planner_rs::models::{CalculatorInput, PotSize, SpiceLevel};
use boil_planner_rs::state::{CalculatorSession, FileStore, RecipeStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let paths = cli.data_paths();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Interactive => cmd_interactive(&paths),
        Command::Calculate {
            guests,
            pot,
            spice,
            ingredients,
            save,
        } => cmd_calculate(&paths, guests, pot, spice, &ingredients, save.as_deref()),
        Command::Ingredients => {
            display_ingredients();
            Ok(())
        }
        Command::Lists => cmd_lists(&paths),
        Command::DeleteList { id } => cmd_delete_list(&paths, &id),
    }
}

/// Warn about reference files that are not there. Calculation still runs,
/// it just comes out empty for whatever is missing.
fn warn_missing_inputs(paths: &DataPaths) {
    for path in paths.missing_inputs() {
        eprintln!("Data file not found: {}", path.display());
    }
}

/// Calculate from command-line flags.
fn cmd_calculate(
    paths: &DataPaths,
    guests: u32,
    pot: PotSize,
    spice: SpiceLevel,
    ingredients: &[String],
    save: Option<&str>,
) -> Result<()> {
    let selected = resolve_ingredients(ingredients)?;
    let input = CalculatorInput::new(guests, pot, spice).with_ingredients(selected);
    input.validate()?;

    warn_missing_inputs(paths);
    let mut store = FileStore::from(paths);
    let session = CalculatorSession::from_store(input, &store);

    display_input(session.input());
    display_calculated(session.calculated());
    display_shopping_list(session.shopping_list());

    if let Some(name) = save {
        let name = name.trim();
        if name.is_empty() {
            return Err(BoilError::InvalidInput(
                "Please enter a name for this list".to_string(),
            ));
        }
        let saved = store.persist_saved_list(session.saved_list_payload(name))?;
        println!("Saved '{}' ({}).", saved.list_name, saved.id);
    }

    Ok(())
}

/// Prompt for every input, show the result, offer to save.
fn cmd_interactive(paths: &DataPaths) -> Result<()> {
    warn_missing_inputs(paths);
    let mut store = FileStore::from(paths);
    let mut session = CalculatorSession::from_store(CalculatorInput::default(), &store);

    loop {
        let input = collect_calculator_input(session.input())?;
        session.set_input(input);
        info!(guests = session.input().num_guests, "calculated boil");

        display_input(session.input());
        display_calculated(session.calculated());
        display_shopping_list(session.shopping_list());

        if !session.shopping_list().is_empty() && prompt_yes_no("Save this list?", false)? {
            let name = prompt_list_name()?;
            let saved = store.persist_saved_list(session.saved_list_payload(&name))?;
            println!("List saved successfully ({}).", saved.id);
        }

        if !prompt_yes_no("Adjust and recalculate?", false)? {
            break;
        }
        session.reload(&store);
    }

    Ok(())
}

/// Show saved lists.
fn cmd_lists(paths: &DataPaths) -> Result<()> {
    let store = FileStore::from(paths);
    let lists = store.fetch_saved_lists()?;
    display_saved_lists(&lists);
    Ok(())
}

/// Delete a saved list after confirmation.
fn cmd_delete_list(paths: &DataPaths, id: &str) -> Result<()> {
    let mut store = FileStore::from(paths);
    if !prompt_yes_no("Are you sure you want to delete this list?", false)? {
        return Ok(());
    }
    store.delete_saved_list(id)?;
    println!("Deleted list {}.", id);
    Ok(())
}
