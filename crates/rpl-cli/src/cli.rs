use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rpl_types::parse_count;

#[derive(Parser)]
#[command(
    name = "reciplanner",
    about = "Reciplanner: pantry and recipe planner",
    version,
)]
pub struct Cli {
    /// TOML file with the seed pantry and recipes
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One line typed at the shell prompt.
#[derive(Parser, Debug)]
#[command(name = "reciplanner", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Manage pantry ingredients
    #[command(subcommand, visible_alias = "i")]
    Ingredient(IngredientCommand),
    /// Manage recipes
    #[command(subcommand, visible_alias = "r")]
    Recipe(RecipeCommand),
    /// Leave the shell
    #[command(visible_alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug)]
pub enum IngredientCommand {
    /// List the pantry
    #[command(visible_alias = "ls")]
    List,
    /// Show one ingredient
    Show(NameArgs),
    /// Add an ingredient
    Add(IngredientAddArgs),
    /// Change count and expiry of an ingredient
    Edit(IngredientEditArgs),
    /// Remove an ingredient
    Rm(NameArgs),
}

#[derive(Subcommand, Debug)]
pub enum RecipeCommand {
    /// List all recipes
    #[command(visible_alias = "ls")]
    List,
    /// Show one recipe
    Show(NameArgs),
    /// Add a recipe
    Add(RecipeArgs),
    /// Replace the ingredient list of a recipe
    Edit(RecipeArgs),
    /// Remove a recipe
    Rm(NameArgs),
    /// List recipe ingredients that are not in the pantry
    Missing(NameArgs),
}

#[derive(Args, Debug)]
pub struct NameArgs {
    pub name: String,
}

#[derive(Args, Debug)]
pub struct IngredientAddArgs {
    pub name: String,
    /// Count, in units
    #[arg(short, long, default_value = "0", value_parser = count_arg)]
    pub count: u32,
    /// Expiry date (YYYY-MM-DD), N/A if none
    #[arg(short, long)]
    pub expires: Option<String>,
}

#[derive(Args, Debug)]
pub struct IngredientEditArgs {
    pub name: String,
    /// New count; unchanged if omitted
    #[arg(short, long, value_parser = count_arg)]
    pub count: Option<u32>,
    /// New expiry date (YYYY-MM-DD or N/A); unchanged if omitted
    #[arg(short, long)]
    pub expires: Option<String>,
}

#[derive(Args, Debug)]
pub struct RecipeArgs {
    pub name: String,
    /// Comma-separated `name:count` lines, e.g. "Tomato:2, Potato:1"
    #[arg(short, long, default_value = "")]
    pub ingredients: String,
}

fn count_arg(s: &str) -> Result<u32, String> {
    parse_count(s).map_err(|e| e.to_string())
}
