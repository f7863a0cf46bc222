use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::Colorize;
use rpl_sdk::{Ingredient, Recipe, Session, SessionConfig};
use rpl_types::{parse_expiry, parse_recipe_ingredients};
use serde::Serialize;

use crate::cli::*;
use crate::shell::split_words;

const PROMPT: &str = "reciplanner> ";

/// Whether the shell keeps reading after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SessionConfig::default(),
    };
    let session = Session::new(config);
    session.ingredients().subscribe(|ctx| {
        tracing::debug!(entries = ctx.access(|store| store.len()), "pantry changed");
    });
    session.recipes().subscribe(|ctx| {
        tracing::debug!(entries = ctx.access(|store| store.len()), "recipe book changed");
    });

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut out = io::stdout().lock();

    if interactive {
        writeln!(out, "{} Type {} for commands.", "Reciplanner".bold(), "help".cyan())?;
    }
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else { break };
        if run_line(&session, &line?, cli.format, &mut out)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// Parse and execute one shell line. Usage errors are printed, not returned.
pub fn run_line(
    session: &Session,
    line: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<Flow> {
    let words = match split_words(line) {
        Ok(words) => words,
        Err(e) => {
            writeln!(out, "{} {e}", "error:".red().bold())?;
            return Ok(Flow::Continue);
        }
    };
    if words.is_empty() {
        return Ok(Flow::Continue);
    }

    let parsed = match ShellLine::try_parse_from(&words) {
        Ok(parsed) => parsed,
        Err(e) => {
            // Help requests arrive as errors too; both are just printed.
            write!(out, "{}", e.render())?;
            return Ok(Flow::Continue);
        }
    };

    match execute(session, parsed.command, format, out) {
        Ok(flow) => Ok(flow),
        Err(e) => {
            writeln!(out, "{} {e:#}", "error:".red().bold())?;
            Ok(Flow::Continue)
        }
    }
}

pub fn execute(
    session: &Session,
    command: ShellCommand,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<Flow> {
    match command {
        ShellCommand::Ingredient(cmd) => cmd_ingredient(session, cmd, format, out)?,
        ShellCommand::Recipe(cmd) => cmd_recipe(session, cmd, format, out)?,
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn cmd_ingredient(
    session: &Session,
    cmd: IngredientCommand,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match cmd {
        IngredientCommand::List => {
            let all = session.list_ingredients();
            if format == OutputFormat::Json {
                return print_json(out, &all);
            }
            if all.is_empty() {
                writeln!(out, "Pantry is empty.")?;
            }
            let today = Local::now().date_naive();
            for ingredient in &all {
                print_ingredient(out, ingredient, today)?;
            }
        }
        IngredientCommand::Show(args) => match session.ingredient(&args.name) {
            Some(ingredient) if format == OutputFormat::Json => print_json(out, &ingredient)?,
            Some(ingredient) => print_ingredient(out, &ingredient, Local::now().date_naive())?,
            None => writeln!(out, "No ingredient named {}.", args.name.yellow())?,
        },
        IngredientCommand::Add(args) => {
            let mut ingredient = Ingredient::new(&args.name).with_count(args.count);
            ingredient.expires = parse_expiry(args.expires.as_deref().unwrap_or(""))?;
            if session.add_ingredient(ingredient)?.is_added() {
                writeln!(out, "{} Added {}.", "✓".green(), args.name.yellow())?;
            } else {
                writeln!(
                    out,
                    "{} There's already an ingredient with that name",
                    "warning:".yellow().bold()
                )?;
            }
        }
        IngredientCommand::Edit(args) => {
            let Some(current) = session.ingredient(&args.name) else {
                writeln!(out, "No ingredient named {}.", args.name.yellow())?;
                return Ok(());
            };
            let count = args.count.unwrap_or(current.count);
            let expires = match args.expires.as_deref() {
                Some(text) => parse_expiry(text)?,
                None => current.expires,
            };
            session.edit_ingredient(&args.name, count, expires)?;
            writeln!(out, "{} Saved {}.", "✓".green(), args.name.yellow())?;
        }
        IngredientCommand::Rm(args) => {
            if session.remove_ingredient(&args.name)? {
                writeln!(out, "{} Removed {}.", "✓".green(), args.name.yellow())?;
            } else {
                writeln!(out, "No ingredient named {}.", args.name.yellow())?;
            }
        }
    }
    Ok(())
}

fn cmd_recipe(
    session: &Session,
    cmd: RecipeCommand,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match cmd {
        RecipeCommand::List => {
            let all = session.list_recipes();
            if format == OutputFormat::Json {
                return print_json(out, &all);
            }
            if all.is_empty() {
                writeln!(out, "No recipes yet.")?;
            }
            for recipe in &all {
                writeln!(
                    out,
                    "{}  {}",
                    recipe.name().bold(),
                    format!("Ingredients: {}", recipe.ingredients.len()).dimmed()
                )?;
            }
        }
        RecipeCommand::Show(args) => match session.recipe(&args.name) {
            Some(recipe) if format == OutputFormat::Json => print_json(out, &recipe)?,
            Some(recipe) => print_recipe(out, &recipe)?,
            None => writeln!(out, "No recipe named {}.", args.name.yellow())?,
        },
        RecipeCommand::Add(args) => {
            let ingredients = parse_recipe_ingredients(&args.ingredients)?;
            let recipe = Recipe::with_ingredients(&args.name, ingredients);
            if session.add_recipe(recipe)?.is_added() {
                writeln!(out, "{} Added {}.", "✓".green(), args.name.yellow())?;
            } else {
                writeln!(
                    out,
                    "{} There's already a recipe with that name",
                    "warning:".yellow().bold()
                )?;
            }
        }
        RecipeCommand::Edit(args) => {
            let ingredients = parse_recipe_ingredients(&args.ingredients)?;
            session.edit_recipe(&args.name, ingredients)?;
            writeln!(out, "{} Saved {}.", "✓".green(), args.name.yellow())?;
        }
        RecipeCommand::Rm(args) => {
            if session.remove_recipe(&args.name)? {
                writeln!(out, "{} Removed {}.", "✓".green(), args.name.yellow())?;
            } else {
                writeln!(out, "No recipe named {}.", args.name.yellow())?;
            }
        }
        RecipeCommand::Missing(args) => {
            let missing = session.missing_ingredients(&args.name)?;
            if format == OutputFormat::Json {
                return print_json(out, &missing);
            }
            if missing.is_empty() {
                writeln!(out, "{} Pantry has every ingredient.", "✓".green())?;
            }
            for line in &missing {
                writeln!(out, "  {} x{}", line.ingredient.red(), line.count)?;
            }
        }
    }
    Ok(())
}

fn print_ingredient(
    out: &mut impl Write,
    ingredient: &Ingredient,
    today: NaiveDate,
) -> anyhow::Result<()> {
    let expires = match ingredient.expires {
        Some(date) => date.to_string(),
        None => "N/A".to_string(),
    };
    write!(
        out,
        "{}  {}  {}",
        ingredient.name().bold(),
        format!("Count: {}", ingredient.count).dimmed(),
        format!("Expires: {expires}").dimmed()
    )?;
    if ingredient.is_expired(today) {
        write!(out, "  {}", "expired".red().bold())?;
    }
    writeln!(out)?;
    Ok(())
}

fn print_recipe(out: &mut impl Write, recipe: &Recipe) -> anyhow::Result<()> {
    writeln!(out, "{}", recipe.name().bold())?;
    for line in &recipe.ingredients {
        writeln!(out, "  {} x{}", line.ingredient, line.count)?;
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
