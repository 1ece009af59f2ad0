//! CLI command definitions

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Table,
    /// JSON output
    Json,
}

impl From<OutputFormat> for mealplan_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => mealplan_domain::OutputFormat::Table,
            OutputFormat::Json => mealplan_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for mealplan
#[derive(Parser, Debug)]
#[command(name = "mealplan")]
#[command(author, version, about = "Weekly meal planner - build a menu from your meal catalog")]
#[command(long_about = r#"
mealplan builds a weekly menu from a catalog of meals.

A menu request can ask for a number of meals per protein category. Those are
picked first, the remaining days are filled with random meals, and the result
is shuffled. No meal appears twice, and a small catalog just gives a shorter
menu. Protein quotas may add up to at most 7.

Configuration files are loaded from (in priority order):
1. MEALPLAN_* environment variables
2. --config <path>     Explicit config file
3. ./mealplan.toml     Project-level config
4. ~/.config/mealplan/config.toml   Global config

Example:
  mealplan generate
  mealplan generate -p Chicken=2 -p Beef=1 --days 5
  mealplan meals add --name "Lemon Chicken" --protein Chicken --cook-time "30 min"
  mealplan meals list --protein Chicken --cuisine Thai
  mealplan forecast --days 3
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the meal catalog (JSON)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a menu
    Generate(GenerateArgs),

    /// Browse and edit the meal catalog
    Meals {
        #[command(subcommand)]
        command: MealsCommand,
    },

    /// List the protein categories quotas can use
    Filters,

    /// Show the daily weather forecast
    Forecast(ForecastArgs),

    /// Check that the catalog can be read
    Health,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Meals to include for a protein category (repeatable)
    #[arg(short = 'p', long = "quota", value_name = "CATEGORY=COUNT", value_parser = parse_quota)]
    pub quotas: Vec<(String, i64)>,

    /// Number of days (defaults to the configured menu length)
    #[arg(short, long, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Seed for a reproducible menu
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GenerateArgs {
    /// Quotas as an optional mapping; `None` when no `--quota` was given.
    pub fn quota_map(&self) -> Option<Vec<(String, i64)>> {
        if self.quotas.is_empty() {
            None
        } else {
            Some(self.quotas.clone())
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum MealsCommand {
    /// List meals, optionally filtered by exact field values
    List(ListArgs),

    /// Show one meal
    Show {
        id: u64,
    },

    /// Add a meal
    Add(MealArgs),

    /// Replace every field of a meal
    Update {
        id: u64,

        #[command(flatten)]
        meal: MealArgs,
    },

    /// Delete a meal
    Delete {
        id: u64,
    },
}

/// Exact-match filters for `meals list`; `all` matches anything
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    #[arg(long)]
    pub protein: Option<String>,

    #[arg(long)]
    pub cuisine: Option<String>,

    #[arg(long)]
    pub cook_time: Option<String>,

    #[arg(long)]
    pub cook_method: Option<String>,
}

impl From<ListArgs> for mealplan_domain::MealFilter {
    fn from(args: ListArgs) -> Self {
        mealplan_domain::MealFilter {
            protein: args.protein,
            cuisine: args.cuisine,
            cook_time: args.cook_time,
            cook_method: args.cook_method,
        }
    }
}

/// Fields of a catalog entry
#[derive(Args, Debug, Clone)]
pub struct MealArgs {
    #[arg(long)]
    pub name: String,

    /// Protein category, matched exactly by quotas
    #[arg(long)]
    pub protein: String,

    #[arg(long, default_value = "")]
    pub cuisine: String,

    #[arg(long, default_value = "")]
    pub cook_time: String,

    #[arg(long, default_value = "")]
    pub cook_method: String,

    #[arg(long, default_value = "")]
    pub source: String,
}

impl From<MealArgs> for mealplan_domain::NewMeal {
    fn from(args: MealArgs) -> Self {
        mealplan_domain::NewMeal::new(args.name, args.protein)
            .with_cuisine(args.cuisine)
            .with_cook_time(args.cook_time)
            .with_cook_method(args.cook_method)
            .with_source(args.source)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ForecastArgs {
    /// Number of days (clamped to 1..=14)
    #[arg(short, long, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// First forecast day (YYYY-MM-DD); defaults to today
    #[arg(long, value_name = "DATE")]
    pub start_date: Option<NaiveDate>,
}

/// Parse `CATEGORY=COUNT`.
///
/// The category is kept verbatim apart from the separator, since quotas
/// match catalog labels exactly. The count may be zero or negative; such
/// quotas are ignored by generation.
pub fn parse_quota(s: &str) -> Result<(String, i64), String> {
    let (category, count) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected CATEGORY=COUNT, got '{}'", s))?;
    if category.is_empty() {
        return Err(format!("missing category in '{}'", s));
    }
    let count = count
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid count in '{}': {}", s, e))?;
    Ok((category.to_string(), count))
}
