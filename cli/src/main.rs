//! CLI entrypoint for mealplan
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use mealplan_application::{
    GenerateMenuError, GenerateMenuInput, GenerateMenuUseCase, GetForecastInput,
    GetForecastUseCase, ManageMealsError, ManageMealsUseCase, MenuProgressNotifier, NoMenuProgress,
};
use mealplan_domain::{MealFilter, MealId, WeatherDay};
use mealplan_infrastructure::{ConfigLoader, FileConfig, JsonFileCatalog};
use mealplan_presentation::{
    Cli, Command, ForecastArgs, GenerateArgs, HealthReport, MealsCommand, OutputConfig,
    OutputFormatter, ProgressReporter, SimpleProgress, formatter_for,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Exit code for requests the caller can fix
const EXIT_CLIENT_ERROR: u8 = 2;
/// Exit code for catalog, config and other internal failures
const EXIT_SERVER_ERROR: u8 = 1;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            return ExitCode::from(EXIT_SERVER_ERROR);
        }
    };

    let _log_guard = init_logging(cli.verbose, config.logging.directory.as_deref());
    info!("Starting mealplan {}", env!("CARGO_PKG_VERSION"));

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(exit_code(&e))
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        let details: Vec<String> = issues.iter().map(|i| format!("  - {}", i)).collect();
        bail!("invalid configuration:\n{}", details.join("\n"));
    }

    Ok(config)
}

/// Initialize logging based on verbosity level.
///
/// Logs go to stderr, and also to a daily rolling file when a log directory
/// is configured. The returned guard flushes the file writer on drop.
fn init_logging(verbose: u8, directory: Option<&Path>) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "mealplan.log");
            let (file_writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::io::stderr.and(file_writer))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

/// Map an error to a process exit code
fn exit_code(error: &anyhow::Error) -> u8 {
    let client_error = if let Some(e) = error.downcast_ref::<GenerateMenuError>() {
        e.is_client_error()
    } else if let Some(e) = error.downcast_ref::<ManageMealsError>() {
        e.is_client_error()
    } else {
        false
    };

    if client_error {
        EXIT_CLIENT_ERROR
    } else {
        EXIT_SERVER_ERROR
    }
}

async fn run(cli: Cli, config: FileConfig) -> Result<()> {
    let output = OutputConfig::resolve(
        cli.output,
        config.output.format,
        config.output.color,
        cli.quiet,
    );
    if !output.color {
        colored::control::set_override(false);
    }
    let formatter = formatter_for(output.format);

    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| config.catalog.path.clone());
    debug!("Using catalog {}", catalog_path.display());

    let command = cli
        .command
        .unwrap_or_else(|| Command::Generate(GenerateArgs::default()));

    let rendered = match command {
        Command::Generate(args) => {
            let catalog = open_catalog(&catalog_path).await?;
            let progress = progress_for(&output, cli.verbose);
            generate(catalog, &config, args, progress.as_ref(), formatter.as_ref()).await?
        }
        Command::Meals { command } => {
            let catalog = open_catalog(&catalog_path).await?;
            manage_meals(catalog, command, formatter.as_ref()).await?
        }
        Command::Filters => {
            let catalog = open_catalog(&catalog_path).await?;
            let filters = ManageMealsUseCase::new(catalog).filter_options().await?;
            formatter.format_filters(&filters)
        }
        Command::Forecast(args) => {
            let days = forecast(&config, args).await?;
            formatter.format_forecast(&days)
        }
        Command::Health => {
            let catalog = open_catalog(&catalog_path).await?;
            let report = HealthReport::ok(catalog_path.display().to_string(), catalog.len().await);
            formatter.format_health(&report)
        }
    };

    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }

    Ok(())
}

async fn open_catalog(path: &Path) -> Result<Arc<JsonFileCatalog>> {
    let catalog = JsonFileCatalog::open(path)
        .await
        .with_context(|| format!("failed to open catalog {}", path.display()))?;
    Ok(Arc::new(catalog))
}

fn progress_for(output: &OutputConfig, verbose: u8) -> Box<dyn MenuProgressNotifier> {
    if !output.show_progress {
        Box::new(NoMenuProgress)
    } else if verbose == 0 && std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        // Spinners would interleave with log lines
        Box::new(SimpleProgress)
    }
}

async fn generate(
    catalog: Arc<JsonFileCatalog>,
    config: &FileConfig,
    args: GenerateArgs,
    progress: &dyn MenuProgressNotifier,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let use_case = GenerateMenuUseCase::new(catalog).with_config(config.menu.to_menu_config());
    let input = GenerateMenuInput::from_parts(args.quota_map(), args.days);

    let mut rng = match args.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let menu = use_case.execute_with(input, &mut rng, progress).await?;
    Ok(formatter.format_menu(&menu))
}

async fn manage_meals(
    catalog: Arc<JsonFileCatalog>,
    command: MealsCommand,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let use_case = ManageMealsUseCase::new(catalog);

    let rendered = match command {
        MealsCommand::List(args) => {
            let filter: MealFilter = args.into();
            let meals = if filter.is_unrestricted() {
                use_case.list().await?
            } else {
                use_case.filter(&filter).await?
            };
            formatter.format_meals(&meals)
        }
        MealsCommand::Show { id } => formatter.format_meal(&use_case.get(MealId::new(id)).await?),
        MealsCommand::Add(meal) => formatter.format_meal(&use_case.add(meal.into()).await?),
        MealsCommand::Update { id, meal } => {
            formatter.format_meal(&use_case.update(MealId::new(id), meal.into()).await?)
        }
        MealsCommand::Delete { id } => {
            if use_case.delete(MealId::new(id)).await? {
                format!("Deleted meal {}", id)
            } else {
                format!("Meal {} did not exist", id)
            }
        }
    };

    Ok(rendered)
}

async fn forecast(config: &FileConfig, args: ForecastArgs) -> Result<Vec<WeatherDay>> {
    let mut input = GetForecastInput::new();
    if let Some(days) = args.days {
        input = input.with_days(days);
    }
    if let Some(start) = args.start_date {
        input = input.with_start(start);
    }

    #[cfg(feature = "weather")]
    {
        let settings = mealplan_infrastructure::WeatherSettings::from(&config.weather);
        let provider = mealplan_infrastructure::OpenMeteoForecastProvider::new(settings)
            .context("failed to create forecast client")?;
        let use_case = GetForecastUseCase::new(Arc::new(provider))
            .with_timezone(&config.weather.timezone);
        Ok(use_case.execute(input).await)
    }

    #[cfg(not(feature = "weather"))]
    {
        tracing::warn!("Built without the `weather` feature, reporting placeholder days");
        let provider = mealplan_infrastructure::StubForecastProvider;
        let use_case = GetForecastUseCase::new(Arc::new(provider))
            .with_timezone(&config.weather.timezone);
        Ok(use_case.execute(input).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealplan_application::CatalogError;
    use mealplan_domain::DomainError;

    #[test]
    fn test_exit_code_for_rejected_request() {
        let err = anyhow::Error::new(GenerateMenuError::Rejected(DomainError::QuotaExceeded {
            total: 9,
            cap: 7,
        }));
        assert_eq!(exit_code(&err), EXIT_CLIENT_ERROR);
    }

    #[test]
    fn test_exit_code_for_catalog_failure() {
        let err = anyhow::Error::new(GenerateMenuError::Catalog(CatalogError::Unavailable(
            "disk".to_string(),
        )));
        assert_eq!(exit_code(&err), EXIT_SERVER_ERROR);
    }

    #[test]
    fn test_exit_code_for_missing_meal() {
        let err = anyhow::Error::new(ManageMealsError::NotFound(MealId::new(3)));
        assert_eq!(exit_code(&err), EXIT_CLIENT_ERROR);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), EXIT_SERVER_ERROR);
    }
}
