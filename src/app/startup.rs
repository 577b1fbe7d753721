//! Application startup: arguments, configuration, logging, then the replay

use crate::app::cli::args::{Args, OutputFormat};
use crate::app::error::{AppError, AppResult};
use crate::app::runner::ScenarioRunner;
use crate::app::scenario::Scenario;
use crate::core::error_handling::{log_error_with_context, user_facing_message};
use crate::core::logging::init_logging;
use crate::core::validation::validate_size;
use crate::queue::DEFAULT_HISTORY_SIZE;
use clap::Parser;

/// Run the application, returning the process exit code
pub fn startup() -> i32 {
    let args = Args::parse();
    match run(args) {
        Ok(()) => 0,
        Err(error) => {
            log_error_with_context(&error, "Scenario replay");
            eprintln!("Error: {}", user_facing_message(&error, "Scenario replay"));
            1
        }
    }
}

/// Everything after argument parsing, split out so it can be driven directly
pub fn run(mut args: Args) -> AppResult<()> {
    let config_path = args.load_config()?;

    let use_color = args.use_color();
    colored::control::set_override(use_color);

    init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        args.log_file_path(),
        use_color,
    )
    .map_err(|e| AppError::Logging {
        message: e.to_string(),
    })?;

    log::debug!("{}", crate::core::version::long_version());
    if let Some(path) = &config_path {
        log::info!("Using configuration file {}", path.display());
    }

    let scenario = Scenario::load(&args.scenario)?;
    let history_size = resolve_history_size(&args, &scenario)?;
    log::debug!("History size {}", history_size);

    let report = ScenarioRunner::new(history_size).run(&scenario)?;

    match args.output_format() {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

/// Command line, then scenario, then configuration file, then the default
pub fn resolve_history_size(args: &Args, scenario: &Scenario) -> AppResult<usize> {
    if let Some(size) = args.history_size {
        return Ok(size);
    }
    if let Some(size) = scenario.history_size {
        return Ok(validate_size(size, "history-size")?);
    }
    Ok(args.default_history_size.unwrap_or(DEFAULT_HISTORY_SIZE))
}
