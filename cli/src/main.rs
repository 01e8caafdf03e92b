//! CLI entrypoint for DOQ Coach
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use doq_application::{
    EventLog, NoEventLog, NoProgress, PracticeError, PracticeProgress, PracticeSessionUseCase,
};
use doq_infrastructure::{ConfigLoader, FileConfig, JsonlEventLog, StrategyRouter};
use doq_presentation::{
    Cli, ConsoleError, ConsoleFormatter, OutputConfig, PracticeConsole, ProgressReporter,
    SimpleProgress,
};
use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.list_themes {
        print!("{}", ConsoleFormatter::themes());
        return Ok(ExitCode::SUCCESS);
    }

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting DOQ Coach");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_without_files()?
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    report_config_issues(&config)?;

    OutputConfig {
        color: config.output.color,
    }
    .apply();

    // === Dependency Injection ===
    let mut router = StrategyRouter::from_config(&config)
        .context("Failed to set up the text-generation service")?;
    if let Some(mode) = cli.mode {
        router = router.with_mode(mode.into());
    }
    if let Some(classifier) = cli.classifier {
        router = router.with_classifier(classifier.into());
    }
    info!(
        "Strategy mode: {}, service: {:?}",
        router.mode(),
        router.status()
    );
    if let Some(reason) = router.offline_fallback_notice() {
        eprintln!("{}\n", ConsoleFormatter::offline_notice(reason));
    }

    let show_progress = config.repl.show_progress && !cli.quiet;

    let practice = PracticeSessionUseCase::new(Arc::new(router))
        .with_event_log(event_log(cli.events_file.clone(), &config))
        .with_progress(progress(show_progress));
    let practice = Arc::new(practice);

    let settings = cli.practice_settings(config.practice.settings());
    let mut console =
        PracticeConsole::new(practice, settings).with_history_file(config.repl.history_path());

    match console.run().await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(ConsoleError::Practice(e)) => {
            eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
            if let PracticeError::ConfigInvalid(_) = e {
                eprintln!("Run `doq-coach --list-themes` to see the available themes.");
            }
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Cannot open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn report_config_issues(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        warn!("{}", issue.message);
        eprintln!("{}", issue);
    }
    if config.has_errors() {
        bail!("Configuration has errors; fix them or run with --no-config");
    }
    Ok(())
}

fn event_log(cli_path: Option<PathBuf>, config: &FileConfig) -> Arc<dyn EventLog> {
    let path = cli_path.or_else(|| config.log.events_file.as_ref().map(PathBuf::from));
    match path.and_then(JsonlEventLog::new) {
        Some(log) => {
            info!("Writing session events to {}", log.path().display());
            Arc::new(log)
        }
        None => Arc::new(NoEventLog),
    }
}

fn progress(show_progress: bool) -> Arc<dyn PracticeProgress> {
    if !show_progress {
        Arc::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Arc::new(ProgressReporter::new())
    } else {
        Arc::new(SimpleProgress)
    }
}
