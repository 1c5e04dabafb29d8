//! CLI entrypoint for civic-helpdesk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use helpdesk_application::{
    AskQuestionUseCase, ClassifyFeedbackUseCase, DashboardUseCase, HelpdeskRepository,
    SubmitFeedbackUseCase,
};
use helpdesk_infrastructure::{
    ConfigLoader, FileConfig, InMemoryRepository, JsonlRepository, resolver_from_config,
};
use helpdesk_presentation::{
    ChatRepl, Cli, Command, CommandRunner, ConsoleFormatter, JsonFormatter, OutputFormat,
    OutputFormatter,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Handle --show-config before anything else
    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting civic-helpdesk");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    for issue in config.validate() {
        eprintln!("Warning: config {}", issue);
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    let formatter: Box<dyn OutputFormatter> = match cli.output {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    let classifier = ClassifyFeedbackUseCase::default();

    let command = cli.effective_command();

    // === Dependency Injection ===
    let resolver = resolver_from_config(&config.responder, cli.offline);
    if resolver.mode().is_configured() {
        info!("Answers come from {} with knowledge base fallback", config.responder.endpoint);
    }

    // Classification never touches the record file
    let repository: Arc<dyn HelpdeskRepository> = match command {
        Command::Classify { .. } => Arc::new(InMemoryRepository::new()),
        _ => build_repository(&cli, &config)?,
    };

    let runner = CommandRunner::new(
        cli.user.clone(),
        AskQuestionUseCase::new(resolver, repository.clone()),
        SubmitFeedbackUseCase::new(classifier.clone(), repository.clone()),
        DashboardUseCase::new(repository),
        classifier,
        formatter,
    )
    .with_progress(!cli.quiet && cli.output == OutputFormat::Text);

    let succeeded = match command {
        Command::Ask { question } => runner.ask(&question.join(" ")).await.is_some(),
        Command::Feedback { chat_id, text } => {
            runner.feedback(chat_id, &text.join(" ")).await.is_some()
        }
        Command::Dashboard => runner.dashboard().await,
        Command::Chat => {
            ChatRepl::new(runner).run().await?;
            true
        }
        Command::Classify { text } => {
            runner.classify(&text.join(" "));
            true
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Initialize logging based on verbosity level, optionally mirrored to a file
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    // Log files always capture at least info
    let file_level = if verbose == 0 { "info" } else { level };

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let file_name = path
                .file_name()
                .context("--log-file must name a file")?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(EnvFilter::new(file_level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn build_repository(cli: &Cli, config: &FileConfig) -> Result<Arc<dyn HelpdeskRepository>> {
    if cli.ephemeral {
        info!("Records are kept in memory and discarded on exit");
        return Ok(Arc::new(InMemoryRepository::new()));
    }

    let path = cli
        .store
        .clone()
        .unwrap_or_else(|| config.storage.resolved_path());
    let repository = JsonlRepository::open(&path)
        .with_context(|| format!("failed to open record file {}", path.display()))?;
    info!("Using record file {}", path.display());
    Ok(Arc::new(repository))
}
