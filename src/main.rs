use eol_watch::adapters::outbound::console::StderrProgressReporter;
use eol_watch::adapters::outbound::filesystem::{
    FileSystemWriter, InventoryFileReader, StdoutPresenter,
};
use eol_watch::adapters::outbound::network::EndOfLifeClient;
use eol_watch::application::dto::SnapshotRequest;
use eol_watch::application::factories::FormatterFactory;
use eol_watch::application::use_cases::SnapshotFleetUseCase;
use eol_watch::cli::Args;
use eol_watch::config::{discover_config, load_config_from_path, Settings};
use eol_watch::ports::outbound::OutputPresenter;
use eol_watch::shared::error::ExitCode;
use eol_watch::shared::Result;
use std::path::Path;
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits 2 on invalid input)
    let args = Args::parse_args();

    // Load configuration: explicit path, or auto-discovery in the cwd
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(Path::new(path))?),
        None => discover_config(Path::new("."))?,
    };
    let settings = Settings::resolve(&args, config.unwrap_or_default())?;

    // Create adapters (Dependency Injection)
    let inventory_reader = InventoryFileReader::new();
    let source = EndOfLifeClient::with_config(
        &settings.source_url,
        Duration::from_secs(settings.timeout_seconds),
    )?;
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = SnapshotFleetUseCase::new(inventory_reader, source, progress_reporter);

    let request = SnapshotRequest::new(
        settings.inventory.clone(),
        settings.product_filter.clone(),
        settings.max_concurrency,
    );

    // Execute use case
    let response = use_case.execute(request).await?;

    // Format the snapshot
    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response.snapshot)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = match &settings.output {
        Some(output_path) => Box::new(FileSystemWriter::new(output_path.clone())),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&formatted_output)?;

    // CI risk gate
    if let Some(threshold) = settings.fail_on {
        if response.snapshot.any_at_or_above(threshold) {
            eprintln!(
                "🚨 Risk gate: at least one component is at or above '{}'",
                threshold
            );
            return Ok(ExitCode::RiskGateTripped);
        }
    }

    Ok(ExitCode::Success)
}
