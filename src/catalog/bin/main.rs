use clap::{Parser, ValueEnum};
use tokio::io::{stdin, stdout, BufReader};
use tracing::{info, Level};
use library_catalog::console::Shell;
use library_catalog::core::controller::AppState;
use library_catalog::core::domain::Configuration;
use library_catalog::core::library::LibraryError;
use library_catalog::gateway::GatewayPublisherVia;
use library_catalog::utils::logging::setup_tracing;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Publisher {
    Logs,
    Memory,
}

impl From<Publisher> for GatewayPublisherVia {
    fn from(other: Publisher) -> Self {
        match other {
            Publisher::Logs => GatewayPublisherVia::Logs,
            Publisher::Memory => GatewayPublisherVia::Memory,
        }
    }
}

/// Interactive library catalog console.
#[derive(Debug, Parser)]
#[command(name = "catalog", version, about)]
struct Args {
    /// Branch identifier attached to every published event.
    #[arg(long, default_value = "main")]
    branch: String,

    /// Emit log lines as JSON.
    #[arg(long)]
    json_logs: bool,

    /// Where domain events are published.
    #[arg(long, value_enum, default_value_t = Publisher::Logs)]
    publisher: Publisher,

    /// Maximum log level written to stderr.
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    let args = Args::parse();
    let config = Configuration::new(args.branch.as_str())
        .with_json_logs(args.json_logs)
        .with_publisher(args.publisher.into());
    setup_tracing(args.log_level, &config)?;
    info!(branch_id = config.branch_id.as_str(), "starting catalog console");

    let mut shell = Shell::new(AppState::new(config), BufReader::new(stdin()), stdout());
    shell.run().await
}
