//! apihub - Synchronize API definitions with a SwaggerHub-compatible registry.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Synchronize OpenAPI/Swagger definitions with an API registry.
#[derive(Parser, Debug)]
#[command(name = "apihub")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download an API definition from the registry
    Download(commands::DownloadArgs),

    /// Upload an API definition to the registry
    Upload(commands::UploadArgs),

    /// Mark a version as the default for an API
    SetDefault(commands::SetDefaultArgs),
}

/// Operation parameters are logged at info, so that is the default.
fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = log_level(cli.verbose);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    format!("apihub_cli={log_level},apihub_client={log_level}").into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = match cli.command {
        Commands::Download(args) => commands::download(&args),
        Commands::Upload(args) => commands::upload(&args),
        Commands::SetDefault(args) => commands::set_default(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
