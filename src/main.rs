//! milestone-tracker CLI - Drive production milestones and warranty fee checks

use clap::Parser;
use milestone_tracker::cli::{Cli, Commands};
use milestone_tracker::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG overrides the flag-derived level
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error [{}]: {}", e.code(), e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> milestone_tracker::Result<()> {
    use milestone_tracker::cli::commands::{init, register, show, status, transition, warranty};

    let cwd = cli.cwd.as_deref();
    match cli.command {
        Some(Commands::Init { force }) => init::run(cwd, force).await,
        Some(Commands::Register { file, force }) => register::run(cwd, &file, force).await,
        Some(Commands::Status { json }) => status::run(cwd, json).await,
        Some(Commands::Show { id, json }) => show::run(cwd, &id, json).await,
        Some(Commands::Transition {
            id,
            task,
            status,
            note,
            image,
            json,
        }) => transition::run(cwd, &id, &task, status, note, image, json).await,
        Some(Commands::Warranty {
            file,
            threshold,
            json,
        }) => warranty::run(cwd, &file, threshold, json).await,
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
