//! gettrackers - download, filter, and output tracker URLs grouped by domain.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use gettrackers::cli::{Cli, Commands};
use gettrackers::paths::Paths;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    // stdout is reserved for command output
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let paths = Paths::resolve()?;
    let output = cli.output.as_deref();

    match cli.command {
        None => gettrackers::commands::groups::run(&cli.groups, output, &paths).await,
        Some(Commands::Groups(args)) => {
            gettrackers::commands::groups::run(&args, output, &paths).await
        }
        Some(Commands::Fetch) => gettrackers::commands::fetch::run(&paths).await,
        Some(Commands::Show { target }) => gettrackers::commands::show::run(target, &paths).await,
        Some(Commands::Block { pattern }) => {
            gettrackers::commands::block::run(&pattern, &paths).await
        }
        Some(Commands::Config { action }) => {
            gettrackers::commands::config::run(action, &paths).await
        }
    }
}
