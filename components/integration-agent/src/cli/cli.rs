use crate::helpers::config::AgentConfig;
use crate::instrumentation;
use crate::runtime;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(
    name = "integration-agent",
    version,
    about = "Folder size data-collection integration",
    long_about = "Walks a directory tree, sums the size of every regular file and \
emits a single integration report as JSON on stdout. Logs go to stderr only."
)]
struct Cli {
    /// Print more information to logs
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Print pretty formatted JSON
    #[arg(short = 'p', long)]
    pretty: bool,

    /// Path to calculate, default './'
    #[arg(short = 's', long, default_value = "./")]
    search_path: PathBuf,
}

/// Entry function for CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    instrumentation::tracing::init_tracing(cli.verbose);

    let config = AgentConfig::new(cli.verbose, cli.pretty, cli.search_path);

    if let Err(e) = runtime::runtime::run_integration(&config) {
        tracing::error!(error = %e, "can't continue");
        process::exit(1);
    }

    Ok(())
}
