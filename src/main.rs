use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pystruct::config::{OutputMode, RenderConfig};
use pystruct::constants::render::{DEFAULT_CLASS_SYMBOL, DEFAULT_FUNC_SYMBOL};

#[derive(Parser)]
#[command(name = "pystruct")]
#[command(
    version,
    about = "Analyze Python code structure with tree-like pretty print"
)]
struct Cli {
    /// Directory to analyze
    directory: PathBuf,

    /// Exclude import statements from the output
    #[arg(long)]
    exclude_imports: bool,

    /// Output format: text tree (print) or Graphviz file (dot)
    #[arg(long, value_enum, default_value_t = OutputMode::Print)]
    output: OutputMode,

    /// Symbol to prepend to function names
    #[arg(long, default_value = DEFAULT_FUNC_SYMBOL)]
    func_symbol: String,

    /// Symbol to prepend to class names
    #[arg(long, default_value = DEFAULT_CLASS_SYMBOL)]
    class_symbol: String,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RenderConfig {
        exclude_imports: cli.exclude_imports,
        output: cli.output,
        func_symbol: cli.func_symbol,
        class_symbol: cli.class_symbol,
    };

    pystruct::cli::run(&cli.directory, &config)?;
    Ok(())
}
