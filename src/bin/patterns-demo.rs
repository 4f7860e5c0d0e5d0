use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use patterns::config::Config;
use patterns::demo::{self, Pattern};
use patterns::output::Console;

/// Walk through the design pattern demos.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// TOML file overriding proxy and observer settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log internal events at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Patterns to run, in order
    #[arg(value_enum, default_value = "all")]
    patterns: Vec<Choice>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Choice {
    All,
    Builder,
    Proxy,
    Strategy,
    Adapter,
    Decorator,
    Observer,
    Visitor,
}

impl Choice {
    fn expand(self) -> Vec<Pattern> {
        match self {
            Choice::All => Pattern::ALL.to_vec(),
            Choice::Builder => vec![Pattern::Builder],
            Choice::Proxy => vec![Pattern::Proxy],
            Choice::Strategy => vec![Pattern::Strategy],
            Choice::Adapter => vec![Pattern::Adapter],
            Choice::Decorator => vec![Pattern::Decorator],
            Choice::Observer => vec![Pattern::Observer],
            Choice::Visitor => vec![Pattern::Visitor],
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };

    let out = Console::shared();
    for pattern in cli.patterns.iter().flat_map(|choice| choice.expand()) {
        let header = format!("=== {pattern} ===");
        println!("\n{}", header.as_str().bold().cyan());
        demo::run(pattern, &config, &out)
            .await
            .with_context(|| format!("{pattern} demo failed"))?;
    }
    Ok(())
}
