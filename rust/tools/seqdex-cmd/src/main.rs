use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use seqdex_indexed_sequence::{IndexedSequence, SequenceConfig, config::DEFAULT_INITIAL_CAPACITY};

mod command;
mod logger;
mod session;

use session::Session;

#[derive(Parser)]
#[command(name = "seqdex-cmd")]
#[command(about = "Interactive command loop over an indexed integer sequence")]
#[command(version)]
struct Cli {
    /// Initial capacity of the random-access index (doubled when full)
    #[arg(long, default_value_t = DEFAULT_INITIAL_CAPACITY)]
    initial_capacity: usize,

    /// Do not print the menu and the prompt (useful with piped input)
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity on stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let config = SequenceConfig::with_initial_capacity(cli.initial_capacity)
        .with_context(|| format!("Invalid --initial-capacity {}", cli.initial_capacity))?;
    let mut session = Session::new(IndexedSequence::with_config(config), !cli.quiet);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session
        .run(stdin.lock(), &mut stdout.lock())
        .with_context(|| "Command session failed")
}
