mod config;

use clap::Parser;
use config::Cli;
use decibinary_rs::{harness, DecibinaryError};
use std::{
    fs::File,
    io::{self, BufReader, BufWriter},
    process::ExitCode,
};
use tracing::{error, level_filters::LevelFilter, subscriber::set_global_default};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("Failed to set up logging: {e}");
        return ExitCode::FAILURE;
    }
    if let Err(e) = run(Cli::parse()) {
        error!("decibinary error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_tracing() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    set_global_default(subscriber)
}

fn run(cli: Cli) -> Result<usize, DecibinaryError> {
    let reader: Box<dyn io::BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let writer: Box<dyn io::Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    harness::run(reader, writer)
}
