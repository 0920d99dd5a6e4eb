use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use ftree::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ftree: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let html = match cli.input.as_ref() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let out = ftree::process_file_tree(&html, &cli.label)?;

    match cli.output.as_ref() {
        Some(path) => std::fs::write(path, out)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{out}"),
    }
    Ok(())
}
