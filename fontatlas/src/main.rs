//! Binary entry point for fontatlas.

use std::process::ExitCode;

use clap::Parser;
use fontatlas::cli::{Cli, Mode, log_filter};
use fontatlas::{Error, Job};

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(cli.verbose)))
        .init();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<(), Error> {
    let job = match cli.mode()? {
        Mode::PrintConfig => {
            print!("{}", Job::default().to_toml()?);
            return Ok(());
        }
        Mode::Load(path) => Job::load(&path)?,
        Mode::Run(job) => job,
    };

    let summary = fontatlas::run(&job)?;
    log::info!(
        "done: {}x{} atlas, {} glyphs, {} whitespaces, {} kerning pairs",
        summary.width,
        summary.height,
        summary.glyphs,
        summary.whitespaces,
        summary.kerning_pairs
    );
    Ok(())
}
