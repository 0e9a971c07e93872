//! Wavefixture - test signals for validating an external FFT implementation.
//!
//! Synthesizes two sine tones, quantizes their sum to 8 bits and prints it as
//! a C array, then plots the spectrum the FFT program wrote back.

use std::process::ExitCode;

use clap::Parser;

use wavefixture::cli::Args;
use wavefixture::pipeline;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match pipeline::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
