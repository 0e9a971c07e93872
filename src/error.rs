//! Pipeline error type, one variant per failing stage.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::quantize::QuantizeError;
use crate::vector::ReadError;
use crate::wav::WavError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Quantization failed: {0}")]
    Quantize(#[from] QuantizeError),
    #[error("Failed to emit vector: {0}")]
    Emit(#[source] io::Error),
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: ReadError },
    #[error("Failed to write WAV: {0}")]
    Wav(#[from] WavError),
    #[error("Plotting failed: {0}")]
    Plot(String),
    #[error("Failed to save plot: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
