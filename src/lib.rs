//! Wavefixture library - two-tone FFT test fixtures and result plots

pub mod cli;
pub mod error;
pub mod params;
pub mod pipeline;
pub mod plot;
pub mod quantize;
pub mod signal;
pub mod spectrum;
pub mod vector;
pub mod wav;

pub use error::{Error, Result};
