//! Composition, min-max normalization and integer quantization.

use thiserror::Error;

use crate::params::{RoundingMode, SignalConfig};
use crate::signal::GeneratedSignals;

#[derive(Debug, Error, PartialEq)]
pub enum QuantizeError {
    #[error("Cannot compose waves of different lengths ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
    #[error("Cannot normalize an empty signal")]
    Empty,
    #[error("Composed signal is constant ({value}), normalization divides by zero")]
    Degenerate { value: f64 },
}

/// Composed signal and its scaled and quantized forms
#[derive(Debug, Clone)]
pub struct QuantizedWave {
    /// wave1 + wave2
    pub composed: Vec<f64>,
    /// Composed signal mapped onto [min_value, max_value] before rounding
    pub scaled: Vec<f64>,
    /// Rounded samples, ready for emission
    pub samples: Vec<i32>,
}

/// Element-wise sum of two equal-length waves
pub fn compose(a: &[f64], b: &[f64]) -> Result<Vec<f64>, QuantizeError> {
    if a.len() != b.len() {
        return Err(QuantizeError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

/// Min-max normalize onto [min_value, max_value]
///
/// A constant signal has no span to divide by and is reported as
/// [`QuantizeError::Degenerate`].
pub fn normalize(
    composed: &[f64],
    min_value: i32,
    max_value: i32,
) -> Result<Vec<f64>, QuantizeError> {
    let Some(&first) = composed.first() else {
        return Err(QuantizeError::Empty);
    };

    let (lo, hi) = composed
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    let span = hi - lo;
    if span == 0.0 {
        return Err(QuantizeError::Degenerate { value: lo });
    }

    let out_span = max_value as f64 - min_value as f64;
    Ok(composed
        .iter()
        .map(|&v| (v - lo) / span * out_span + min_value as f64)
        .collect())
}

/// Round scaled samples to integers with an explicit rounding rule
pub fn quantize(scaled: &[f64], mode: RoundingMode) -> Vec<i32> {
    scaled.iter().map(|&v| mode.apply(v) as i32).collect()
}

/// Compose, normalize and quantize the generated test tones
pub fn quantize_waves(
    signals: &GeneratedSignals,
    config: &SignalConfig,
) -> Result<QuantizedWave, QuantizeError> {
    let composed = compose(&signals.wave1, &signals.wave2)?;
    let scaled = normalize(&composed, config.min_value, config.max_value)?;
    let samples = quantize(&scaled, config.rounding);

    Ok(QuantizedWave {
        composed,
        scaled,
        samples,
    })
}
