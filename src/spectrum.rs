//! Frequency-axis mapping for externally computed FFT output.

/// Bin frequency for each index: k * sampling_rate / n
pub fn bin_frequencies(n: usize, sampling_rate_hz: f64) -> Vec<f64> {
    (0..n)
        .map(|k| k as f64 * sampling_rate_hz / n as f64)
        .collect()
}

/// Pair values with their bin frequencies, keeping the first n/2 bins
/// (non-negative frequencies) and dropping the DC bin
pub fn positive_spectrum(values: &[i32], sampling_rate_hz: f64) -> Vec<(f64, f64)> {
    let freqs = bin_frequencies(values.len(), sampling_rate_hz);
    let half = values.len() / 2;

    freqs[..half]
        .iter()
        .zip(&values[..half])
        .skip(1)
        .map(|(&f, &v)| (f, v as f64))
        .collect()
}
