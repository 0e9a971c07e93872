//! Two-tone test signal generation.

use std::f64::consts::PI;

use crate::params::SignalConfig;

/// Time axis and the two raw sine waves evaluated over it
#[derive(Debug, Clone)]
pub struct GeneratedSignals {
    /// Sample timestamps (seconds), uniform over [0, duration)
    pub time: Vec<f64>,
    /// sin(2π · freq1 · t)
    pub wave1: Vec<f64>,
    /// sin(2π · freq2 · t)
    pub wave2: Vec<f64>,
}

/// Uniformly spaced timestamps covering [0, duration), right endpoint excluded
pub fn time_axis(config: &SignalConfig) -> Vec<f64> {
    let count = config.sample_count();
    let step = config.sample_period_s();
    (0..count).map(|i| i as f64 * step).collect()
}

/// Evaluate a unit-amplitude sine of `freq_hz` at each timestamp
pub fn sine_wave(time: &[f64], freq_hz: f64) -> Vec<f64> {
    let omega = 2.0 * PI * freq_hz;
    time.iter().map(|&t| (omega * t).sin()).collect()
}

/// Generate the time axis and both test tones
pub fn generate(config: &SignalConfig) -> GeneratedSignals {
    let time = time_axis(config);
    let wave1 = sine_wave(&time, config.freq1_hz);
    let wave2 = sine_wave(&time, config.freq2_hz);

    log::debug!(
        "Generated {} samples ({} Hz + {} Hz @ {} Hz)",
        time.len(),
        config.freq1_hz,
        config.freq2_hz,
        config.sampling_rate_hz
    );

    GeneratedSignals { time, wave1, wave2 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_axis_shape() {
        let configs = [
            (10_000.0, 0.1024),
            (44_100.0, 0.05),
            (8_000.0, 1.0),
            (3.0, 1.5),
        ];

        for (rate, duration) in configs {
            let config = SignalConfig {
                sampling_rate_hz: rate,
                duration_s: duration,
                ..Default::default()
            };
            let time = time_axis(&config);

            assert_eq!(time.len(), (rate * duration).floor() as usize);
            assert_eq!(time[0], 0.0);
            assert!(*time.last().unwrap() < duration);
            assert!(time.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_waves_start_at_zero() {
        let signals = generate(&SignalConfig::default());

        assert_eq!(signals.time.len(), 1024);
        assert_eq!(signals.wave1.len(), 1024);
        assert_eq!(signals.wave2.len(), 1024);
        assert_eq!(signals.wave1[0], 0.0);
        assert_eq!(signals.wave2[0], 0.0);
        assert!(signals
            .wave1
            .iter()
            .chain(&signals.wave2)
            .all(|v| (-1.0..=1.0).contains(v)));
    }

    #[test]
    fn test_sine_wave_quarter_period() {
        // 1 kHz has a 1 ms period, so 0.25 ms is the positive peak
        let wave = sine_wave(&[0.00025, 0.00075], 1000.0);
        assert!((wave[0] - 1.0).abs() < 1e-12);
        assert!((wave[1] + 1.0).abs() < 1e-12);
    }
}
