//! Test signal synthesis and quantization parameters.

/// Rounding rule used when mapping scaled samples onto integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RoundingMode {
    /// Round half to even (2.5 → 2, 3.5 → 4).
    /// Reproduces the fixtures already checked into the firmware tests.
    #[default]
    #[value(alias = "even")]
    TiesEven,

    /// Round half away from zero (2.5 → 3), `f64::round`
    #[value(alias = "away")]
    AwayFromZero,
}

impl RoundingMode {
    /// Round a single scaled sample to the nearest integer
    pub fn apply(self, value: f64) -> f64 {
        match self {
            RoundingMode::TiesEven => value.round_ties_even(),
            RoundingMode::AwayFromZero => value.round(),
        }
    }
}

/// Two-tone test signal configuration
#[derive(Debug, Clone)]
pub struct SignalConfig {
    /// Sampling rate (Hz)
    pub sampling_rate_hz: f64,

    /// Signal duration (seconds)
    /// 0.1024 s @ 10 kHz = 1024 samples, one FFT frame
    pub duration_s: f64,

    /// First tone frequency (Hz)
    pub freq1_hz: f64,

    /// Second tone frequency (Hz)
    pub freq2_hz: f64,

    /// Half the output span (127.5 = 255 / 2)
    /// Not used by min-max normalization, kept for reference
    pub amplitude: f64,

    /// Output midpoint (127.5)
    /// Not used by min-max normalization, kept for reference
    pub offset: f64,

    /// Lowest quantized value
    pub min_value: i32,

    /// Highest quantized value
    pub max_value: i32,

    /// Rounding rule for quantization
    pub rounding: RoundingMode,

    /// Identifier of the emitted C array
    pub array_name: String,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            sampling_rate_hz: 10_000.0,
            duration_s: 0.1024,
            freq1_hz: 300.0,
            freq2_hz: 550.0,
            amplitude: 127.5,
            offset: 127.5,
            min_value: 0,
            max_value: 255,
            rounding: RoundingMode::TiesEven,
            array_name: "wave_samples".to_string(),
        }
    }
}

impl SignalConfig {
    /// Number of samples on the time axis: floor(rate * duration)
    pub fn sample_count(&self) -> usize {
        (self.sampling_rate_hz * self.duration_s).floor() as usize
    }

    /// Spacing between consecutive samples (seconds)
    pub fn sample_period_s(&self) -> f64 {
        self.duration_s / self.sample_count() as f64
    }

    /// Validate configuration (positive rate and duration, ordered bounds, etc.)
    pub fn validate(&self) -> Result<(), String> {
        if !self.sampling_rate_hz.is_finite() || self.sampling_rate_hz <= 0.0 {
            return Err(format!(
                "Sampling rate must be > 0, got {}",
                self.sampling_rate_hz
            ));
        }
        if !self.duration_s.is_finite() || self.duration_s <= 0.0 {
            return Err(format!("Duration must be > 0, got {}", self.duration_s));
        }
        if !self.freq1_hz.is_finite() || !self.freq2_hz.is_finite() {
            return Err(format!(
                "Frequencies must be finite, got {} and {}",
                self.freq1_hz, self.freq2_hz
            ));
        }
        if self.min_value >= self.max_value {
            return Err(format!(
                "Min value must be below max value, got {}..{}",
                self.min_value, self.max_value
            ));
        }
        if !is_c_identifier(&self.array_name) {
            return Err(format!(
                "Array name must be a C identifier, got '{}'",
                self.array_name
            ));
        }
        Ok(())
    }
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
