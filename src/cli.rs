//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::{ImageFormat, PlotConfig, RoundingMode, SignalConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "wavefixture")]
#[command(
    about = "Generate a two-tone 8-bit test waveform as a C array and plot FFT results",
    long_about = None
)]
pub struct Args {
    /// Sampling rate (Hz)
    #[arg(long, value_name = "HZ", default_value = "10000")]
    pub sampling_rate: f64,

    /// Signal duration (seconds)
    #[arg(long, value_name = "SECONDS", default_value = "0.1024")]
    pub duration: f64,

    /// First tone frequency (Hz)
    #[arg(long, value_name = "HZ", default_value = "300", allow_negative_numbers = true)]
    pub freq1: f64,

    /// Second tone frequency (Hz)
    #[arg(long, value_name = "HZ", default_value = "550", allow_negative_numbers = true)]
    pub freq2: f64,

    /// Lowest quantized value
    #[arg(long, value_name = "INT", default_value = "0", allow_negative_numbers = true)]
    pub min_value: i32,

    /// Highest quantized value
    #[arg(long, value_name = "INT", default_value = "255", allow_negative_numbers = true)]
    pub max_value: i32,

    /// Rounding rule for quantization
    #[arg(long, value_name = "RULE", value_enum, ignore_case = true, default_value_t = RoundingMode::TiesEven)]
    pub rounding: RoundingMode,

    /// Name of the emitted C array
    #[arg(long, value_name = "NAME", default_value = "wave_samples")]
    pub array_name: String,

    /// Write the C array to a file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also export the waveform as an 8-bit WAV file
    #[arg(long, value_name = "FILE")]
    pub wav: Option<PathBuf>,

    /// FFT output to plot (C array written by the FFT test program)
    #[arg(long, short, value_name = "FILE", default_value = "postFFT.txt")]
    pub input: PathBuf,

    /// Do not read or plot the FFT output
    #[arg(long)]
    pub skip_spectrum: bool,

    /// Directory for rendered plots
    #[arg(long, value_name = "DIR", default_value = "plots")]
    pub plot_dir: PathBuf,

    /// Plot image format (png needs the `ttf` feature)
    #[arg(long, value_name = "FORMAT", value_enum, ignore_case = true, default_value_t = ImageFormat::Svg)]
    pub format: ImageFormat,

    /// Time-domain figure width (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "1200")]
    pub waveform_width: u32,

    /// Time-domain figure height (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "600")]
    pub waveform_height: u32,

    /// Frequency-domain figure width (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "1000")]
    pub spectrum_width: u32,

    /// Frequency-domain figure height (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "500")]
    pub spectrum_height: u32,

    /// Render plots without opening them
    #[arg(long)]
    pub no_show: bool,
}

impl Args {
    /// Build signal configuration from arguments
    pub fn signal_config(&self) -> SignalConfig {
        SignalConfig {
            sampling_rate_hz: self.sampling_rate,
            duration_s: self.duration,
            freq1_hz: self.freq1,
            freq2_hz: self.freq2,
            min_value: self.min_value,
            max_value: self.max_value,
            rounding: self.rounding,
            array_name: self.array_name.clone(),
            ..Default::default()
        }
    }

    /// Build plot configuration from arguments
    pub fn plot_config(&self) -> PlotConfig {
        PlotConfig {
            output_dir: self.plot_dir.clone(),
            format: self.format,
            waveform_size: (self.waveform_width, self.waveform_height),
            spectrum_size: (self.spectrum_width, self.spectrum_height),
            show: !self.no_show,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_constants() {
        let args = Args::parse_from(["wavefixture"]);
        let config = args.signal_config();
        let reference = SignalConfig::default();

        assert_eq!(config.sampling_rate_hz, reference.sampling_rate_hz);
        assert_eq!(config.duration_s, reference.duration_s);
        assert_eq!(config.freq1_hz, reference.freq1_hz);
        assert_eq!(config.freq2_hz, reference.freq2_hz);
        assert_eq!(config.min_value, reference.min_value);
        assert_eq!(config.max_value, reference.max_value);
        assert_eq!(config.rounding, RoundingMode::TiesEven);
        assert_eq!(config.array_name, "wave_samples");
        assert_eq!(args.input, PathBuf::from("postFFT.txt"));

        let plot = args.plot_config();
        let reference = PlotConfig::default();
        assert_eq!(plot.format, ImageFormat::Svg);
        assert_eq!(plot.waveform_size, reference.waveform_size);
        assert_eq!(plot.spectrum_size, reference.spectrum_size);
        assert!(plot.show);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "wavefixture",
            "--sampling-rate",
            "8000",
            "--freq1",
            "1000",
            "--min-value",
            "-128",
            "--max-value",
            "127",
            "--rounding",
            "away",
            "--format",
            "PNG",
            "--spectrum-width",
            "640",
            "--spectrum-height",
            "480",
            "--no-show",
            "--skip-spectrum",
        ]);
        let config = args.signal_config();

        assert_eq!(config.sampling_rate_hz, 8000.0);
        assert_eq!(config.freq1_hz, 1000.0);
        assert_eq!(config.min_value, -128);
        assert_eq!(config.max_value, 127);
        assert_eq!(config.rounding, RoundingMode::AwayFromZero);
        assert!(args.skip_spectrum);

        let plot = args.plot_config();
        assert_eq!(plot.format, ImageFormat::Png);
        assert_eq!(plot.spectrum_size, (640, 480));
        assert!(!plot.show);
    }

    #[test]
    fn test_rounding_names() {
        let args = Args::parse_from(["wavefixture", "--rounding", "ties-even"]);
        assert_eq!(args.rounding, RoundingMode::TiesEven);

        let args = Args::parse_from(["wavefixture", "--rounding", "away-from-zero"]);
        assert_eq!(args.rounding, RoundingMode::AwayFromZero);
    }

    #[test]
    fn test_unknown_choices_rejected() {
        assert!(Args::try_parse_from(["wavefixture", "--rounding", "awy"]).is_err());
        assert!(Args::try_parse_from(["wavefixture", "--format", "jpeg"]).is_err());
    }
}
