//! Plot output configuration.

use std::path::PathBuf;

/// Image format for rendered plots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ImageFormat {
    /// Vector output, text rendered by the viewer
    #[default]
    Svg,

    /// Raster output saved through the `image` crate
    /// Needs the `ttf` feature to rasterize text
    Png,
}

impl ImageFormat {
    /// Whether this build can render the format
    pub fn is_supported(self) -> bool {
        match self {
            ImageFormat::Svg => true,
            ImageFormat::Png => cfg!(feature = "ttf"),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }
}

/// Plot rendering configuration
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Directory receiving rendered plots
    pub output_dir: PathBuf,

    /// Output image format
    pub format: ImageFormat,

    /// Time-domain figure size (pixels)
    pub waveform_size: (u32, u32),

    /// Frequency-domain figure size (pixels)
    pub spectrum_size: (u32, u32),

    /// Open rendered plots in the system viewer
    pub show: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("plots"),
            format: ImageFormat::Svg,
            waveform_size: (1200, 600),
            spectrum_size: (1000, 500),
            show: true,
        }
    }
}

impl PlotConfig {
    /// Validate configuration (renderable format, non-empty figures)
    pub fn validate(&self) -> Result<(), String> {
        if !self.format.is_supported() {
            return Err(format!(
                "{:?} plots need the `ttf` feature, use svg or rebuild with --features ttf",
                self.format
            ));
        }
        for (name, (width, height)) in [
            ("Waveform", self.waveform_size),
            ("Spectrum", self.spectrum_size),
        ] {
            if width == 0 || height == 0 {
                return Err(format!(
                    "{} figure size must be non-zero, got {}x{}",
                    name, width, height
                ));
            }
        }
        Ok(())
    }

    /// Time-domain plot path
    pub fn waveform_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("waveforms.{}", self.format.extension()))
    }

    /// Frequency-domain plot path
    pub fn spectrum_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("spectrum.{}", self.format.extension()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PlotConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.waveform_path(), PathBuf::from("plots/waveforms.svg"));
    }

    #[test]
    fn test_png_needs_ttf() {
        let config = PlotConfig {
            format: ImageFormat::Png,
            ..Default::default()
        };
        assert_eq!(config.validate().is_ok(), cfg!(feature = "ttf"));
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = PlotConfig {
            spectrum_size: (0, 500),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
