//! Time-domain and frequency-domain plots.
//!
//! Charts are drawn with `plotters` against any drawing backend. SVG files are
//! written directly; PNG output is rendered into an RGB buffer and saved with
//! the `image` crate.

use std::fs;
use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::error::{Error, Result};
use crate::params::{ImageFormat, PlotConfig, SignalConfig};
use crate::quantize::QuantizedWave;
use crate::signal::GeneratedSignals;

const ORANGE: RGBColor = RGBColor(255, 165, 0);
const DARK_GREEN: RGBColor = RGBColor(0, 128, 0);

fn plot_err<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> Error {
    Error::Plot(err.to_string())
}

/// Value range of `values` with 5% headroom, widened when flat so the axis stays drawable
fn value_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    if lo == hi {
        return (lo - 1.0)..(hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad)..(hi + pad)
}

/// A chart that can be drawn onto any plotters backend
trait Figure {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>;
}

/// The two raw tones (top) and the quantized waveform (bottom)
struct WaveformFigure<'a> {
    config: &'a SignalConfig,
    signals: &'a GeneratedSignals,
    wave: &'a QuantizedWave,
}

impl Figure for WaveformFigure<'_> {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        let time = &self.signals.time;

        root.fill(&WHITE).map_err(plot_err)?;
        let panels = root.split_evenly((2, 1));
        let time_range = 0.0..self.config.duration_s;

        let mut tones = ChartBuilder::on(&panels[0])
            .caption("Original Sine Waves", ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(50)
            .build_cartesian_2d(time_range.clone(), -1.1..1.1)
            .map_err(plot_err)?;

        tones
            .configure_mesh()
            .x_desc("Time (s)")
            .y_desc("Amplitude")
            .draw()
            .map_err(plot_err)?;

        tones
            .draw_series(LineSeries::new(
                time.iter().copied().zip(self.signals.wave1.iter().copied()),
                &BLUE,
            ))
            .map_err(plot_err)?
            .label("Sine Wave 1")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

        tones
            .draw_series(LineSeries::new(
                time.iter().copied().zip(self.signals.wave2.iter().copied()),
                &ORANGE,
            ))
            .map_err(plot_err)?
            .label("Sine Wave 2")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &ORANGE));

        tones
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(plot_err)?;

        let (min_value, max_value) = (self.config.min_value, self.config.max_value);
        let mut composed = ChartBuilder::on(&panels[1])
            .caption("Composed Wave", ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(50)
            .build_cartesian_2d(
                time_range,
                value_range([min_value as f64, max_value as f64].into_iter()),
            )
            .map_err(plot_err)?;

        composed
            .configure_mesh()
            .x_desc("Time (s)")
            .y_desc(format!("Amplitude ({min_value} to {max_value})"))
            .draw()
            .map_err(plot_err)?;

        composed
            .draw_series(LineSeries::new(
                time.iter()
                    .copied()
                    .zip(self.wave.samples.iter().map(|&s| s as f64)),
                &DARK_GREEN,
            ))
            .map_err(plot_err)?
            .label("Composed Wave")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &DARK_GREEN));

        composed
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(plot_err)?;

        root.present().map_err(plot_err)
    }
}

/// Bin frequency against the values read back from a file
struct SpectrumFigure<'a> {
    points: &'a [(f64, f64)],
    source_name: &'a str,
}

impl Figure for SpectrumFigure<'_> {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        root.fill(&WHITE).map_err(plot_err)?;

        let x_range = value_range(self.points.iter().map(|p| p.0));
        let y_range = value_range(self.points.iter().map(|p| p.1));

        let mut chart = ChartBuilder::on(root)
            .caption(
                format!("Integer Samples from {}", self.source_name),
                ("sans-serif", 20),
            )
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(50)
            .build_cartesian_2d(x_range, y_range)
            .map_err(plot_err)?;

        chart
            .configure_mesh()
            .x_desc("Frequency (Hz)")
            .y_desc("Amplitude (0 to 255)")
            .draw()
            .map_err(plot_err)?;

        chart
            .draw_series(LineSeries::new(self.points.iter().copied(), &RED))
            .map_err(plot_err)?
            .label("Integer Samples from File")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(plot_err)?;

        root.present().map_err(plot_err)
    }
}

/// Draw `figure` with the backend matching `format` and write it to `path`
fn render(figure: &impl Figure, path: &Path, format: ImageFormat, size: (u32, u32)) -> Result<()> {
    // Without a font backend plotters cannot rasterize text
    if !format.is_supported() {
        return Err(Error::Plot(format!(
            "{:?} output needs the `ttf` feature",
            format
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::Plot(e.to_string()))?;
    }

    match format {
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            figure.draw(&root)?;
        }
        ImageFormat::Png => {
            let (width, height) = size;
            let mut buffer = vec![0u8; (width * height * 3) as usize];
            {
                let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
                figure.draw(&root)?;
            }
            image::save_buffer(path, &buffer, width, height, image::ColorType::Rgb8)?;
        }
    }

    log::info!("Rendered {}", path.display());
    Ok(())
}

/// Render the raw tones and the quantized waveform as two stacked panels
pub fn render_waveforms(
    plot: &PlotConfig,
    config: &SignalConfig,
    signals: &GeneratedSignals,
    wave: &QuantizedWave,
    path: &Path,
) -> Result<()> {
    let figure = WaveformFigure {
        config,
        signals,
        wave,
    };
    render(&figure, path, plot.format, plot.waveform_size)
}

/// Render frequency/value pairs as a single line plot titled after `source_name`
pub fn render_spectrum(
    plot: &PlotConfig,
    points: &[(f64, f64)],
    source_name: &str,
    path: &Path,
) -> Result<()> {
    if points.is_empty() {
        return Err(Error::Plot(format!(
            "{source_name} has no positive-frequency bins to plot"
        )));
    }

    let figure = SpectrumFigure {
        points,
        source_name,
    };
    render(&figure, path, plot.format, plot.spectrum_size)
}

/// Open a rendered plot in the system viewer
pub fn show(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(Error::Plot(format!("{} has not been rendered", path.display())));
    }
    open::that(path).map_err(|e| Error::Plot(format!("Failed to open {}: {}", path.display(), e)))
}
