//! End-to-end driver: generate → quantize → emit → plot → read → plot.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use crate::cli::Args;
use crate::error::{Error, Result};
use crate::params::{PlotConfig, SignalConfig};
use crate::quantize::{quantize_waves, QuantizedWave};
use crate::signal::generate;
use crate::{plot, spectrum, vector, wav};

/// Run every stage in order, stopping at the first failure
pub fn run(args: &Args) -> Result<()> {
    let config = args.signal_config();
    config.validate().map_err(Error::Config)?;
    let plot_config = args.plot_config();
    plot_config.validate().map_err(Error::Config)?;

    let signals = generate(&config);
    let wave = quantize_waves(&signals, &config)?;
    log::info!(
        "Quantized {} samples into [{}, {}]",
        wave.samples.len(),
        config.min_value,
        config.max_value
    );

    emit(&config, &wave, args.output.as_deref())?;

    if let Some(path) = &args.wav {
        wav::write_wav(path, &wave.samples, config.sampling_rate_hz)?;
    }

    let waveform_path = plot_config.waveform_path();
    plot::render_waveforms(&plot_config, &config, &signals, &wave, &waveform_path)?;
    if plot_config.show {
        display(&waveform_path);
    }

    if args.skip_spectrum {
        return Ok(());
    }
    plot_spectrum_file(&plot_config, &config, &args.input)
}

/// Write the C array to `output`, or stdout when absent
fn emit(config: &SignalConfig, wave: &QuantizedWave, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(Error::Emit)?;
            vector::write_c_vector(&mut BufWriter::new(file), &config.array_name, &wave.samples)
                .map_err(Error::Emit)?;
            log::info!("Wrote {} to {}", config.array_name, path.display());
        }
        None => {
            let stdout = io::stdout();
            vector::write_c_vector(&mut stdout.lock(), &config.array_name, &wave.samples)
                .map_err(Error::Emit)?;
        }
    }
    Ok(())
}

/// Open a rendered plot; the file is already on disk, so a missing viewer only warns
fn display(path: &Path) {
    if let Err(e) = plot::show(path) {
        log::warn!("{}", e);
    }
}

/// Read FFT output from `input` and plot its positive-frequency half
pub fn plot_spectrum_file(
    plot_config: &PlotConfig,
    config: &SignalConfig,
    input: &Path,
) -> Result<()> {
    let values = vector::read_samples_from_file(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;
    log::info!("Read {} values from {}", values.len(), input.display());

    let points = spectrum::positive_spectrum(&values, config.sampling_rate_hz);
    let source_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());

    let spectrum_path = plot_config.spectrum_path();
    plot::render_spectrum(plot_config, &points, &source_name, &spectrum_path)?;
    if plot_config.show {
        display(&spectrum_path);
    }
    Ok(())
}
