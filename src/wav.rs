//! 8-bit PCM export of the quantized waveform.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WavError {
    #[error("Sample {value} at index {index} does not fit 8-bit PCM (0..=255)")]
    OutOfRange { index: usize, value: i32 },
    #[error("Sampling rate {0} Hz does not fit a WAV header (1..=4294967295 Hz)")]
    SampleRate(f64),
    #[error(transparent)]
    Hound(#[from] hound::Error),
}

/// Write samples in [0, 255] as a mono 8-bit WAV file
///
/// 8-bit WAV stores unsigned bytes; hound takes them as `i8` offset by 128.
pub fn write_wav(path: &Path, samples: &[i32], sampling_rate_hz: f64) -> Result<(), WavError> {
    if let Some((index, &value)) = samples
        .iter()
        .enumerate()
        .find(|(_, v)| !(0..=255).contains(*v))
    {
        return Err(WavError::OutOfRange { index, value });
    }

    let sample_rate = sampling_rate_hz.round();
    if !(1.0..=u32::MAX as f64).contains(&sample_rate) {
        return Err(WavError::SampleRate(sampling_rate_hz));
    }

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: sample_rate as u32,
        bits_per_sample: 8,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample((sample - 128) as i8)?;
    }
    writer.finalize()?;

    log::info!("Wrote {} samples to {}", samples.len(), path.display());
    Ok(())
}
