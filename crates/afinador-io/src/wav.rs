//! WAV file reading and writing.
//!
//! Readers normalize everything to mono `f32` in [-1, 1], which is the only
//! sample format the pipeline consumes. Integer PCM is divided by the full
//! scale of its bit depth (e.g. 2^23 - 1 for 24-bit); multi-channel audio is
//! downmixed by averaging.

use crate::Result;
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// WAV file specification.
#[derive(Debug, Clone, Copy)]
pub struct WavSpec {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth per sample (e.g., 16, 24, 32).
    pub bits_per_sample: u16,
}

impl Default for WavSpec {
    fn default() -> Self {
        Self {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 32,
        }
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

/// Read a WAV file as normalized mono samples.
///
/// Integer PCM is scaled to [-1, 1] by its full-scale value; float files
/// are passed through. Multi-channel files are downmixed by averaging the
/// channels of each frame.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, WavSpec)> {
    let path = path.as_ref();
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<_, _>>()?,
        SampleFormat::Int => {
            // Full scale for the stored bit depth: 2^(bits-1) - 1.
            let full_scale = ((1u64 << (spec.bits_per_sample - 1)) - 1) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / full_scale))
                .collect::<std::result::Result<_, _>>()?
        }
    };

    let channels = spec.channels as usize;
    let samples = if channels == 1 {
        interleaved
    } else {
        interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    };

    tracing::debug!(
        path = %path.display(),
        sample_rate = spec.sample_rate,
        channels = spec.channels,
        frames = samples.len(),
        "loaded WAV file"
    );

    Ok((samples, spec.into()))
}

/// Write mono samples to a WAV file as 32-bit float.
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f32], sample_rate: u32) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    fn sine(freq_hz: f32, sample_rate: f32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| 0.5 * (TAU * freq_hz * i as f32 / sample_rate).sin())
            .collect()
    }

    #[test]
    fn float_wav_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");

        let samples = sine(110.0, 44100.0, 4096);
        write_wav(&path, &samples, 44100).unwrap();

        let (loaded, spec) = read_wav(&path).unwrap();
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(spec.channels, 1);
        assert_eq!(loaded.len(), samples.len());
        for (a, b) in loaded.iter().zip(&samples) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn integer_pcm_is_normalized_to_unit_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pcm.wav");

        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        writer.write_sample(i16::MAX).unwrap();
        writer.write_sample(0i16).unwrap();
        writer.write_sample(-i16::MAX).unwrap();
        writer.finalize().unwrap();

        let (loaded, _) = read_wav(&path).unwrap();
        assert_eq!(loaded.len(), 3);
        assert!((loaded[0] - 1.0).abs() < 1e-4);
        assert_eq!(loaded[1], 0.0);
        assert!((loaded[2] + 1.0).abs() < 1e-4);
    }

    #[test]
    fn stereo_is_downmixed_by_averaging() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");

        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 44100,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        // L = 0.8, R = 0.2 → mono 0.5
        for _ in 0..16 {
            writer.write_sample(0.8f32).unwrap();
            writer.write_sample(0.2f32).unwrap();
        }
        writer.finalize().unwrap();

        let (loaded, spec) = read_wav(&path).unwrap();
        assert_eq!(spec.channels, 2);
        assert_eq!(loaded.len(), 16);
        for s in loaded {
            assert!((s - 0.5).abs() < 1e-6);
        }
    }
}
