//! Live microphone capture via cpal.
//!
//! The pipeline wants fixed-length mono frames at a known rate; cpal
//! delivers interleaved chunks of whatever size the platform picks. The
//! [`InputStream`] bridges the two: it downmixes each chunk to mono,
//! accumulates samples, and hands complete frames to the caller's callback
//! in order, one at a time.

use crate::{Error, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, Host};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Extract device name via `description()` (cpal 0.17+).
fn device_name(device: &Device) -> std::result::Result<String, cpal::DeviceNameError> {
    device.description().map(|d| d.name().to_string())
}

/// Audio input device information.
#[derive(Debug, Clone)]
pub struct AudioDevice {
    /// Human-readable device name.
    pub name: String,
    /// Default sample rate in Hz.
    pub default_sample_rate: u32,
}

/// Capture configuration.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Samples per frame handed to the callback.
    pub frame_len: usize,
    /// Input device name (uses default if `None`).
    pub device: Option<String>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            frame_len: 4096,
            device: None,
        }
    }
}

/// List all available audio input devices.
pub fn list_input_devices() -> Result<Vec<AudioDevice>> {
    let host = cpal::default_host();
    let mut devices = Vec::new();

    if let Ok(inputs) = host.input_devices() {
        for device in inputs {
            if let Ok(name) = device_name(&device) {
                let sample_rate = device
                    .default_input_config()
                    .map(|c| c.sample_rate())
                    .unwrap_or(44100);
                devices.push(AudioDevice {
                    name,
                    default_sample_rate: sample_rate,
                });
            }
        }
    }

    Ok(devices)
}

/// Get the default input device info.
pub fn default_input_device() -> Result<Option<AudioDevice>> {
    let host = cpal::default_host();
    Ok(host.default_input_device().and_then(|d| {
        device_name(&d).ok().map(|name| AudioDevice {
            name,
            default_sample_rate: d
                .default_input_config()
                .map(|c| c.sample_rate())
                .unwrap_or(44100),
        })
    }))
}

/// Find an input device by exact name, falling back to a case-insensitive
/// substring match.
fn find_input_device(host: &Host, search: &str) -> Result<Device> {
    let devices: Vec<Device> = host
        .input_devices()
        .map_err(|e| Error::Stream(e.to_string()))?
        .collect();

    for device in &devices {
        if device_name(device).map(|n| n == search).unwrap_or(false) {
            return Ok(device.clone());
        }
    }

    let search_lower = search.to_lowercase();
    for device in &devices {
        let matches = device_name(device)
            .map(|n| n.to_lowercase().contains(&search_lower))
            .unwrap_or(false);
        if matches {
            return Ok(device.clone());
        }
    }

    Err(Error::DeviceNotFound(search.to_string()))
}

/// Input-only audio stream delivering fixed-length mono frames.
pub struct InputStream {
    device: Device,
    config: CaptureConfig,
    sample_rate: u32,
    running: Arc<AtomicBool>,
}

impl InputStream {
    /// Open the configured capture device.
    pub fn new(config: CaptureConfig) -> Result<Self> {
        let host = cpal::default_host();
        let device = match &config.device {
            Some(name) => find_input_device(&host, name)?,
            None => host.default_input_device().ok_or(Error::NoDevice)?,
        };

        let sample_rate = device
            .default_input_config()
            .map_err(|e| Error::Stream(e.to_string()))?
            .sample_rate();

        tracing::info!(
            device = device_name(&device).unwrap_or_default(),
            sample_rate,
            frame_len = config.frame_len,
            "input stream opened"
        );

        Ok(Self {
            device,
            config,
            sample_rate,
            running: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Sample rate the device will capture at, in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Run the capture stream, handing each complete frame to `on_frame`.
    ///
    /// Interleaved multi-channel input is downmixed to mono by averaging.
    /// Blocks until [`stop`] is called from another thread (or a Ctrl-C
    /// handler). Frames arrive on the audio thread's schedule; if the
    /// callback falls behind, frames queue up rather than corrupt.
    ///
    /// [`stop`]: InputStream::stop
    pub fn run<F>(&mut self, mut on_frame: F) -> Result<()>
    where
        F: FnMut(&[f32]),
    {
        use std::sync::mpsc;

        let input_config = self
            .device
            .default_input_config()
            .map_err(|e| Error::Stream(e.to_string()))?;

        if input_config.sample_format() != cpal::SampleFormat::F32 {
            return Err(Error::UnsupportedFormat(format!(
                "{:?}",
                input_config.sample_format()
            )));
        }

        let channels = input_config.channels() as usize;
        let frame_len = self.config.frame_len;

        // Audio callback sends raw chunks; assembly happens on this thread.
        let (tx, rx) = mpsc::sync_channel::<Vec<f32>>(8);

        self.running.store(true, Ordering::SeqCst);
        let input_running = Arc::clone(&self.running);

        let stream = self
            .device
            .build_input_stream(
                &input_config.into(),
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    if input_running.load(Ordering::SeqCst) {
                        let _ = tx.try_send(data.to_vec());
                    }
                },
                |err| tracing::warn!("input stream error: {err}"),
                None,
            )
            .map_err(|e| Error::Stream(e.to_string()))?;

        stream.play().map_err(|e| Error::Stream(e.to_string()))?;

        let mut pending: Vec<f32> = Vec::with_capacity(frame_len * 2);
        let mut frame: Vec<f32> = vec![0.0; frame_len];

        while self.running.load(Ordering::SeqCst) {
            let chunk = match rx.recv_timeout(std::time::Duration::from_millis(100)) {
                Ok(chunk) => chunk,
                Err(mpsc::RecvTimeoutError::Timeout) => continue,
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
            };

            if channels == 1 {
                pending.extend(chunk);
            } else {
                pending.extend(
                    chunk
                        .chunks(channels)
                        .map(|c| c.iter().sum::<f32>() / channels as f32),
                );
            }

            while pending.len() >= frame_len {
                frame.copy_from_slice(&pending[..frame_len]);
                pending.drain(..frame_len);
                on_frame(&frame);
            }
        }

        drop(stream);
        Ok(())
    }

    /// Stop the capture stream.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Check if the stream is running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Handle that can stop the stream from another thread.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            running: Arc::clone(&self.running),
        }
    }
}

/// Cloneable handle for stopping an [`InputStream`] from another thread.
#[derive(Debug, Clone)]
pub struct StopHandle {
    running: Arc<AtomicBool>,
}

impl StopHandle {
    /// Stop the associated stream.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}
