//! Buffered fill-and-write engine
//!
//! This module provides the core engine for fillfile, handling:
//! - Chunked writing with a configurable chunk size
//! - Pattern alignment across chunk refills
//! - Pseudo-random and random-from-set data generation
//! - Progress callbacks with speed and ETA calculation
//!
//! Memory use is bounded at chunk size plus pattern length no matter how
//! large the target file is; the whole output is never materialized.

use crate::error::{Error, Result};
use crate::policy::FillPolicy;
use rand::{Rng, RngCore};
use std::io::Write;
use std::time::{Duration, Instant};

/// Default chunk size for fill operations (256 KB)
pub const DEFAULT_CHUNK_SIZE: usize = 256 * 1024;

/// Minimum chunk size (4 KB)
pub const MIN_CHUNK_SIZE: usize = 4 * 1024;

/// Maximum chunk size (64 MB)
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Fill progress information
#[derive(Debug, Clone)]
pub struct FillProgress {
    /// Bytes written so far
    pub bytes_written: u64,

    /// Total bytes to write
    pub total_bytes: u64,

    /// Current write speed in bytes per second
    pub speed_bps: u64,

    /// Estimated time remaining in seconds
    pub eta_seconds: Option<u64>,

    /// Current chunk number being written
    pub current_chunk: u64,

    /// Total number of chunks
    pub total_chunks: u64,

    /// Elapsed time since start
    pub elapsed: Duration,
}

impl FillProgress {
    /// Create a new progress instance
    pub fn new(total_bytes: u64, chunk_size: usize) -> Self {
        let total_chunks = total_bytes.div_ceil(chunk_size as u64);
        Self {
            bytes_written: 0,
            total_bytes,
            speed_bps: 0,
            eta_seconds: None,
            current_chunk: 0,
            total_chunks,
            elapsed: Duration::ZERO,
        }
    }

    /// Calculate completion percentage (0.0 to 100.0)
    pub fn percentage(&self) -> f64 {
        if self.total_bytes == 0 {
            100.0
        } else {
            (self.bytes_written as f64 / self.total_bytes as f64) * 100.0
        }
    }

    /// Check if the fill is complete
    pub fn is_complete(&self) -> bool {
        self.bytes_written >= self.total_bytes
    }

    /// Format speed for display (e.g., "45.2 MB/s")
    pub fn speed_display(&self) -> String {
        format_speed(self.speed_bps)
    }

    /// Format ETA for display (e.g., "2m 30s")
    pub fn eta_display(&self) -> String {
        match self.eta_seconds {
            Some(secs) if secs > 0 => format_duration(secs),
            _ => "calculating...".to_string(),
        }
    }
}

/// Progress callback type
pub type ProgressCallback = Box<dyn Fn(&FillProgress) + Send + Sync>;

/// Configuration for fill operations
#[derive(Debug, Clone)]
pub struct FillConfig {
    /// Chunk size for buffered writes
    pub chunk_size: usize,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl FillConfig {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set chunk size (clamped to valid range)
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size.clamp(MIN_CHUNK_SIZE, MAX_CHUNK_SIZE);
        self
    }
}

/// Result of a fill operation
#[derive(Debug, Clone)]
pub struct FillReport {
    /// Total bytes written
    pub bytes_written: u64,

    /// Total time elapsed
    pub elapsed: Duration,

    /// Average speed in bytes per second
    pub average_speed: u64,
}

impl FillReport {
    /// Format average speed for display
    pub fn speed_display(&self) -> String {
        format_speed(self.average_speed)
    }
}

/// Fill engine producing exactly `target_size` bytes into a sink
pub struct Filler {
    config: FillConfig,
    progress_callback: Option<ProgressCallback>,
}

impl Filler {
    /// Create a new filler with default configuration
    pub fn new() -> Self {
        Self {
            config: FillConfig::default(),
            progress_callback: None,
        }
    }

    /// Create a new filler with custom configuration
    pub fn with_config(config: FillConfig) -> Self {
        Self {
            config,
            progress_callback: None,
        }
    }

    /// Set a progress callback, invoked after every chunk write
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(&FillProgress) + Send + Sync + 'static,
    {
        self.progress_callback = Some(Box::new(callback));
        self
    }

    /// Write exactly `target_size` bytes of policy-generated data to `sink`.
    ///
    /// Deterministic policies use one buffer of `chunk_size + pattern length`
    /// bytes holding the pattern repeated cyclically, so any chunk is a plain
    /// slice starting at `bytes_written mod pattern length` with no per-byte
    /// work in the loop. Random policies refill a `chunk_size` buffer before
    /// every write.
    ///
    /// A write failure aborts immediately; whatever was already written is
    /// left in place. `target_size == 0` succeeds without writing.
    pub fn fill<W: Write>(
        &mut self,
        sink: &mut W,
        target_size: u64,
        policy: &FillPolicy,
    ) -> Result<FillReport> {
        // The constructors reject these, but the variants are public; an
        // empty sequence would divide or draw from a zero-length range below.
        match policy {
            FillPolicy::Pattern(bytes) if bytes.is_empty() => {
                return Err(Error::InvalidByteSequence(
                    "Pattern to repeat must have at least one byte".to_string(),
                ));
            }
            FillPolicy::RandomFrom(choices) if choices.is_empty() => {
                return Err(Error::InvalidByteSequence(
                    "Random selection set must have at least one byte".to_string(),
                ));
            }
            _ => {}
        }

        let chunk_size = self.config.chunk_size;
        let start_time = Instant::now();

        tracing::debug!(
            "Filling {} bytes in chunks of {} ({:?})",
            target_size,
            chunk_size,
            policy
        );

        let mut progress = FillProgress::new(target_size, chunk_size);
        let mut speed_tracker = SpeedTracker::new();
        let mut rng = rand::thread_rng();

        // One buffer for the whole run. Pattern policies get one extra copy
        // of the pattern appended so every chunk-sized window at any phase
        // offset stays in bounds.
        let unit_len = policy.repeat_unit().map_or(0, <[u8]>::len);
        let mut buffer = match policy.repeat_unit() {
            Some(unit) => {
                let mut buf = Vec::with_capacity(chunk_size + unit.len());
                buf.extend(unit.iter().cycle().take(chunk_size + unit.len()));
                buf
            }
            None => vec![0u8; chunk_size],
        };

        while progress.bytes_written < target_size {
            let this_chunk = (target_size - progress.bytes_written).min(chunk_size as u64) as usize;

            let chunk: &[u8] = match policy {
                FillPolicy::Random => {
                    rng.fill_bytes(&mut buffer);
                    &buffer[..this_chunk]
                }
                FillPolicy::RandomFrom(choices) => {
                    for byte in buffer.iter_mut() {
                        *byte = choices[rng.gen_range(0..choices.len())];
                    }
                    &buffer[..this_chunk]
                }
                _ => {
                    let offset = (progress.bytes_written % unit_len as u64) as usize;
                    &buffer[offset..offset + this_chunk]
                }
            };

            sink.write_all(chunk)?;

            progress.bytes_written += this_chunk as u64;
            progress.current_chunk += 1;
            progress.elapsed = start_time.elapsed();
            speed_tracker.update(progress.bytes_written);
            progress.speed_bps = speed_tracker.current_speed();
            progress.eta_seconds = calculate_eta(
                progress.bytes_written,
                progress.total_bytes,
                progress.speed_bps,
            );

            if let Some(ref callback) = self.progress_callback {
                callback(&progress);
            }
        }

        sink.flush()?;

        let elapsed = start_time.elapsed();
        let average_speed = if elapsed.as_secs() > 0 {
            progress.bytes_written / elapsed.as_secs()
        } else {
            progress.bytes_written
        };

        tracing::debug!(
            "Wrote {} bytes in {:?}",
            progress.bytes_written,
            elapsed
        );

        Ok(FillReport {
            bytes_written: progress.bytes_written,
            elapsed,
            average_speed,
        })
    }
}

impl Default for Filler {
    fn default() -> Self {
        Self::new()
    }
}

/// Speed tracking with smoothing over recent samples
struct SpeedTracker {
    samples: Vec<(Instant, u64)>,
    max_samples: usize,
}

impl SpeedTracker {
    fn new() -> Self {
        Self {
            samples: Vec::with_capacity(10),
            max_samples: 10,
        }
    }

    fn update(&mut self, bytes_written: u64) {
        if self.samples.len() >= self.max_samples {
            self.samples.remove(0);
        }
        self.samples.push((Instant::now(), bytes_written));
    }

    fn current_speed(&self) -> u64 {
        if self.samples.len() < 2 {
            return 0;
        }

        let first = &self.samples[0];
        let last = &self.samples[self.samples.len() - 1];

        let duration = last.0.duration_since(first.0);
        let bytes = last.1.saturating_sub(first.1);

        if duration.as_millis() > 0 {
            (bytes as f64 / duration.as_secs_f64()) as u64
        } else {
            0
        }
    }
}

/// Calculate estimated time remaining
fn calculate_eta(bytes_written: u64, total_bytes: u64, speed_bps: u64) -> Option<u64> {
    if speed_bps == 0 || bytes_written >= total_bytes {
        return None;
    }

    let remaining = total_bytes.saturating_sub(bytes_written);
    Some(remaining / speed_bps)
}

/// Format a byte count with comma digit grouping (e.g., "1,048,576")
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format speed for display
pub fn format_speed(bytes_per_second: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes_per_second >= GB {
        format!("{:.1} GB/s", bytes_per_second as f64 / GB as f64)
    } else if bytes_per_second >= MB {
        format!("{:.1} MB/s", bytes_per_second as f64 / MB as f64)
    } else if bytes_per_second >= KB {
        format!("{:.1} KB/s", bytes_per_second as f64 / KB as f64)
    } else {
        format!("{} B/s", bytes_per_second)
    }
}

/// Format duration for display
pub fn format_duration(seconds: u64) -> String {
    if seconds >= 3600 {
        let hours = seconds / 3600;
        let mins = (seconds % 3600) / 60;
        format!("{}h {}m", hours, mins)
    } else if seconds >= 60 {
        let mins = seconds / 60;
        let secs = seconds % 60;
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}s", seconds)
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================
