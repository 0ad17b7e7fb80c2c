//! Fixed synthesis and output format parameters.

/// Lowest accepted harmonic frequency (Hz)
pub const MIN_FREQ: u32 = 20;

/// Highest accepted harmonic frequency (Hz)
pub const MAX_FREQ: u32 = 22050;

/// Output sample rate: twice the highest frequency (Nyquist)
pub const SAMPLE_RATE: u32 = MAX_FREQ * 2;

/// Output is always mono
pub const CHANNELS: u16 = 1;

/// Output is always 16-bit signed PCM
pub const BITS_PER_SAMPLE: u16 = 16;

/// Peak amplitude shared between all harmonics of a sample
pub const FULL_SCALE: u32 = 32765;

/// Output format parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthConfig {
    /// Number of interleaved channels
    pub channels: u16,
    /// Bits used to store one sample of one channel
    pub bits_per_sample: u16,
    /// Samples per second (Hz)
    pub sample_rate: u32,
}

impl SynthConfig {
    /// Bytes per sample of one channel
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per sample frame across all channels
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Bytes per second of audio
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            channels: CHANNELS,
            bits_per_sample: BITS_PER_SAMPLE,
            sample_rate: SAMPLE_RATE,
        }
    }
}
