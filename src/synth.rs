//! Additive Sine Synthesis
//!
//! Builds a mono 16-bit signal as the average of several sine harmonics.
//!
//! **Amplitude**: every harmonic is scaled by `FULL_SCALE / N` (truncating
//! integer division) before the harmonics are summed, so the sum of `N`
//! full-swing harmonics stays inside the 16-bit range.
//!
//! **Phase**: the phase argument uses the sample position within the
//! current second (`j = t mod sample_rate`), so the waveform restarts at
//! every second boundary. For frequencies that do not complete a whole
//! number of cycles per second this is audible as a click once per second.
//! Existing `wavdump` files were generated this way, so it stays.

use core::f64::consts::PI;

use snafu::Snafu;
use tracing::debug;

use crate::config::{FULL_SCALE, MAX_FREQ, MIN_FREQ};

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(visibility(pub))]
pub enum FrequencyError {
    /// No harmonic given
    #[snafu(display("at least one frequency is required"))]
    Empty,

    /// Harmonic outside [MIN_FREQ, MAX_FREQ]
    #[snafu(display("frequency {frequency} Hz is outside the range [{MIN_FREQ},{MAX_FREQ}] Hz"))]
    OutOfRange { index: usize, frequency: u32 },
}

/// Whether `frequency` lies in [MIN_FREQ, MAX_FREQ]
pub fn is_valid_frequency(frequency: u32) -> bool {
    (MIN_FREQ..=MAX_FREQ).contains(&frequency)
}

/// Non-empty, validated list of harmonic frequencies in Hz
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencySet(Vec<u32>);

impl FrequencySet {
    /// Validate frequencies, reporting the first one outside the accepted range
    pub fn new(frequencies: Vec<u32>) -> Result<Self, FrequencyError> {
        if frequencies.is_empty() {
            return EmptySnafu.fail();
        }

        if let Some((index, &frequency)) = frequencies
            .iter()
            .enumerate()
            .find(|(_, &f)| !is_valid_frequency(f))
        {
            return OutOfRangeSnafu { index, frequency }.fail();
        }

        Ok(Self(frequencies))
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

/// Per-harmonic amplitude: `FULL_SCALE / N`, truncated.
///
/// More than `FULL_SCALE` harmonics scale every harmonic to zero.
pub fn harmonic_scale(harmonics: usize) -> u32 {
    u32::try_from(harmonics)
        .ok()
        .and_then(|n| FULL_SCALE.checked_div(n))
        .unwrap_or(0)
}

/// Value of the sample at position `j` within a second
fn sample_at(frequencies: &[u32], scale: f64, j: u32, sample_rate: u32) -> i16 {
    let sum: f64 = frequencies
        .iter()
        .map(|&freq| {
            let phase = 2.0 * PI * freq as f64 * j as f64 / sample_rate as f64;
            phase.sin() * scale
        })
        .sum();

    // i32 -> i16 keeps the low 16 bits, wrapping rather than clamping
    sum.round() as i32 as i16
}

/// Synthesize `duration_seconds` of mono audio from a set of harmonics
///
/// Returns exactly `duration_seconds * sample_rate` samples. Inputs are
/// expected to be validated by the caller (see [`FrequencySet`]); an empty
/// frequency list yields silence.
///
/// # Example
/// ```
/// use wavdump::synth::synthesize;
///
/// let samples = synthesize(&[440], 1, 44100);
/// assert_eq!(samples.len(), 44100);
/// assert_eq!(samples[0], 0);
/// ```
pub fn synthesize(frequencies: &[u32], duration_seconds: u32, sample_rate: u32) -> Vec<i16> {
    let scale = harmonic_scale(frequencies.len());

    debug!(
        harmonics = frequencies.len(),
        scale, duration_seconds, sample_rate, "synthesizing"
    );

    // Phase restarts every second, so each second is the same block of samples
    let second: Vec<i16> = (0..sample_rate)
        .map(|j| sample_at(frequencies, scale as f64, j, sample_rate))
        .collect();

    second.repeat(duration_seconds as usize)
}
