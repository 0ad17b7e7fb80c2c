//! Multi-harmonic sine synthesis to 16-bit mono PCM WAV files.

pub mod cli;
pub mod config;
pub mod synth;
pub mod tracing_init;
pub mod wav;

pub use cli::{Args, ArgsError};
pub use config::SynthConfig;
pub use synth::{synthesize, FrequencySet};
pub use wav::{write_wav_file, WavError, WavHeader};

/// Synthesize the requested signal and write it to `args.output_path`
pub fn run(args: &Args) -> Result<(), WavError> {
    let config = SynthConfig::default();

    // Reject signals too long for a WAV file before allocating them
    let num_samples = args.duration_seconds as u64 * config.sample_rate as u64;
    WavHeader::new(&config, num_samples)?;

    let samples = synthesize(args.frequencies.as_slice(), args.duration_seconds, config.sample_rate);
    write_wav_file(&args.output_path, &samples, &config)
}
