//! WAV File Generation
//!
//! This module serializes 16-bit PCM samples into a canonical RIFF/WAVE file.
//!
//! **Layout** (little-endian, no padding, 44 header bytes):
//! - RIFF chunk (12 bytes): `"RIFF"`, file size - 8, `"WAVE"`
//! - fmt chunk (24 bytes): `"fmt "`, 16, format 1 (PCM), channels,
//!   sample rate, byte rate, block align, bits per sample
//! - data chunk header (8 bytes): `"data"`, sample byte length
//!
//! followed by the raw samples. Each chunk is written field by field with
//! `to_le_bytes`, so the in-memory struct layout never reaches the file.
//!
//! **Usage**:
//! - `write_wav_file` creates (or truncates) a file on disk
//! - `write_wav` targets any `std::io::Write`
//! - `generate_wav_bytes` returns the complete file as a byte vector

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use snafu::{ensure, ResultExt, Snafu};
use tracing::{debug, info};

use crate::config::SynthConfig;

/// Size of the RIFF master chunk
pub const RIFF_CHUNK_LEN: usize = 12;
/// Size of the PCM fmt chunk including its tag and size field
pub const FORMAT_CHUNK_LEN: usize = 24;
/// Size of the data chunk tag and size field
pub const DATA_CHUNK_HEADER_LEN: usize = 8;
/// Total header size preceding the sample data
pub const HEADER_LEN: usize = RIFF_CHUNK_LEN + FORMAT_CHUNK_LEN + DATA_CHUNK_HEADER_LEN;

/// fmt payload size for linear PCM
const PCM_FORMAT_LEN: u32 = 16;
/// Audio format code for linear PCM
const PCM_FORMAT_CODE: u16 = 1;
/// Stored size of one sample (always i16)
const SAMPLE_LEN: u64 = 2;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum WavError {
    /// Destination could not be opened for writing
    #[snafu(display("Could not open file '{}': {}", path.display(), source))]
    Create { path: PathBuf, source: io::Error },

    /// Writing the header or samples failed
    #[snafu(display("Failed to write WAV data: {}", source))]
    Write { source: io::Error },

    /// Sample data does not fit the 32-bit RIFF size fields
    #[snafu(display("{} bytes of sample data exceed the WAV size limit", bytes))]
    TooLarge { bytes: u64 },
}

/// RIFF master chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiffChunk {
    /// Total file size minus the 8 bytes of tag and size field
    pub chunk_size: u32,
}

impl RiffChunk {
    pub fn to_bytes(&self) -> [u8; RIFF_CHUNK_LEN] {
        let mut bytes = [0u8; RIFF_CHUNK_LEN];
        bytes[0..4].copy_from_slice(b"RIFF");
        bytes[4..8].copy_from_slice(&self.chunk_size.to_le_bytes());
        bytes[8..12].copy_from_slice(b"WAVE");
        bytes
    }
}

/// PCM format description chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatChunk {
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

impl FormatChunk {
    pub fn new(config: &SynthConfig) -> Self {
        Self {
            channels: config.channels,
            sample_rate: config.sample_rate,
            byte_rate: config.byte_rate(),
            block_align: config.block_align(),
            bits_per_sample: config.bits_per_sample,
        }
    }

    pub fn to_bytes(&self) -> [u8; FORMAT_CHUNK_LEN] {
        let mut bytes = [0u8; FORMAT_CHUNK_LEN];
        bytes[0..4].copy_from_slice(b"fmt ");
        bytes[4..8].copy_from_slice(&PCM_FORMAT_LEN.to_le_bytes());
        bytes[8..10].copy_from_slice(&PCM_FORMAT_CODE.to_le_bytes());
        bytes[10..12].copy_from_slice(&self.channels.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.sample_rate.to_le_bytes());
        bytes[16..20].copy_from_slice(&self.byte_rate.to_le_bytes());
        bytes[20..22].copy_from_slice(&self.block_align.to_le_bytes());
        bytes[22..24].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        bytes
    }
}

/// Data chunk header; the samples follow it directly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataChunk {
    /// Sample byte length
    pub data_size: u32,
}

impl DataChunk {
    pub fn to_bytes(&self) -> [u8; DATA_CHUNK_HEADER_LEN] {
        let mut bytes = [0u8; DATA_CHUNK_HEADER_LEN];
        bytes[0..4].copy_from_slice(b"data");
        bytes[4..8].copy_from_slice(&self.data_size.to_le_bytes());
        bytes
    }
}

/// The three header chunks of a PCM WAV file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    pub riff: RiffChunk,
    pub format: FormatChunk,
    pub data: DataChunk,
}

impl WavHeader {
    /// Build the header for `num_samples` 16-bit samples
    pub fn new(config: &SynthConfig, num_samples: u64) -> Result<Self, WavError> {
        let bytes = num_samples.saturating_mul(SAMPLE_LEN);
        let overhead = (HEADER_LEN - 8) as u64;
        ensure!(bytes <= u32::MAX as u64 - overhead, TooLargeSnafu { bytes });

        let data_size = bytes as u32;
        Ok(Self {
            riff: RiffChunk {
                chunk_size: data_size + overhead as u32,
            },
            format: FormatChunk::new(config),
            data: DataChunk { data_size },
        })
    }

    /// Size of the complete file this header describes
    pub fn file_size(&self) -> u64 {
        self.riff.chunk_size as u64 + 8
    }

    /// Generate the 44-byte header: master, format, data chunks in order
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut header = [0u8; HEADER_LEN];
        let format_end = RIFF_CHUNK_LEN + FORMAT_CHUNK_LEN;
        header[..RIFF_CHUNK_LEN].copy_from_slice(&self.riff.to_bytes());
        header[RIFF_CHUNK_LEN..format_end].copy_from_slice(&self.format.to_bytes());
        header[format_end..].copy_from_slice(&self.data.to_bytes());
        header
    }
}

/// Write a complete WAV stream (header then samples) to `writer`
pub fn write_wav<W: Write>(
    writer: &mut W,
    samples: &[i16],
    config: &SynthConfig,
) -> Result<(), WavError> {
    let header = WavHeader::new(config, samples.len() as u64)?;
    write_with_header(writer, &header, samples)
}

fn write_with_header<W: Write>(
    writer: &mut W,
    header: &WavHeader,
    samples: &[i16],
) -> Result<(), WavError> {
    writer.write_all(&header.to_bytes()).context(WriteSnafu)?;
    for sample in samples {
        writer.write_all(&sample.to_le_bytes()).context(WriteSnafu)?;
    }
    writer.flush().context(WriteSnafu)
}

/// Generate WAV file bytes from 16-bit samples
///
/// # Example
/// ```
/// use wavdump::config::SynthConfig;
/// use wavdump::wav;
///
/// let samples = vec![0i16; 44100];
/// let bytes = wav::generate_wav_bytes(&samples, &SynthConfig::default())?;
/// assert_eq!(bytes.len(), 44 + 44100 * 2);
/// # Ok::<(), wav::WavError>(())
/// ```
pub fn generate_wav_bytes(samples: &[i16], config: &SynthConfig) -> Result<Vec<u8>, WavError> {
    let header = WavHeader::new(config, samples.len() as u64)?;
    let mut wav_data = Vec::with_capacity(header.file_size() as usize);
    write_with_header(&mut wav_data, &header, samples)?;
    Ok(wav_data)
}

/// Write a WAV file to disk, creating or truncating `path`
///
/// The header is computed before the file is touched, so an oversized
/// signal never leaves an empty file behind.
pub fn write_wav_file(
    path: impl AsRef<Path>,
    samples: &[i16],
    config: &SynthConfig,
) -> Result<(), WavError> {
    let path = path.as_ref();
    let header = WavHeader::new(config, samples.len() as u64)?;

    let file = File::create(path).context(CreateSnafu { path })?;
    let mut writer = BufWriter::new(file);

    debug!(path = %path.display(), bytes = header.file_size(), "writing wav");
    write_with_header(&mut writer, &header, samples)?;

    info!(
        path = %path.display(),
        samples = samples.len(),
        sample_rate = config.sample_rate,
        "wrote wav file"
    );
    Ok(())
}
