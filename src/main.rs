//! wavdump - write a multi-harmonic sine signal to a 16-bit mono WAV file
//!
//! Usage:
//!   wavdump <output.wav> <duration-seconds> <freq1> [freq2 ...]
//!
//! Examples:
//!   wavdump test.wav 5 440 880
//!   wavdump a.wav 10 1000 2000 3000
//!
//! Every outcome, including argument and file errors, exits with status 0.
//! Errors are reported on stdout only; stderr carries `RUST_LOG` diagnostics.

use tracing::{debug, info};
use wavdump::tracing_init::init_tracing;
use wavdump::{run, Args, WavError};

fn main() {
    init_tracing();

    let args = match Args::from_env() {
        Ok(args) => args,
        Err(err) => {
            debug!(error = %err, "rejected arguments");
            println!("{}", err.message());
            return;
        }
    };

    info!(
        output = %args.output_path.display(),
        duration_seconds = args.duration_seconds,
        frequencies = ?args.frequencies.as_slice(),
        "generating signal"
    );

    if let Err(err) = run(&args) {
        debug!(error = %err, "failed to write wav file");
        match &err {
            WavError::Create { path, source } => {
                println!("Could not open file '{}'!", path.display());
                println!("Reason : {}", source);
            }
            WavError::Write { source } => {
                println!("Could not write file '{}'!", args.output_path.display());
                println!("Reason : {}", source);
            }
            WavError::TooLarge { .. } => println!("{}!", err),
        }
        println!("Aborting program!");
    }
}
