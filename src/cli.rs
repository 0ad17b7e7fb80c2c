//! Command-line parsing for `wavdump`
//!
//! ```text
//! wavdump <output-path> <duration-seconds> <freq1> [freq2 ...]
//! ```

use std::path::PathBuf;

use snafu::{OptionExt, Snafu};

use crate::config::{MAX_FREQ, MIN_FREQ};
use crate::synth::{FrequencyError, FrequencySet};

/// Program name, argument count and at least one frequency
const MIN_ARGS: usize = 4;

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(visibility(pub))]
pub enum ArgsError {
    /// Too few arguments
    #[snafu(display("incomplete arguments"))]
    MissingArguments,

    /// `-h` or `--help`
    #[snafu(display("help requested"))]
    HelpRequested,

    /// Duration is not a positive integer
    #[snafu(display("invalid duration '{literal}'"))]
    InvalidDuration { literal: String },

    /// Frequency is not an integer in [MIN_FREQ, MAX_FREQ]
    #[snafu(display("invalid frequency '{literal}'"))]
    FrequencyOutOfRange { literal: String },
}

impl ArgsError {
    /// Text shown to the user on stdout
    pub fn message(&self) -> String {
        match self {
            ArgsError::MissingArguments => {
                format!("Incomplete arguments to wavdump!\n\n{}", usage())
            }
            ArgsError::HelpRequested => usage(),
            ArgsError::InvalidDuration { literal } => format!(
                "Invalid arguments to wavdump!\n\n\
                 Argument 'output file duration' should be a positive, non-null number!\n\
                 Its current value is '{literal}'!\n"
            ),
            ArgsError::FrequencyOutOfRange { literal } => format!(
                "Invalid arguments to wavdump!\n\n\
                 Argument 'list of frequencies' contains a frequency outside the range [{MIN_FREQ},{MAX_FREQ}] Hz!\n\
                 Its current value is '{literal}'!\n"
            ),
        }
    }
}

/// Synopsis, syntax and examples
pub fn usage() -> String {
    format!(
        "Synopsis : wavdump generates a .wav file by combining several harmonics into a complex signal.\n\n\
         Syntax   : wavdump\n\
         \t   [output file name]\n\
         \t   [output file duration (greater than 0)]\n\
         \t   [list of frequencies (values in the range [{MIN_FREQ} - {MAX_FREQ}])]\n\n\
         Usage    : wavdump test.wav 5 440 880\n\
         Usage    : wavdump a.wav 10 1000 2000 3000\n"
    )
}

/// Validated command-line arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub output_path: PathBuf,
    pub duration_seconds: u32,
    pub frequencies: FrequencySet,
}

impl Args {
    /// Parse the process arguments
    pub fn from_env() -> Result<Self, ArgsError> {
        Self::parse(std::env::args())
    }

    /// Parse arguments, the first being the program name
    ///
    /// Validation stops at the first bad value: duration before
    /// frequencies, and frequencies in the order given.
    pub fn parse<I, S>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        // Only a lone flag asks for help; with more arguments it is a file name
        if args.len() == 2 && matches!(args[1].as_str(), "-h" | "--help") {
            return HelpRequestedSnafu.fail();
        }
        if args.len() < MIN_ARGS {
            return MissingArgumentsSnafu.fail();
        }

        let output_path = PathBuf::from(&args[1]);

        let duration_literal = &args[2];
        let duration_seconds = duration_literal
            .parse::<u32>()
            .ok()
            .filter(|&d| d > 0)
            .context(InvalidDurationSnafu {
                literal: duration_literal.as_str(),
            })?;

        // Unparseable literals become 0, which is out of range
        let literals = &args[3..];
        let values = literals
            .iter()
            .map(|literal| literal.parse::<u32>().unwrap_or(0))
            .collect();
        let frequencies = FrequencySet::new(values).map_err(|err| match err {
            FrequencyError::OutOfRange { index, .. } => ArgsError::FrequencyOutOfRange {
                literal: literals[index].clone(),
            },
            FrequencyError::Empty => ArgsError::MissingArguments,
        })?;

        Ok(Args {
            output_path,
            duration_seconds,
            frequencies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        Args::parse(args.iter().copied())
    }

    #[test]
    fn test_parse_valid() {
        let args = parse(&["wavdump", "out.wav", "2", "440", "880"]).unwrap();
        assert_eq!(args.output_path, PathBuf::from("out.wav"));
        assert_eq!(args.duration_seconds, 2);
        assert_eq!(args.frequencies.as_slice(), &[440, 880]);
    }

    #[test]
    fn test_missing_arguments() {
        assert_eq!(parse(&["wavdump"]), Err(ArgsError::MissingArguments));
        assert_eq!(parse(&["wavdump", "out.wav"]), Err(ArgsError::MissingArguments));
        assert_eq!(parse(&["wavdump", "out.wav", "1"]), Err(ArgsError::MissingArguments));
        assert_eq!(parse(&[]), Err(ArgsError::MissingArguments));
    }

    #[test]
    fn test_help() {
        assert_eq!(parse(&["wavdump", "--help"]), Err(ArgsError::HelpRequested));
        assert_eq!(parse(&["wavdump", "-h"]), Err(ArgsError::HelpRequested));
    }

    #[test]
    fn test_help_flag_is_a_path_with_more_arguments() {
        let args = parse(&["wavdump", "-h", "1", "440"]).unwrap();
        assert_eq!(args.output_path, PathBuf::from("-h"));
        assert_eq!(args.frequencies.as_slice(), &[440]);

        assert_eq!(parse(&["wavdump", "--help", "1"]), Err(ArgsError::MissingArguments));
    }

    #[test]
    fn test_invalid_duration() {
        for bad in ["0", "-1", "abc", "1.5", ""] {
            assert_eq!(
                parse(&["wavdump", "out.wav", bad, "440"]),
                Err(ArgsError::InvalidDuration { literal: bad.to_string() }),
                "duration {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_duration_checked_before_frequencies() {
        assert_eq!(
            parse(&["wavdump", "out.wav", "0", "5"]),
            Err(ArgsError::InvalidDuration { literal: "0".to_string() })
        );
    }

    #[test]
    fn test_frequency_bounds() {
        assert!(parse(&["wavdump", "out.wav", "1", "20"]).is_ok());
        assert!(parse(&["wavdump", "out.wav", "1", "22050"]).is_ok());
        assert_eq!(
            parse(&["wavdump", "out.wav", "1", "19"]),
            Err(ArgsError::FrequencyOutOfRange { literal: "19".to_string() })
        );
        assert_eq!(
            parse(&["wavdump", "out.wav", "1", "22051"]),
            Err(ArgsError::FrequencyOutOfRange { literal: "22051".to_string() })
        );
    }

    #[test]
    fn test_first_bad_frequency_reported() {
        assert_eq!(
            parse(&["wavdump", "out.wav", "1", "440", "19", "abc", "30000"]),
            Err(ArgsError::FrequencyOutOfRange { literal: "19".to_string() })
        );
        assert_eq!(
            parse(&["wavdump", "out.wav", "1", "x440", "19"]),
            Err(ArgsError::FrequencyOutOfRange { literal: "x440".to_string() })
        );
    }

    #[test]
    fn test_messages_cite_literal() {
        let err = parse(&["wavdump", "out.wav", "1", "22051"]).unwrap_err();
        let message = err.message();
        assert!(message.starts_with("Invalid arguments to wavdump!"));
        assert!(message.contains("[20,22050] Hz"));
        assert!(message.contains("Its current value is '22051'!"));

        let err = parse(&["wavdump", "out.wav", "zero", "440"]).unwrap_err();
        assert!(err.message().contains("Its current value is 'zero'!"));
    }

    #[test]
    fn test_usage_message() {
        let message = ArgsError::MissingArguments.message();
        assert!(message.starts_with("Incomplete arguments to wavdump!"));
        assert!(message.contains("wavdump test.wav 5 440 880"));
        assert!(message.contains("wavdump a.wav 10 1000 2000 3000"));
    }
}
