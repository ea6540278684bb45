//! Command-line argument handling.

use std::path::PathBuf;

/// One-line usage summary, printed on argument errors and on `-h`/`--help`.
pub const USAGE: &str = "usage: greyscale input_file output_file";

/// What a command line asks the program to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    /// Convert `input` and write the result to `output`.
    Convert { input: PathBuf, output: PathBuf },
    /// Print the usage message and exit successfully.
    Help,
}

/// Argument list matching neither the two-positional form nor a lone
/// `-h`/`--help`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadUsage;

/// Interprets the argument list (program name excluded).
///
/// Exactly two positional arguments select a conversion; a lone `-h` or
/// `--help` selects [`Invocation::Help`]; every other shape is a usage
/// error. There is no flag parsing beyond the literal help match, so `-h`
/// alongside a second argument is taken as an input path.
pub fn parse_args(args: &[String]) -> Result<Invocation, BadUsage> {
    match args {
        [input, output] => Ok(Invocation::Convert {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
        }),
        [lone] if lone == "-h" || lone == "--help" => Ok(Invocation::Help),
        _ => Err(BadUsage),
    }
}
