use clap::Parser;
use log::info;
use std::fmt::{Display, Formatter};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// All user settable options that control a run. Filled in from the
/// command line by `options_init`, but buildable by hand, so nothing else
/// in the program needs to know the parser exists.
#[derive(Debug)]
pub struct Options {
    /// Name of the text file to read
    pub file: String,
    /// Name of the report file to write
    pub output: String,
    /// Silently overwrite an existing report file
    pub force_overwrite: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl Options {
    pub fn new() -> Self {
        Self {
            file: String::new(),
            output: "output.txt".to_string(),
            force_overwrite: false,
            verbose: Verbosity::Warnings,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

/// Command line interpretation - uses the external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Builds a Huffman code for a text file and reports it",
    long_about = "
    Reads a UTF-8 text file, derives a Huffman code from its symbol
    frequencies, then writes a report holding the code of every symbol, the
    text encoded as printable bits, and the text decoded back from those
    bits. The decode is run from the encoded bits alone, so the report also
    serves as a self check of the coder."
)]
struct Args {
    /// Name of the text file to process
    #[clap()]
    file: String,

    /// Name of the report file to write
    #[clap(short = 'o', long = "output", default_value = "output.txt")]
    output: String,

    /// Overwrite the report file if it already exists
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Sets verbosity. -v shows progress, -vv stage detail, -vvv is chatty
    #[clap(short = 'v', parse(from_occurrences))]
    verbose: usize,

    /// Suppress all messages
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Reads the command line into an `Options` and sets the log level to
/// match.
pub fn options_init() -> Options {
    from_args(Args::parse())
}

fn from_args(args: Args) -> Options {
    let verbose = if args.quiet {
        Verbosity::Quiet
    } else {
        match args.verbose {
            0 => Verbosity::Warnings,
            1 => Verbosity::Info,
            2 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    };

    // Set the log level
    match verbose {
        Verbosity::Quiet => log::set_max_level(log::LevelFilter::Off),
        Verbosity::Warnings => log::set_max_level(log::LevelFilter::Warn),
        Verbosity::Info => log::set_max_level(log::LevelFilter::Info),
        Verbosity::Debug => log::set_max_level(log::LevelFilter::Debug),
        Verbosity::Trace => log::set_max_level(log::LevelFilter::Trace),
    };

    let mut options = Options::new();
    options.file = args.file;
    options.output = args.output;
    options.force_overwrite = args.force;
    options.verbose = verbose;

    info!("Verbosity set to {}", options.verbose);
    info!("Reading text from {}", options.file);
    info!("Writing the report to {}", options.output);
    if options.force_overwrite {
        info!("Forcing file overwriting")
    };
    options
}
