use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const HELP_TEXT: &str = "\
fix-skin: adjust DDNet skins so that they will no longer error in the client
Usage:
    fix-skin [-h|--help] [-v|--verbose] file:input file:output

Options:
    -h, --help       Print this text and exit
    -v, --verbose    Report each processing step

Return codes:
   -*: Incorrect invocation
    0: Success
    1: Process error
";

/// Outcome of checking the command line before any image is touched.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InvocationStatus {
    Ok = 0,
    TooFewArgs = 1,
    TooManyArgs = 2,
    InputMissing = 3,
    OutputDirMissing = 4,
    OutputExists = 5,
    UnknownArgument = 6,
    HelpRequested = 7,
}

impl InvocationStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            InvocationStatus::Ok | InvocationStatus::HelpRequested => 0,
            status => -(status as i32),
        }
    }

    pub fn message(self) -> Option<&'static str> {
        use self::InvocationStatus::*;
        match self {
            Ok | HelpRequested => None,
            TooFewArgs => Some("Not enough arguments."),
            TooManyArgs => Some("Too many arguments."),
            InputMissing => Some("Input file is inaccessible or does not exist."),
            OutputDirMissing => {
                Some("Output file directory is unreadable or does not exist.")
            }
            OutputExists => Some("Output file already exists."),
            UnknownArgument => {
                Some("Unrecognized argument in place of a required file.")
            }
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ParsedArguments {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub verbose: bool,
    pub help_requested: bool,
    /// Dash-prefixed tokens other than the help and verbose flags.
    pub unknown_tokens: Vec<String>,
    pub positionals: Vec<OsString>,
}

impl ParsedArguments {
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut parsed = ParsedArguments::default();
        for arg in args {
            let arg: OsString = arg.into();
            let text = arg.to_string_lossy().into_owned();
            if text == "-h" || text == "--help" {
                parsed.help_requested = true;
            } else if text == "-v" || text == "--verbose" {
                parsed.verbose = true;
            } else if text.starts_with('-') {
                parsed.unknown_tokens.push(text);
            } else {
                parsed.positionals.push(arg);
            }
        }
        if parsed.positionals.len() == 2 {
            parsed.input = Some(PathBuf::from(&parsed.positionals[0]));
            parsed.output = Some(PathBuf::from(&parsed.positionals[1]));
        }
        parsed
    }

    /// True when an unknown flag occupies a slot the input or output path
    /// was expected in.
    pub fn unknown_displaces_path(&self) -> bool {
        !self.unknown_tokens.is_empty()
            && self.positionals.len() < 2
            && self.positionals.len() + self.unknown_tokens.len() >= 2
    }
}

/// Classify `args` (without the program name) and check them against the
/// filesystem. Nothing is created or modified.
pub fn validate<I, S>(args: I) -> (InvocationStatus, ParsedArguments)
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let parsed = ParsedArguments::parse(args);
    let status = check(&parsed);
    (status, parsed)
}

fn check(parsed: &ParsedArguments) -> InvocationStatus {
    if parsed.help_requested {
        return InvocationStatus::HelpRequested;
    }
    if parsed.unknown_displaces_path() {
        return InvocationStatus::UnknownArgument;
    }
    let (input, output) = match (&parsed.input, &parsed.output) {
        (Some(input), Some(output)) => (input, output),
        _ if parsed.positionals.len() < 2 => return InvocationStatus::TooFewArgs,
        _ => return InvocationStatus::TooManyArgs,
    };
    if !input.exists() {
        return InvocationStatus::InputMissing;
    }
    if !output_dir(output).is_dir() {
        return InvocationStatus::OutputDirMissing;
    }
    if output.exists() {
        return InvocationStatus::OutputExists;
    }
    InvocationStatus::Ok
}

/// A bare file name lives in the working directory.
fn output_dir(output: &Path) -> &Path {
    match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}
