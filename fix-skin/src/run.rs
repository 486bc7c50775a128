use tracing::{error, warn};

use skin_utils::{normalize_skin, NormalizeOptions};

use super::invocation::{InvocationStatus, ParsedArguments, HELP_TEXT};

/// Exit code for a failure raised while decoding, resizing or encoding.
pub const RUNTIME_FAILURE: i32 = 1;

/// Act on a validated command line and return the process exit code.
pub fn run(status: InvocationStatus, args: &ParsedArguments) -> i32 {
    if status != InvocationStatus::UnknownArgument {
        for token in &args.unknown_tokens {
            warn!("Ignoring unknown argument '{}'", token);
        }
    }

    let (input, output) = match (status, &args.input, &args.output) {
        (InvocationStatus::Ok, Some(input), Some(output)) => (input, output),
        (InvocationStatus::HelpRequested, ..) => {
            println!("{}", HELP_TEXT);
            return status.exit_code();
        }
        _ => {
            if let Some(msg) = status.message() {
                eprintln!("{}", msg);
            }
            eprintln!("{}", HELP_TEXT);
            return status.exit_code();
        }
    };

    match normalize_skin(input, output, &NormalizeOptions::default()) {
        Ok(_) => 0,
        Err(err) => {
            error!("Failed to convert skin: {}", err);
            // runtime failures carry the usage text like invocation errors
            eprintln!("{}", HELP_TEXT);
            RUNTIME_FAILURE
        }
    }
}
