pub mod invocation;
pub mod run;

pub use self::invocation::{validate, InvocationStatus, ParsedArguments, HELP_TEXT};
pub use self::run::{run, RUNTIME_FAILURE};
