use structopt::StructOpt;

mod batch;
mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::from_args();
    skin_utils::logging::init(cli.verbose);
    let code = match batch::convert(&cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("Error: {:?}", err);
            -2
        }
    };
    std::process::exit(code);
}
