use fix_skin::{run, validate};

fn main() {
    let (status, args) = validate(std::env::args_os().skip(1));
    skin_utils::logging::init(args.verbose);
    std::process::exit(run(status, &args));
}
