use clap::Parser;
use photo_renamer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments; clap handles usage errors itself with a
    // non-zero exit status
    let args = Args::parse();

    match commands::run(args) {
        Ok(_stats) => {
            // Success - output has already been written to stdout
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
