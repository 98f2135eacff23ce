//! bumpver CLI entry point

use bumpver::cli::args::Cli;
use clap::Parser;
use std::process;

fn main() {
    // Wrong argument count exits here with a usage line and status 2
    let cli = Cli::parse();
    bumpver::logging::init(cli.verbose);

    let exit_code = bumpver::cli::run_bump(&cli.options(), cli.color);

    process::exit(exit_code);
}
