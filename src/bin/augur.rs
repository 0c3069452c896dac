//! Augur CLI binary.

use augur::cli::{args::*, commands::*};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments using clap
    let args = AugurArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
