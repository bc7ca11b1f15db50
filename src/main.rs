//! product-catalog CLI entry point
//!
//! All logic is delegated to the CLI module; errors are printed to stderr
//! and end the process with a non-zero exit code.

use product_catalog::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
