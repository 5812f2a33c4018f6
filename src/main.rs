//! zbas CLI — annotated text to numbered BASIC.

use clap::Parser;

fn main() {
    let cli = zbas::cli::Cli::parse();
    let config = cli.into_config();
    if let Err(e) = zbas::cli::run(&config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
