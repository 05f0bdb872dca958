use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use golf::flags::convert_flags;

#[derive(Parser)]
#[command(name = "flagconv")]
#[command(version, about = "Compiles a sprite flag list into a Rust table", long_about = None)]
struct Cli {
    /// Comma separated 8 character binary strings, one per sprite
    input: PathBuf,

    /// Rust source file to write
    output: PathBuf,

    /// Name of the generated static
    #[arg(long, default_value = "SPRITE_FLAGS")]
    name: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match convert_flags(&cli.input, &cli.output, &cli.name) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}: {}", cli.input.display(), e);
            eprintln!("flagconv: {}", e);
            ExitCode::FAILURE
        }
    }
}
