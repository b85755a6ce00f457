//! Binary entry point: the interactive simulator on stdin/stdout.
//!
//! Set `RUST_LOG=debug` to watch dispatch decisions.

use std::io;
use std::process::ExitCode;

use priosim::cli;

fn main() -> ExitCode {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    match cli::run(&mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
