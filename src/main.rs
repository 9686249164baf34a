//! depline - dependency order resolver

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = depline::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
