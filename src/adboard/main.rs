//! The binary is intentionally thin: the client lives in `cli/`, and this
//! file only invokes `cli::run()` and turns errors into an exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
