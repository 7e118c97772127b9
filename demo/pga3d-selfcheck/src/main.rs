//! pga3d self-check
//!
//! Runs every check and prints a summary.
//! Set `RUST_LOG=debug` to see the operands and results of each check.

use pga3d_selfcheck::*;

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        let level = if cfg!(debug_assertions) {
            "debug"
        } else {
            "info"
        };
        std::env::set_var("RUST_LOG", level);
    }

    env_logger::init(); // Log to stderr

    let summary = run_checks(CHECKS);

    println!("{} tests executed.", summary.executed);
    println!("{} tests passed.", summary.passed);
    println!("{} tests failed.", summary.failed);
}
