// Runs one of the canned utest modules; see `utest-demo --help`.

use std::process::ExitCode;

fn main() -> ExitCode {
    utest::cli::run()
}
