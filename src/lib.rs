//! utest: a small, sequential unit-test harness.
//!
//! A test program is one *module*: a named run made of *cases*, each a label
//! for the *checks* that follow it. Every check is counted; a failed check is
//! reported with its source location and either recorded (`check_*!`) or
//! turned into an immediate process exit (`require_*!`). When the module
//! ends, the process succeeds only if no check failed.
//!
//! ```rust,no_run
//! use std::process::ExitCode;
//!
//! fn main() -> ExitCode {
//!     utest::module("arithmetic", |m| {
//!         m.case("addition");
//!         utest::check_equal!(m, 2 + 2, 4);
//!         utest::check_close!(m, 0.1 + 0.2, 0.3, 1e-12);
//!
//!         m.case("parsing");
//!         utest::require!(m, "42".parse::<i32>().is_ok());
//!         utest::check_throws!(m, "x".parse::<i32>(), std::num::ParseIntError);
//!         Ok::<(), std::io::Error>(())
//!     })
//! }
//! ```
//!
//! # Layout
//!
//! - [`outcome`]: three-way classification of how a unit of work ended
//! - [`check`]: check families and their [`Severity`]
//! - [`tally`]: run counters and the final [`Verdict`]
//! - [`suite`]: the [`Suite`] context that ties them together
//! - [`report`]: the colored diagnostic stream
//! - [`config`], [`logging`], [`error`]: settings, `tracing` setup, harness errors

pub mod check;
pub mod cli;
pub mod coefficients;
pub mod config;
pub mod error;
pub mod logging;
mod macros;
pub mod operand;
pub mod outcome;
pub mod report;
pub mod suite;
pub mod tally;

use std::fmt::Display;
use std::process::ExitCode;

pub use crate::check::{Relation, Severity};
pub use crate::coefficients::Coefficients;
pub use crate::config::{ColorMode, Config};
pub use crate::error::UtestError;
pub use crate::operand::Operand;
pub use crate::outcome::{Attempt, Outcome};
pub use crate::report::SourceLocation;
pub use crate::suite::Suite;
pub use crate::tally::{Tally, Verdict};

/// Runs `body` as a module named `name` on stdout and returns the process
/// exit code.
pub fn module<F, E>(name: &str, body: F) -> ExitCode
where
    F: FnOnce(&mut Suite) -> Result<(), E>,
    E: Display,
{
    module_with(name, &Config::default(), body)
}

/// [`module`] with explicit settings. Installs the `tracing` subscriber
/// described by `config` unless one is already set.
pub fn module_with<F, E>(name: &str, config: &Config, body: F) -> ExitCode
where
    F: FnOnce(&mut Suite) -> Result<(), E>,
    E: Display,
{
    logging::init(config);
    Suite::start_with(name, config).run(body).exit_code()
}
