//! The `utest-demo` command line.
//!
//! Each subcommand runs a small canned module through the real harness, so
//! the exit status and stdout of a whole process can be observed from the
//! outside.

use std::convert::Infallible;
use std::num::ParseIntError;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use termcolor::WriteColor;

use crate::config::Config;
use crate::suite::Suite;

#[derive(Debug, Parser)]
#[command(
    name = "utest-demo",
    version,
    about = "Runs canned utest modules and exits with their verdict."
)]
pub struct DemoArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    pub scenario: Scenario,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Scenario {
    /// Three cases, ten checks, all passing.
    Pass,
    /// The `pass` module with two failing checks.
    Fail,
    /// A failing `require` check in the middle of a case.
    Critical,
    /// A module body that returns an error.
    Uncaught,
    /// A module body that panics outside any check.
    Panic,
    /// Scalar and element-wise approximate equality.
    Close,
    /// Element-wise comparison of operands with different lengths.
    Mismatch,
}

impl Scenario {
    pub fn module_name(self) -> &'static str {
        match self {
            Scenario::Pass | Scenario::Fail => "arithmetic",
            Scenario::Critical => "setup",
            Scenario::Uncaught => "loading",
            Scenario::Panic => "indexing",
            Scenario::Close | Scenario::Mismatch => "numerics",
        }
    }
}

/// Parses the process arguments and runs the selected scenario.
pub fn run() -> ExitCode {
    let args = DemoArgs::parse();
    run_scenario(args.scenario, &args.config)
}

pub fn run_scenario(scenario: Scenario, config: &Config) -> ExitCode {
    let name = scenario.module_name();
    tracing::info!(?scenario, "running demo module");
    match scenario {
        Scenario::Pass => crate::module_with(name, config, |m| arithmetic(m, false)),
        Scenario::Fail => crate::module_with(name, config, |m| arithmetic(m, true)),
        Scenario::Critical => crate::module_with(name, config, critical),
        Scenario::Uncaught => crate::module_with(name, config, uncaught),
        Scenario::Panic => crate::module_with(name, config, panicking),
        Scenario::Close => crate::module_with(name, config, numerics),
        Scenario::Mismatch => crate::module_with(name, config, mismatched),
    }
}

fn arithmetic<W: WriteColor>(m: &mut Suite<W>, failing: bool) -> Result<(), ParseIntError> {
    let expected_sum = if failing { 5 } else { 4 };
    let expected_float = if failing { 0.31 } else { 0.3 };

    m.case("addition");
    crate::check_equal!(m, 2 + 2, expected_sum);
    crate::check_equal!(m, [1, 2, 3].iter().sum::<i32>(), 6);
    crate::check_not_equal!(m, 1, 2);
    crate::check_less!(m, -1, 1);

    m.case("parsing");
    crate::check_nothrow!(m, "42".parse::<i32>());
    crate::check_throws!(m, "4x".parse::<i32>(), ParseIntError);
    crate::check_equal!(m, "17".parse::<i32>()?, 17);

    m.case("floating");
    crate::check_close!(m, 0.1 + 0.2, expected_float, 1e-12);
    crate::check_greater_equal!(m, 2.5, 2.5);
    crate::check!(m, !f64::NAN.is_finite());
    Ok(())
}

fn critical(m: &mut Suite) -> Result<(), Infallible> {
    m.case("configuration");
    crate::check!(m, !"config".is_empty());
    crate::require_equal!(m, "config".len(), 0);
    crate::check!(m, "after critical".is_empty());
    Ok(())
}

fn uncaught(m: &mut Suite) -> Result<(), ParseIntError> {
    m.case("ports");
    crate::check!(m, true);
    let port: u16 = "eighty".parse()?;
    crate::check_equal!(m, port, 80);
    Ok(())
}

fn panicking(m: &mut Suite) -> Result<(), Infallible> {
    m.case("empty");
    let values: Vec<u8> = Vec::new();
    crate::check_equal!(m, values[0], 0);
    Ok(())
}

fn numerics(m: &mut Suite) -> Result<(), Infallible> {
    m.case("scalars");
    crate::check_close!(m, 1.0, 1.0 + 1e-10, 1e-6);
    crate::require_close!(m, 1.0e6, 1.0e6 + 1e-3, 1e-6);

    m.case("vectors");
    let left = vec![0.5, 1.5, -2.0];
    crate::check_all_close!(m, left, [0.5, 1.5 + 1e-9, -2.0], 1e-6);
    crate::require_all_close!(m, left, left, 1e-12);
    Ok(())
}

fn mismatched(m: &mut Suite) -> Result<(), Infallible> {
    m.case("lengths");
    crate::check_all_close!(m, vec![1.0, 2.0], [1.0], 1e-6);
    crate::check!(m, "after mismatch".is_empty());
    Ok(())
}
