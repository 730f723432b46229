//! Output and logging configuration.
//!
//! `Config` derives `clap::Args` so a binary can flatten it into its own
//! argument parser; library callers use [`Config::default`].

use clap::{Args, ValueEnum};
use termcolor::ColorChoice;

/// Log filter used when neither `--log` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// When to color the diagnostic stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn color_choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto if atty::is(atty::Stream::Stdout) => ColorChoice::Auto,
            ColorMode::Auto | ColorMode::Never => ColorChoice::Never,
            ColorMode::Always => ColorChoice::Always,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct Config {
    /// Color the diagnostic stream.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// `tracing` filter directive for harness logs on stderr (`RUST_LOG` wins).
    #[arg(long = "log", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
