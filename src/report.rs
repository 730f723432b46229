//! The formatted diagnostic stream.
//!
//! Every line the harness prints goes through a [`Reporter`], which owns a
//! `termcolor::WriteColor` sink. Write failures are logged and dropped: the
//! counters, not the stream, decide the verdict.

use std::fmt;
use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::error::UtestError;
use crate::tally::{Tally, Verdict};

/// Where a check was written in the caller's source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
}

impl SourceLocation {
    /// Location of the outermost `#[track_caller]` call.
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

pub struct Reporter<W> {
    out: W,
}

impl<W: WriteColor> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn case_started(&mut self, module: &str, case: &str) {
        let text = format!("running test case [{module}/{case}] ...");
        self.line(ColorSpec::new().set_bold(true), &text);
    }

    pub fn failure(&mut self, location: &SourceLocation, module: &str, case: &str, message: &str) {
        let text = format!("{location}: [{module}/{case}]: {message}");
        self.line(ColorSpec::new().set_fg(Some(Color::Red)), &text);
    }

    pub fn summary(&mut self, tally: &Tally) {
        let color = match tally.verdict() {
            Verdict::Success => Color::Green,
            Verdict::Failure => Color::Red,
        };
        self.line(ColorSpec::new().set_fg(Some(color)).set_bold(true), &tally.summary());
    }

    /// Reports a failure that escaped the module body.
    pub fn uncaught(&mut self, description: Option<&str>) {
        let text = match description {
            Some(description) => format!(" failed with uncaught exception <{description}>!"),
            None => " failed with uncaught unknown exception!".to_string(),
        };
        self.line(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true), &text);
    }

    pub fn flush(&mut self) {
        if let Err(err) = self.out.flush() {
            log_write_failure(err);
        }
    }

    fn line(&mut self, spec: &ColorSpec, text: &str) {
        if let Err(err) = self.try_line(spec, text) {
            log_write_failure(err);
        }
    }

    fn try_line(&mut self, spec: &ColorSpec, text: &str) -> io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{text}")?;
        self.out.reset()?;
        writeln!(self.out)
    }
}

fn log_write_failure(err: io::Error) {
    let err = UtestError::from(err);
    tracing::warn!(error = ?err, "diagnostic line dropped");
}
