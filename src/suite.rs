//! The run context: one `Suite` per module.
//!
//! A `Suite` is the module. Creating it starts the module, [`Suite::case`]
//! relabels the current case, every check mutates its [`Tally`], and
//! [`Suite::finish`] consumes it to produce the [`Verdict`]. A failed
//! `Require` check exits the process from inside a running module.

use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};
use std::process;

use termcolor::{StandardStream, WriteColor};

use crate::check::Severity;
use crate::config::Config;
use crate::error::UtestError;
use crate::outcome::panic_message;
use crate::report::{Reporter, SourceLocation};
use crate::tally::{Tally, Verdict};

pub struct Suite<W = StandardStream> {
    module: String,
    case: String,
    tally: Tally,
    reporter: Reporter<W>,
}

impl Suite<StandardStream> {
    /// Starts a module that reports to stdout with default settings.
    pub fn start(name: impl Into<String>) -> Self {
        Self::start_with(name, &Config::default())
    }

    pub fn start_with(name: impl Into<String>, config: &Config) -> Self {
        let stdout = StandardStream::stdout(config.color.color_choice());
        Self::with_sink(name, stdout)
    }
}

impl<W: WriteColor> Suite<W> {
    /// Starts a module that reports to `sink`.
    pub fn with_sink(name: impl Into<String>, sink: W) -> Self {
        let module = name.into();
        tracing::debug!(module = %module, "module started");
        Self {
            module,
            case: String::new(),
            tally: Tally::new(),
            reporter: Reporter::new(sink),
        }
    }

    pub fn module_name(&self) -> &str {
        &self.module
    }

    /// Label of the most recently started case; empty before the first one.
    pub fn case_name(&self) -> &str {
        &self.case
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn sink(&self) -> &W {
        self.reporter.get_ref()
    }

    /// Starts a new case, superseding the previous one.
    pub fn case(&mut self, name: impl Into<String>) {
        self.case = name.into();
        self.tally.start_case();
        tracing::debug!(
            module = %self.module,
            case = %self.case,
            sequence = self.tally.cases_started(),
            "case started"
        );
        self.reporter.case_started(&self.module, &self.case);
    }

    /// Ends the module: prints the summary and returns the verdict.
    pub fn finish(self) -> Verdict {
        self.finish_with_sink().0
    }

    pub fn finish_with_sink(mut self) -> (Verdict, W) {
        let verdict = self.tally.verdict();
        tracing::debug!(
            module = %self.module,
            cases = self.tally.cases_started(),
            checks = self.tally.checks_evaluated(),
            failures = self.tally.checks_failed(),
            %verdict,
            "module finished"
        );
        self.reporter.summary(&self.tally);
        self.reporter.flush();
        (verdict, self.reporter.into_inner())
    }

    /// Runs `body` as the whole module, then ends it.
    ///
    /// An `Err` returned by the body, or a panic escaping it, is reported as an
    /// uncaught failure in place of the summary and forces a failing verdict.
    pub fn run<F, E>(self, body: F) -> Verdict
    where
        F: FnOnce(&mut Self) -> Result<(), E>,
        E: Display,
    {
        self.run_with_sink(body).0
    }

    pub fn run_with_sink<F, E>(mut self, body: F) -> (Verdict, W)
    where
        F: FnOnce(&mut Self) -> Result<(), E>,
        E: Display,
    {
        let escaped = match panic::catch_unwind(AssertUnwindSafe(|| body(&mut self))) {
            Ok(Ok(())) => None,
            Ok(Err(err)) => Some(UtestError::Uncaught {
                module: self.module.clone(),
                description: err.to_string(),
            }),
            Err(payload) => Some(UtestError::Panic {
                module: self.module.clone(),
                payload: panic_message(payload.as_ref()),
            }),
        };

        let Some(err) = escaped else {
            return self.finish_with_sink();
        };
        tracing::error!(module = %self.module, error = %err, "module body did not complete");
        self.reporter.uncaught(err.description());
        self.reporter.flush();
        (Verdict::Failure, self.reporter.into_inner())
    }

    /// Counts one check and reports it when it failed. A failed `Require`
    /// check does not return.
    #[track_caller]
    pub(crate) fn evaluate<M>(&mut self, severity: Severity, passed: bool, message: M) -> bool
    where
        M: FnOnce() -> String,
    {
        self.tally.record(passed);
        if passed {
            return true;
        }

        let location = SourceLocation::caller();
        let message = message();
        tracing::debug!(
            module = %self.module,
            case = %self.case,
            %location,
            %severity,
            "{message}"
        );
        self.reporter
            .failure(&location, &self.module, &self.case, &message);

        if severity.is_critical() {
            self.abort(&location);
        }
        false
    }

    fn abort(&mut self, location: &SourceLocation) -> ! {
        tracing::error!(
            module = %self.module,
            case = %self.case,
            %location,
            "required check failed, aborting module"
        );
        self.reporter.flush();
        process::exit(1)
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::io;
    use std::sync::{Arc, Mutex};

    use termcolor::Buffer;

    use super::*;

    fn suite(name: &str) -> Suite<Buffer> {
        Suite::with_sink(name, Buffer::no_color())
    }

    fn output(sink: &Buffer) -> String {
        String::from_utf8_lossy(sink.as_slice()).into_owned()
    }

    #[test]
    fn cases_relabel_and_count() {
        let mut suite = suite("module");
        assert_eq!(suite.case_name(), "");

        suite.case("first");
        suite.case("second");
        assert_eq!(suite.module_name(), "module");
        assert_eq!(suite.case_name(), "second");
        assert_eq!(suite.tally().cases_started(), 2);
        assert_eq!(
            output(suite.sink()),
            "running test case [module/first] ...\nrunning test case [module/second] ...\n"
        );
    }

    #[test]
    fn failed_check_is_labelled_with_current_case() {
        let mut suite = suite("labels");
        suite.case("before");
        suite.case("after");
        assert!(!suite.evaluate(Severity::Check, false, || "boom".to_string()));

        let text = output(suite.sink());
        assert!(text.contains("[labels/after]: boom"));
        assert!(text.contains("suite.rs:"));
    }

    #[test]
    fn passing_check_emits_nothing_and_skips_message() {
        let mut suite = suite("quiet");
        assert!(suite.evaluate(Severity::Require, true, || unreachable!()));
        assert_eq!(suite.tally().checks_evaluated(), 1);
        assert_eq!(suite.tally().checks_failed(), 0);
        assert!(output(suite.sink()).is_empty());
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logged_failure(level: tracing::Level) -> String {
        let logs = Captured::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(level)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let mut suite = suite("logs");
            suite.evaluate(Severity::Check, false, || "left != right".to_string());
        });
        let bytes = logs.0.lock().unwrap().clone();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[test]
    fn failed_check_is_not_logged_at_default_level() {
        assert!(!logged_failure(tracing::Level::WARN).contains("left != right"));
        assert!(logged_failure(tracing::Level::DEBUG).contains("left != right"));
    }

    #[test]
    fn finish_prints_summary_once() {
        let mut suite = suite("end");
        suite.evaluate(Severity::Check, true, String::new);
        suite.evaluate(Severity::Check, false, || "nope".to_string());

        let (verdict, sink) = suite.finish_with_sink();
        assert_eq!(verdict, Verdict::Failure);
        let text = output(&sink);
        assert_eq!(text.matches("failed with 1 errors in 2 checks!").count(), 1);
    }

    #[derive(Debug)]
    struct Interrupted;

    impl fmt::Display for Interrupted {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "interrupted")
        }
    }

    #[test]
    fn run_reports_error_from_body() {
        let (verdict, sink) = suite("errors").run_with_sink(|suite| {
            suite.case("only");
            suite.evaluate(Severity::Check, true, String::new);
            Err(Interrupted)
        });
        assert_eq!(verdict, Verdict::Failure);
        let text = output(&sink);
        assert!(text.ends_with(" failed with uncaught exception <interrupted>!\n"));
        assert!(!text.contains("no errors detected"));
    }

    #[test]
    fn run_reports_panic_from_body() {
        let (verdict, sink) = suite("panics").run_with_sink(|_| -> Result<(), Interrupted> {
            panic!("index out of range")
        });
        assert_eq!(verdict, Verdict::Failure);
        assert!(output(&sink).contains("<index out of range>"));

        let (verdict, sink) = suite("opaque").run_with_sink(|_| -> Result<(), Interrupted> {
            panic::panic_any(17_u32)
        });
        assert_eq!(verdict, Verdict::Failure);
        assert!(output(&sink).contains("failed with uncaught unknown exception!"));
    }

    #[test]
    fn run_with_clean_body_ends_normally() {
        let verdict = suite("clean").run(|suite| {
            suite.case("a");
            suite.evaluate(Severity::Check, true, String::new);
            Ok::<(), Interrupted>(())
        });
        assert!(verdict.is_success());
    }
}
