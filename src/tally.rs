//! Run counters and the verdict derived from them.

use std::fmt;
use std::process::{ExitCode, Termination};

/// Counters shared by every case of one module.
///
/// `checks_failed` never exceeds `checks_evaluated`: both only move through
/// [`Tally::record`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    cases_started: usize,
    checks_evaluated: usize,
    checks_failed: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cases_started(&self) -> usize {
        self.cases_started
    }

    pub fn checks_evaluated(&self) -> usize {
        self.checks_evaluated
    }

    pub fn checks_failed(&self) -> usize {
        self.checks_failed
    }

    pub(crate) fn start_case(&mut self) {
        self.cases_started += 1;
    }

    /// Counts one evaluated check, and one failure when it did not pass.
    pub(crate) fn record(&mut self, passed: bool) {
        self.checks_evaluated += 1;
        if !passed {
            self.checks_failed += 1;
        }
    }

    pub fn verdict(&self) -> Verdict {
        if self.checks_failed == 0 {
            Verdict::Success
        } else {
            Verdict::Failure
        }
    }

    /// The module-end summary line, leading indentation included.
    pub fn summary(&self) -> String {
        let noun = if self.checks_evaluated == 1 {
            "check"
        } else {
            "checks"
        };
        match self.verdict() {
            Verdict::Success => format!(
                "  no errors detected in {} {}.",
                self.checks_evaluated, noun
            ),
            Verdict::Failure => format!(
                "  failed with {} errors in {} {}!",
                self.checks_failed, self.checks_evaluated, noun
            ),
        }
    }
}

/// Final success/failure determination for a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Success,
    Failure,
}

impl Verdict {
    pub fn is_success(self) -> bool {
        matches!(self, Verdict::Success)
    }

    pub fn exit_code(self) -> ExitCode {
        match self {
            Verdict::Success => ExitCode::SUCCESS,
            Verdict::Failure => ExitCode::FAILURE,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Success => write!(f, "success"),
            Verdict::Failure => write!(f, "failure"),
        }
    }
}

impl From<Verdict> for ExitCode {
    fn from(verdict: Verdict) -> Self {
        verdict.exit_code()
    }
}

impl Termination for Verdict {
    fn report(self) -> ExitCode {
        self.exit_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_tally_is_a_success_with_no_checks() {
        let tally = Tally::new();
        assert_eq!(tally.verdict(), Verdict::Success);
        assert_eq!(tally.summary(), "  no errors detected in 0 checks.");
    }

    #[test]
    fn record_keeps_failures_within_evaluations() {
        let mut tally = Tally::new();
        for passed in [true, false, true, false, false] {
            tally.record(passed);
            assert!(tally.checks_failed() <= tally.checks_evaluated());
        }
        assert_eq!(tally.checks_evaluated(), 5);
        assert_eq!(tally.checks_failed(), 3);
        assert_eq!(tally.verdict(), Verdict::Failure);
    }

    #[test]
    fn summary_pluralizes_check_count() {
        let mut tally = Tally::new();
        tally.record(true);
        assert_eq!(tally.summary(), "  no errors detected in 1 check.");

        tally.record(false);
        assert_eq!(tally.summary(), "  failed with 1 errors in 2 checks!");
    }

    #[test]
    fn cases_are_counted_separately_from_checks() {
        let mut tally = Tally::new();
        tally.start_case();
        tally.start_case();
        assert_eq!(tally.cases_started(), 2);
        assert_eq!(tally.checks_evaluated(), 0);
    }

    #[test]
    fn verdict_maps_to_exit_code() {
        assert_eq!(
            format!("{:?}", ExitCode::from(Verdict::Success)),
            format!("{:?}", ExitCode::SUCCESS)
        );
        assert_eq!(
            format!("{:?}", ExitCode::from(Verdict::Failure)),
            format!("{:?}", ExitCode::FAILURE)
        );
        assert!(Verdict::Success.is_success());
        assert_eq!(Verdict::Failure.to_string(), "failure");
    }
}
