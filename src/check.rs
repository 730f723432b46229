//! Check families.
//!
//! Every family funnels into one evaluator that counts the check, reports a
//! failure and, for [`Severity::Require`], aborts the process. The methods
//! here only decide whether the check passed and what the diagnostic says.
//! The `check_*!`/`require_*!` macros call them with the literal source text
//! of their arguments.

use std::any::type_name;
use std::error::Error;
use std::fmt;

use termcolor::WriteColor;

use crate::coefficients::{max_abs_difference, Coefficients};
use crate::operand::Operand;
use crate::outcome::{Attempt, Outcome};
use crate::suite::Suite;

/// Whether a failed check lets the module continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Record the failure and continue with the next check.
    Check,
    /// Record the failure and terminate the process.
    Require,
}

impl Severity {
    pub fn is_critical(self) -> bool {
        matches!(self, Severity::Require)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Check => write!(f, "check"),
            Severity::Require => write!(f, "require"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Relation {
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Equal => "==",
            Relation::NotEqual => "!=",
            Relation::Less => "<",
            Relation::LessEqual => "<=",
            Relation::Greater => ">",
            Relation::GreaterEqual => ">=",
        }
    }

    pub fn holds<L, R>(self, left: &L, right: &R) -> bool
    where
        L: PartialOrd<R> + ?Sized,
        R: ?Sized,
    {
        match self {
            Relation::Equal => left.eq(right),
            Relation::NotEqual => left.ne(right),
            Relation::Less => left.lt(right),
            Relation::LessEqual => left.le(right),
            Relation::Greater => left.gt(right),
            Relation::GreaterEqual => left.ge(right),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl<W: WriteColor> Suite<W> {
    /// Checks a predicate; `expr` is its source text.
    #[track_caller]
    pub fn boolean(&mut self, severity: Severity, passed: bool, expr: &str) -> bool {
        self.evaluate(severity, passed, || format!("check {{{expr}}} failed!"))
    }

    /// Checks `left == right`; `expr` is the source text of the comparison.
    #[track_caller]
    pub fn equal<L, R>(&mut self, severity: Severity, left: &L, right: &R, expr: &str) -> bool
    where
        L: PartialEq<R> + Operand + ?Sized,
        R: Operand + ?Sized,
    {
        let passed = left.eq(right);
        self.relation(severity, Relation::Equal, passed, left, right, expr)
    }

    #[track_caller]
    pub fn not_equal<L, R>(&mut self, severity: Severity, left: &L, right: &R, expr: &str) -> bool
    where
        L: PartialEq<R> + Operand + ?Sized,
        R: Operand + ?Sized,
    {
        let passed = left.ne(right);
        self.relation(severity, Relation::NotEqual, passed, left, right, expr)
    }

    /// Checks any [`Relation`] between two ordered operands.
    #[track_caller]
    pub fn compare<L, R>(
        &mut self,
        severity: Severity,
        relation: Relation,
        left: &L,
        right: &R,
        expr: &str,
    ) -> bool
    where
        L: PartialOrd<R> + Operand + ?Sized,
        R: Operand + ?Sized,
    {
        let passed = relation.holds(left, right);
        self.relation(severity, relation, passed, left, right, expr)
    }

    /// Checks `|left - right| < epsilon * (1 + |left| + |right|)`.
    ///
    /// The tolerance is relative for large magnitudes and absolute near zero.
    /// A NaN on either side fails.
    #[track_caller]
    pub fn close(
        &mut self,
        severity: Severity,
        left: impl Into<f64>,
        right: impl Into<f64>,
        epsilon: impl Into<f64>,
        expr: &str,
    ) -> bool {
        let (left, right, epsilon) = (left.into(), right.into(), epsilon.into());
        let difference = (left - right).abs();
        let bound = epsilon * (1.0 + left.abs() + right.abs());
        self.compare(severity, Relation::Less, &difference, &bound, expr)
    }

    /// Element-wise [`close`](Self::close) over the largest coefficients.
    ///
    /// Operand sizes are compared first with a `Require` check, so a size
    /// mismatch always terminates the process.
    #[track_caller]
    pub fn all_close<L, R>(
        &mut self,
        severity: Severity,
        left: &L,
        right: &R,
        epsilon: impl Into<f64>,
        operands: (&str, &str),
    ) -> bool
    where
        L: Coefficients + ?Sized,
        R: Coefficients + ?Sized,
    {
        let (left_text, right_text) = operands;
        let epsilon = epsilon.into();
        self.equal(
            Severity::Require,
            &left.size(),
            &right.size(),
            &format!("{left_text}.size() == {right_text}.size()"),
        );

        let difference = max_abs_difference(left, right).unwrap_or(f64::NAN);
        let bound = epsilon * (1.0 + left.max_abs() + right.max_abs());
        self.compare(
            severity,
            Relation::Less,
            &difference,
            &bound,
            &format!(
                "max|{left_text} - {right_text}| < {epsilon} * (1 + max|{left_text}| + max|{right_text}|)"
            ),
        )
    }

    /// Checks that `work` fails with the error kind `K`.
    #[track_caller]
    pub fn throws<K, F, R>(&mut self, severity: Severity, work: F, call: &str) -> bool
    where
        K: Error + 'static,
        F: FnOnce() -> R,
        R: Attempt,
    {
        match Outcome::classify::<K, _, _>(work) {
            Outcome::Expected => self.evaluate(severity, true, String::new),
            Outcome::NoFailure => {
                self.evaluate(severity, false, || format!("call {{{call}}} does not throw!"))
            }
            Outcome::Unexpected => self.evaluate(severity, false, || {
                format!("call {{{call}}} does not throw {{{}}}!", kind_name::<K>())
            }),
        }
    }

    /// Checks that `work` completes without failing in any way.
    #[track_caller]
    pub fn nothrow<F, R>(&mut self, severity: Severity, work: F, call: &str) -> bool
    where
        F: FnOnce() -> R,
        R: Attempt,
    {
        let outcome = Outcome::classify_any(work);
        self.evaluate(severity, !outcome.is_failure(), || {
            format!("call {{{call}}} throws!")
        })
    }

    #[track_caller]
    fn relation<L, R>(
        &mut self,
        severity: Severity,
        relation: Relation,
        passed: bool,
        left: &L,
        right: &R,
        expr: &str,
    ) -> bool
    where
        L: Operand + ?Sized,
        R: Operand + ?Sized,
    {
        self.evaluate(severity, passed, || {
            format!(
                "check {{{expr}}} failed {{{} {relation} {}}}!",
                left.render(),
                right.render()
            )
        })
    }
}

/// Last path segment of a plain type name, or the full name for generic types.
fn kind_name<K: ?Sized>() -> &'static str {
    let full = type_name::<K>();
    if full.contains('<') {
        return full;
    }
    full.rsplit("::").next().unwrap_or(full)
}
