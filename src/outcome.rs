//! Classifies how a unit of work ended.
//!
//! A unit of work fails in one of two ways: it returns `Err`, or it panics.
//! Both are caught here, inside the same call that ran the work, and reduced
//! to an [`Outcome`]. The caught failure is dropped; nothing is rethrown and
//! no unwind is resumed.

use std::any::Any;
use std::error::Error;
use std::panic::{self, AssertUnwindSafe};

/// Boxed error as produced by a failing unit of work.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// How a unit of work ended relative to an expected failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The work completed without failing.
    NoFailure,
    /// The work failed with the expected kind.
    Expected,
    /// The work failed with some other kind.
    Unexpected,
}

/// What a unit of work hands back once it returns normally.
///
/// `()` never carries a failure, so closures that can only fail by panicking
/// qualify. `Result<T, E>` carries its `Err` side.
pub trait Attempt {
    fn into_failure(self) -> Option<BoxError>;
}

impl Attempt for () {
    fn into_failure(self) -> Option<BoxError> {
        None
    }
}

impl<T, E> Attempt for Result<T, E>
where
    E: Into<BoxError>,
{
    fn into_failure(self) -> Option<BoxError> {
        self.err().map(Into::into)
    }
}

impl Outcome {
    /// Runs `work` once and classifies it against the expected kind `K`.
    ///
    /// A returned error matches when it downcasts to `K`; a panic matches when
    /// its payload is a `K` (raised with [`std::panic::panic_any`]).
    pub fn classify<K, W, R>(work: W) -> Self
    where
        K: Error + 'static,
        W: FnOnce() -> R,
        R: Attempt,
    {
        match run(work) {
            Ok(None) => Outcome::NoFailure,
            Ok(Some(err)) if err.is::<K>() => Outcome::Expected,
            Err(payload) if (*payload).is::<K>() => Outcome::Expected,
            Ok(Some(_)) | Err(_) => Outcome::Unexpected,
        }
    }

    /// Runs `work` once with no designated kind: any failure is unexpected.
    pub fn classify_any<W, R>(work: W) -> Self
    where
        W: FnOnce() -> R,
        R: Attempt,
    {
        match run(work) {
            Ok(None) => Outcome::NoFailure,
            Ok(Some(_)) | Err(_) => Outcome::Unexpected,
        }
    }

    pub fn is_failure(self) -> bool {
        !matches!(self, Outcome::NoFailure)
    }
}

fn run<W, R>(work: W) -> Result<Option<BoxError>, Box<dyn Any + Send>>
where
    W: FnOnce() -> R,
    R: Attempt,
{
    panic::catch_unwind(AssertUnwindSafe(|| work().into_failure()))
}

/// Extracts the message of a panic payload raised by `panic!` with a literal or
/// formatted string.
pub fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        return Some((*s).to_string());
    }
    payload.downcast_ref::<String>().cloned()
}
