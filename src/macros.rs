//! Check macros.
//!
//! Each public macro is a thin wrapper over a [`Suite`](crate::Suite) method
//! that adds the literal source text of its arguments. `check_*` forms record
//! a failure and continue; `require_*` forms terminate the process on failure.
//! Every macro evaluates each operand exactly once and returns whether the
//! check passed.

#[doc(hidden)]
#[macro_export]
macro_rules! __utest_boolean {
    ($severity:ident, $suite:expr, $check:expr) => {
        $suite.boolean(
            $crate::Severity::$severity,
            $check,
            ::core::stringify!($check),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __utest_equality {
    ($method:ident, $op:tt, $severity:ident, $suite:expr, $left:expr, $right:expr) => {
        match (&$left, &$right) {
            (left, right) => $suite.$method(
                $crate::Severity::$severity,
                left,
                right,
                ::core::stringify!($left $op $right),
            ),
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __utest_ordering {
    ($relation:ident, $op:tt, $severity:ident, $suite:expr, $left:expr, $right:expr) => {
        match (&$left, &$right) {
            (left, right) => $suite.compare(
                $crate::Severity::$severity,
                $crate::Relation::$relation,
                left,
                right,
                ::core::stringify!($left $op $right),
            ),
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __utest_close {
    ($severity:ident, $suite:expr, $left:expr, $right:expr, $epsilon:expr) => {
        $suite.close(
            $crate::Severity::$severity,
            $left,
            $right,
            $epsilon,
            ::core::concat!(
                "|",
                ::core::stringify!($left),
                " - ",
                ::core::stringify!($right),
                "| < ",
                ::core::stringify!($epsilon),
                " * (1 + |",
                ::core::stringify!($left),
                "| + |",
                ::core::stringify!($right),
                "|)"
            ),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __utest_all_close {
    ($severity:ident, $suite:expr, $left:expr, $right:expr, $epsilon:expr) => {
        $suite.all_close(
            $crate::Severity::$severity,
            &$left,
            &$right,
            $epsilon,
            (::core::stringify!($left), ::core::stringify!($right)),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __utest_throws {
    ($severity:ident, $suite:expr, $call:expr, $kind:ty) => {
        $suite.throws::<$kind, _, _>(
            $crate::Severity::$severity,
            || $call,
            ::core::stringify!($call),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __utest_nothrow {
    ($severity:ident, $suite:expr, $call:expr) => {
        $suite.nothrow($crate::Severity::$severity, || $call, ::core::stringify!($call))
    };
}

/// Checks a predicate: `check!(suite, list.is_empty())`.
#[macro_export]
macro_rules! check {
    ($suite:expr, $check:expr $(,)?) => {
        $crate::__utest_boolean!(Check, $suite, $check)
    };
}

/// Like [`check!`], but a failure terminates the process.
#[macro_export]
macro_rules! require {
    ($suite:expr, $check:expr $(,)?) => {
        $crate::__utest_boolean!(Require, $suite, $check)
    };
}

#[macro_export]
macro_rules! check_equal {
    ($suite:expr, $left:expr, $right:expr $(,)?) => {
        $crate::__utest_equality!(equal, ==, Check, $suite, $left, $right)
    };
}

#[macro_export]
macro_rules! require_equal {
    ($suite:expr, $left:expr, $right:expr $(,)?) => {
        $crate::__utest_equality!(equal, ==, Require, $suite, $left, $right)
    };
}

#[macro_export]
macro_rules! check_not_equal {
    ($suite:expr, $left:expr, $right:expr $(,)?) => {
        $crate::__utest_equality!(not_equal, !=, Check, $suite, $left, $right)
    };
}

#[macro_export]
macro_rules! require_not_equal {
    ($suite:expr, $left:expr, $right:expr $(,)?) => {
        $crate::__utest_equality!(not_equal, !=, Require, $suite, $left, $right)
    };
}

#[macro_export]
macro_rules! check_less {
    ($suite:expr, $left:expr, $right:expr $(,)?) => {
        $crate::__utest_ordering!(Less, <, Check, $suite, $left, $right)
    };
}

#[macro_export]
macro_rules! require_less {
    ($suite:expr, $left:expr, $right:expr $(,)?) => {
        $crate::__utest_ordering!(Less, <, Require, $suite, $left, $right)
    };
}

#[macro_export]
macro_rules! check_less_equal {
    ($suite:expr, $left:expr, $right:expr $(,)?) => {
        $crate::__utest_ordering!(LessEqual, <=, Check, $suite, $left, $right)
    };
}

#[macro_export]
macro_rules! require_less_equal {
    ($suite:expr, $left:expr, $right:expr $(,)?) => {
        $crate::__utest_ordering!(LessEqual, <=, Require, $suite, $left, $right)
    };
}

#[macro_export]
macro_rules! check_greater {
    ($suite:expr, $left:expr, $right:expr $(,)?) => {
        $crate::__utest_ordering!(Greater, >, Check, $suite, $left, $right)
    };
}

#[macro_export]
macro_rules! require_greater {
    ($suite:expr, $left:expr, $right:expr $(,)?) => {
        $crate::__utest_ordering!(Greater, >, Require, $suite, $left, $right)
    };
}

#[macro_export]
macro_rules! check_greater_equal {
    ($suite:expr, $left:expr, $right:expr $(,)?) => {
        $crate::__utest_ordering!(GreaterEqual, >=, Check, $suite, $left, $right)
    };
}

#[macro_export]
macro_rules! require_greater_equal {
    ($suite:expr, $left:expr, $right:expr $(,)?) => {
        $crate::__utest_ordering!(GreaterEqual, >=, Require, $suite, $left, $right)
    };
}

/// Checks `|left - right| < epsilon * (1 + |left| + |right|)`.
#[macro_export]
macro_rules! check_close {
    ($suite:expr, $left:expr, $right:expr, $epsilon:expr $(,)?) => {
        $crate::__utest_close!(Check, $suite, $left, $right, $epsilon)
    };
}

#[macro_export]
macro_rules! require_close {
    ($suite:expr, $left:expr, $right:expr, $epsilon:expr $(,)?) => {
        $crate::__utest_close!(Require, $suite, $left, $right, $epsilon)
    };
}

/// Element-wise [`check_close!`] for [`Coefficients`](crate::Coefficients)
/// operands. A size mismatch terminates the process.
#[macro_export]
macro_rules! check_all_close {
    ($suite:expr, $left:expr, $right:expr, $epsilon:expr $(,)?) => {
        $crate::__utest_all_close!(Check, $suite, $left, $right, $epsilon)
    };
}

#[macro_export]
macro_rules! require_all_close {
    ($suite:expr, $left:expr, $right:expr, $epsilon:expr $(,)?) => {
        $crate::__utest_all_close!(Require, $suite, $left, $right, $epsilon)
    };
}

/// Checks that `call` fails with the error type `kind`, either by returning
/// `Err` or by panicking with a `kind` payload.
///
/// `call` must evaluate to `()` or a `Result`; wrap other expressions in a
/// block ending with `;`. A call that always panics has type `!` and must be
/// moved into a function returning `()`:
///
/// ```rust,ignore
/// fn overflow() {
///     std::panic::panic_any(Overflow)
/// }
/// check_throws!(m, overflow(), Overflow);
/// ```
#[macro_export]
macro_rules! check_throws {
    ($suite:expr, $call:expr, $kind:ty $(,)?) => {
        $crate::__utest_throws!(Check, $suite, $call, $kind)
    };
}

#[macro_export]
macro_rules! require_throws {
    ($suite:expr, $call:expr, $kind:ty $(,)?) => {
        $crate::__utest_throws!(Require, $suite, $call, $kind)
    };
}

/// Checks that `call` neither returns `Err` nor panics.
#[macro_export]
macro_rules! check_nothrow {
    ($suite:expr, $call:expr $(,)?) => {
        $crate::__utest_nothrow!(Check, $suite, $call)
    };
}

#[macro_export]
macro_rules! require_nothrow {
    ($suite:expr, $call:expr $(,)?) => {
        $crate::__utest_nothrow!(Require, $suite, $call)
    };
}
