//! Module-level properties of the harness, run in-process against an
//! in-memory sink.

use miette::IntoDiagnostic;
use termcolor::Buffer;
use utest::{check, check_equal, check_nothrow, check_throws, Relation, Severity, Suite, Verdict};

fn output(sink: &Buffer) -> String {
    String::from_utf8_lossy(sink.as_slice()).into_owned()
}

/// Three cases, ten non-critical checks, `failing` of them false.
fn ten_checks(m: &mut Suite<Buffer>, failing: usize) {
    let outcomes: Vec<bool> = (0..10).map(|i| i >= failing).collect();
    for (case, chunk) in ["first", "second", "third"]
        .iter()
        .zip(outcomes.chunks(4))
    {
        m.case(*case);
        for passed in chunk {
            check!(m, *passed);
        }
    }
}

#[test]
fn two_failures_in_ten_checks_fail_the_module() {
    let mut suite = Suite::with_sink("e2e", Buffer::no_color());
    ten_checks(&mut suite, 2);
    assert_eq!(suite.tally().cases_started(), 3);

    let (verdict, sink) = suite.finish_with_sink();
    assert_eq!(verdict, Verdict::Failure);
    let text = output(&sink);
    assert!(text.ends_with("  failed with 2 errors in 10 checks!\n"));
    assert_eq!(text.matches("[e2e/first]: check {*passed} failed!").count(), 2);
}

#[test]
fn no_failures_in_ten_checks_succeed() {
    let mut suite = Suite::with_sink("e2e", Buffer::no_color());
    ten_checks(&mut suite, 0);

    let (verdict, sink) = suite.finish_with_sink();
    assert_eq!(verdict, Verdict::Success);
    assert!(output(&sink).ends_with("  no errors detected in 10 checks.\n"));
}

#[test]
fn methods_work_without_macros() {
    let mut suite = Suite::with_sink("api", Buffer::no_color());
    suite.case("direct");
    assert!(suite.boolean(Severity::Check, true, "always"));
    assert!(suite.compare(Severity::Check, Relation::LessEqual, &1, &1, "1 <= 1"));
    assert!(!suite.equal(Severity::Check, "left", "right", "left == right"));
    assert!(suite.close(Severity::Check, 2.0_f32, 2.0_f32, 1e-9, "2 ~ 2"));
    assert!(suite.nothrow(Severity::Check, || Ok::<_, std::io::Error>(1), "ok"));

    let tally = *suite.tally();
    assert_eq!(tally.checks_evaluated(), 5);
    assert_eq!(tally.checks_failed(), 1);
    assert!(output(suite.sink()).contains("failed {left == right}!"));
}

#[test]
fn checks_inside_run_share_one_tally() {
    let (verdict, sink) = Suite::with_sink("run", Buffer::no_color()).run_with_sink(|m| -> miette::Result<()> {
        m.case("parse");
        check_equal!(m, "8".parse::<u8>().into_diagnostic()?, 8);
        check_throws!(m, "300".parse::<u8>(), std::num::ParseIntError);
        check_nothrow!(m, "1".parse::<u8>());
        Ok(())
    });
    assert_eq!(verdict, Verdict::Success);
    assert!(output(&sink).ends_with("  no errors detected in 3 checks.\n"));
}

#[test]
fn miette_report_from_body_is_described() {
    let (verdict, sink) = Suite::with_sink("report", Buffer::no_color()).run_with_sink(|m| -> miette::Result<()> {
        m.case("io");
        Err(miette::miette!("fixture directory missing"))
    });
    assert_eq!(verdict, Verdict::Failure);
    assert!(output(&sink).contains(" failed with uncaught exception <fixture directory missing>!"));
}
