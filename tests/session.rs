use reckon::{
    engine::evaluator::Evaluator,
    error::EvalError,
    session::{HISTORY_LIMIT, Session},
};

#[test]
fn ans_refers_to_last_result() {
    let mut session = Session::new();

    assert_eq!(session.evaluate("ans + 1"), Ok(1.0));
    assert_eq!(session.evaluate("ans * 10"), Ok(10.0));
    assert_eq!(session.evaluate("Ans - 4"), Ok(6.0));
    assert_eq!(session.last_result(), 6.0);
}

#[test]
fn negative_values_keep_their_sign() {
    let mut session = Session::new();

    session.evaluate("-3").unwrap();
    assert_eq!(session.evaluate("ans^2"), Ok(9.0));
    assert_eq!(session.evaluate("2^-ans"), Ok(2.0_f64.powf(-9.0)));
}

#[test]
fn memory_register() {
    let mut session = Session::new();
    assert_eq!(session.recall_memory(), 0.0);

    session.store_memory(2.5);
    assert_eq!(session.evaluate("mem * 4"), Ok(10.0));
    assert_eq!(session.evaluate("MEM + ans"), Ok(12.5));

    session.clear_memory();
    assert_eq!(session.evaluate("mem"), Ok(0.0));
}

#[test]
fn placeholders_match_whole_words_only() {
    let session = Session::new();

    assert_eq!(session.substitute("answer").unwrap(), "answer");
    assert_eq!(session.substitute("memo + ans").unwrap(), "memo + (0)");
}

#[test]
fn small_values_survive_substitution() {
    let mut session = Session::new();

    let tiny = session.evaluate("1/3/100000").unwrap();
    assert_eq!(session.evaluate("ans"), Ok(tiny));
}

#[test]
fn non_finite_values_cannot_be_substituted() {
    let mut session = Session::new();
    session.evaluate("10^400").unwrap();

    assert!(matches!(session.evaluate("ans + 1"), Err(EvalError::MalformedExpression { .. })));
    assert!(session.substitute("2 + mem").is_ok());
}

#[test]
fn failures_leave_state_untouched() {
    let mut session = Session::new();
    session.evaluate("7").unwrap();

    assert_eq!(session.evaluate("ans / 0"), Err(EvalError::DivisionByZero));
    assert!(session.evaluate("ans +").is_err());

    assert_eq!(session.last_result(), 7.0);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn history_is_bounded() {
    let mut session = Session::new();

    for n in 0..15 {
        session.evaluate(&format!("{n} + 0")).unwrap();
    }

    let entries: Vec<_> = session.history().collect();
    assert_eq!(entries.len(), HISTORY_LIMIT);
    assert_eq!(entries[0].expression, "5 + 0");
    assert_eq!(entries[HISTORY_LIMIT - 1].result, 14.0);
    assert_eq!(entries[0].to_string(), "5 + 0 = 5");

    session.clear_history();
    assert_eq!(session.history().len(), 0);
}

#[test]
fn history_keeps_expression_as_typed() {
    let mut session = Session::new();
    session.evaluate("2").unwrap();
    session.evaluate("  ans * 3 ").unwrap();

    let last = session.history().last().unwrap();
    assert_eq!(last.expression, "ans * 3");
    assert_eq!(last.result, 6.0);
}

#[test]
fn session_uses_configured_evaluator() {
    let mut session = Session::with_evaluator(Evaluator::with_capacity(2));

    assert_eq!(session.evaluate("1 + 2"), Ok(3.0));
    assert!(session.evaluate("1 + 2 * 3").is_err());
}
