//! End-to-end intent scenarios against the public API

#![allow(clippy::expect_used, clippy::unwrap_used)]

use scicalc::prelude::*;

fn run(script: &str) -> CalculatorEngine {
    let mut engine = CalculatorEngine::new();
    engine.dispatch_all(parse_script(script).expect("script should parse"));
    engine
}

#[test]
fn scenario_no_operator_precedence() {
    let engine = run("2 + 3 × 4 =");
    assert_eq!(engine.display(), "20");
}

#[test]
fn scenario_decimal_chain() {
    let mut engine = CalculatorEngine::new();
    engine.input_digit(EntryKey::digit(1).unwrap());
    engine.input_decimal();
    engine.input_digit(EntryKey::digit(5).unwrap());
    engine.perform_operation(Operator::Add);
    engine.input_digit(EntryKey::digit(2).unwrap());
    engine.perform_operation(Operator::Equals);

    assert_eq!(engine.display(), "3.5");
    assert!(engine
        .history()
        .iter()
        .any(|entry| entry.display() == "1.5 + 2 = 3.5"));
}

#[test]
fn scenario_square_root() {
    let engine = run("9 sqrt");
    assert_eq!(engine.display(), "3");
    assert_eq!(engine.history().lines(), vec!["sqrt(9) = 3"]);
}

#[test]
fn scenario_sine_in_degrees() {
    let mut engine = CalculatorEngine::new();
    engine.toggle_angle_mode();
    engine.input_digit(EntryKey::digit(9).unwrap());
    engine.input_digit(EntryKey::digit(0).unwrap());
    engine.perform_scientific_operation(ScientificFn::Sin);
    assert_eq!(engine.display(), "1");
    assert_eq!(engine.angle_mode().label(), "DEG");
}

#[test]
fn scenario_factorials() {
    assert_eq!(run("5 n!").display(), "120");
    assert_eq!(run("1 ± n!").display(), ERROR_DISPLAY);
    assert_eq!(run("2.5 n!").display(), ERROR_DISPLAY);
}

#[test]
fn scenario_history_round_trip() {
    let engine = run("3 + 4 =");
    assert_eq!(engine.history().last().unwrap().display(), "3 + 4 = 7");
}

#[test]
fn scenario_memory_independent_of_clear() {
    let mut engine = run("8 M+");
    engine.clear();
    engine.memory_recall();
    assert_eq!(engine.display(), "8");
    assert_eq!(engine.memory_label(), "8");
}

#[test]
fn scenario_clear_after_any_sequence() {
    let mut engine = run("4 sqrt + 6 m+ ×");
    let history = engine.history().lines();
    engine.clear();
    assert_eq!(engine.display(), "0");
    assert_eq!(engine.previous_value(), None);
    assert_eq!(engine.pending_operation(), None);
    assert_eq!(engine.memory(), 6.0);
    assert_eq!(engine.history().lines(), history);
}

#[test]
fn scenario_divide_by_zero_is_not_an_error() {
    let engine = run("5 ÷ 0 =");
    assert_eq!(engine.display(), "0");
    assert!(!engine.is_error());
}

#[test]
fn scenario_invalid_logs_recover_with_clear_entry() {
    let mut engine = run("1 neg ln");
    assert_eq!(engine.display(), ERROR_DISPLAY);
    engine.clear_entry();
    engine.dispatch_all(parse_script("100 log").unwrap());
    assert_eq!(engine.display(), "2");
    assert_eq!(engine.history().lines(), vec!["log(100) = 2"]);
}

#[test]
fn scenario_history_newest_first_for_rendering() {
    let engine = run("1 + 1 = c 2 + 2 =");
    let newest_first: Vec<String> = engine.history().iter_rev().map(HistoryEntry::display).collect();
    assert_eq!(newest_first, vec!["2 + 2 = 4", "1 + 1 = 2"]);
}
