// Integration tests for the console exercises

use coursework::console::MockConsole;
use coursework::error::ExerciseError;
use coursework::exercises::{basics, calculator, classify};

/// Count how many transcript lines start with `prefix`.
fn lines_starting_with(console: &MockConsole, prefix: &str) -> usize {
    console
        .output()
        .iter()
        .filter(|line| line.starts_with(prefix))
        .count()
}

// === CALCULATOR ===

#[test]
fn test_calculator_single_iteration() {
    let mut console = MockConsole::with_input(&["3", "4", "n"]);
    calculator::run(&mut console).expect("Calculator run failed");

    assert_eq!(
        console.output(),
        vec![
            "Simple Calculator",
            "Enter first number: 3",
            "Enter second number: 4",
            "Result: 7.0",
            "Continue? (y/n): n",
            "Goodbye!",
        ]
    );
    // The loop ran exactly once
    assert_eq!(lines_starting_with(&console, "Enter first number: "), 1);
}

#[test]
fn test_calculator_rejects_negative_pair_then_recovers() {
    let mut console = MockConsole::with_input(&["-1", "5", "2", "3", "n"]);
    calculator::run(&mut console).expect("Calculator run failed");

    let output = console.output();
    println!("Calculator transcript:\n{}", console.transcript());

    assert_eq!(
        output,
        vec![
            "Simple Calculator",
            "Enter first number: -1",
            "Enter second number: 5",
            "Negative numbers not allowed",
            "Enter first number: 2",
            "Enter second number: 3",
            "Result: 5.0",
            "Continue? (y/n): n",
            "Goodbye!",
        ]
    );
}

#[test]
fn test_calculator_rejection_skips_computation() {
    // Rejection re-enters the prompt without a result or a continue prompt
    let mut console = MockConsole::with_input(&["5", "-2", "1", "1", "n"]);
    calculator::run(&mut console).expect("Calculator run failed");

    let output = console.output();
    assert!(output.contains(&"Negative numbers not allowed".to_string()));
    assert_eq!(lines_starting_with(&console, "Result: "), 1);
    assert_eq!(lines_starting_with(&console, "Continue? "), 1);
}

#[test]
fn test_calculator_uppercase_y_continues() {
    let mut console = MockConsole::with_input(&["1", "2", "Y", "3", "4", "n"]);
    calculator::run(&mut console).expect("Calculator run failed");

    let output = console.output();
    assert!(output.contains(&"Result: 3.0".to_string()));
    assert!(output.contains(&"Result: 7.0".to_string()));
    assert_eq!(lines_starting_with(&console, "Enter first number: "), 2);
}

#[test]
fn test_calculator_empty_choice_exits() {
    let mut console = MockConsole::with_input(&["1", "2", ""]);
    calculator::run(&mut console).expect("Calculator run failed");

    let output = console.output();
    assert_eq!(output.last().map(|s| s.as_str()), Some("Goodbye!"));
    assert_eq!(lines_starting_with(&console, "Enter first number: "), 1);
}

#[test]
fn test_calculator_fractional_result_display() {
    let mut console = MockConsole::with_input(&["1.5", "2.25", "n"]);
    calculator::run(&mut console).expect("Calculator run failed");

    assert!(console
        .output()
        .contains(&"Result: 3.75".to_string()));
}

#[test]
fn test_calculator_crashes_on_non_numeric_input() {
    let mut console = MockConsole::with_input(&["abc"]);
    let err = calculator::run(&mut console).expect_err("Expected a parse failure");

    assert!(matches!(err, ExerciseError::ParseFloat { .. }));
    // Nothing after the echoed bad input, in particular no goodbye
    assert_eq!(
        console.output(),
        vec!["Simple Calculator", "Enter first number: abc"]
    );
}

#[test]
fn test_calculator_crashes_on_exhausted_input() {
    let mut console = MockConsole::with_input(&["3"]);
    let err = calculator::run(&mut console).expect_err("Expected end of input");

    assert!(matches!(err, ExerciseError::EndOfInput));
}

// === BASICS ===

#[test]
fn test_basics_full_transcript_adult() {
    let mut console = MockConsole::with_input(&["21"]);
    basics::run(&mut console).expect("Basics run failed");

    assert_eq!(
        console.output(),
        vec![
            "The sum is: 15",
            "Rectangle area: 48",
            "Enter your age: 21",
            "You are an adult",
            "Counting from 1 to 5:",
            "Number: 1",
            "Number: 2",
            "Number: 3",
            "Number: 4",
            "Number: 5",
            "Total sum: 15",
            "Count: 0",
            "Count: 1",
            "Count: 2",
            "Done!",
        ]
    );
}

#[test]
fn test_basics_minor() {
    let mut console = MockConsole::with_input(&["17"]);
    basics::run(&mut console).expect("Basics run failed");

    let output = console.output();
    assert!(output.contains(&"You are a minor".to_string()));
    assert!(!output.contains(&"You are an adult".to_string()));
}

#[test]
fn test_basics_age_boundary_is_adult() {
    let mut console = MockConsole::with_input(&["18"]);
    basics::run(&mut console).expect("Basics run failed");

    assert!(console.output().contains(&"You are an adult".to_string()));
}

#[test]
fn test_basics_crashes_on_non_integer_age() {
    let mut console = MockConsole::with_input(&["old enough"]);
    let err = basics::run(&mut console).expect_err("Expected a parse failure");

    assert!(matches!(err, ExerciseError::ParseInt { .. }));
    // The run stopped at the age check
    let output = console.output();
    assert!(!output.contains(&"Done!".to_string()));
}

#[test]
fn test_basics_counter_never_reaches_bound() {
    let mut console = MockConsole::with_input(&["30"]);
    basics::run(&mut console).expect("Basics run failed");

    let output = console.output();
    assert!(output.contains(&"Count: 2".to_string()));
    assert!(!output.contains(&"Count: 3".to_string()));
}

// === CLASSIFIER ===

#[test]
fn test_classify_driver_sequence() {
    let mut console = MockConsole::new();
    classify::run(&mut console).expect("Classifier run failed");

    assert_eq!(
        console.output(),
        vec![
            "Large number",
            "30",
            "Medium number",
            "12",
            "Small positive number",
            "4",
            "Zero or negative",
            "0",
            "Even",
            "Odd",
        ]
    );
}

#[test]
fn test_classify_boundary_ten_is_medium() {
    let mut console = MockConsole::new();
    let result = classify::test_if_else(&mut console, 10).expect("Classification failed");

    assert_eq!(result, 15);
    assert_eq!(console.output(), vec!["Medium number"]);
}
