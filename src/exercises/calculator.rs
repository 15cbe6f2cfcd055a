//! Interactive addition calculator
//!
//! A read-loop over pairs of floats modeled as a two-state machine:
//! `Prompting` reads two numbers and either rejects them (negative input) or
//! prints their sum and asks whether to continue; anything other than `y`
//! moves to `Done`. Non-numeric input is fatal and propagates out of the
//! loop unrecovered.

use crate::console::{prompt_float, prompt_line, Console};
use crate::error::ExerciseError;

/// Add two numbers.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Loop state: either reading the next pair or finished.
enum State {
    Prompting,
    Done,
}

/// Run the calculator loop against `console`.
pub fn run(console: &mut dyn Console) -> Result<(), ExerciseError> {
    console.println("Simple Calculator")?;

    let mut state = State::Prompting;
    while let State::Prompting = state {
        let num1 = prompt_float(console, "Enter first number: ")?;
        let num2 = prompt_float(console, "Enter second number: ")?;

        // Rejection: skip the computation and the continue prompt entirely
        if num1 < 0.0 || num2 < 0.0 {
            console.println("Negative numbers not allowed")?;
            continue;
        }

        let result = add(num1, num2);
        console.println(&format!("Result: {}", fmt_float(result)))?;

        let choice = prompt_line(console, "Continue? (y/n): ")?;
        if !choice.eq_ignore_ascii_case("y") {
            state = State::Done;
        }
    }

    console.println("Goodbye!")?;
    Ok(())
}

/// Render a float for display. Whole finite values keep one decimal place
/// ("7.0") so sums of whole inputs still read as floats.
pub fn fmt_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
