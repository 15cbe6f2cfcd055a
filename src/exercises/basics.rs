//! Variables, arithmetic, and control-flow walkthrough
//!
//! Runs a fixed sequence: a sum of two variables, a rectangle area, an age
//! check read from the console, a counting loop, a list summation, and a
//! while counter. The only input is the age line; a non-integer there aborts
//! the run.

use std::ops::Mul;

use crate::console::{prompt_int, Console};
use crate::error::ExerciseError;

/// Calculate the area of a rectangle.
pub fn calculate_area<T: Mul<Output = T>>(length: T, width: T) -> T {
    length * width
}

/// Run the walkthrough against `console`.
pub fn run(console: &mut dyn Console) -> Result<(), ExerciseError> {
    // Variables and basic operations
    let x = 5;
    let y = 10;
    let result = x + y;
    console.println(&format!("The sum is: {}", result))?;

    let rectangle_area = calculate_area(8, 6);
    console.println(&format!("Rectangle area: {}", rectangle_area))?;

    // Age check: the one interactive step
    let age = prompt_int(console, "Enter your age: ")?;
    if age >= 18 {
        console.println("You are an adult")?;
    } else {
        console.println("You are a minor")?;
    }

    console.println("Counting from 1 to 5:")?;
    for i in 1..6 {
        console.println(&format!("Number: {}", i))?;
    }

    let numbers = [1, 2, 3, 4, 5];
    let mut total = 0;
    for num in numbers {
        total += num;
    }
    console.println(&format!("Total sum: {}", total))?;

    let mut count = 0;
    while count < 3 {
        console.println(&format!("Count: {}", count))?;
        count += 1;
    }

    console.println("Done!")?;
    Ok(())
}
