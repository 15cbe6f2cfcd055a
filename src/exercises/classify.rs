//! Number classification demos
//!
//! [`Band`] splits the integers into four mutually exclusive ranges checked
//! in priority order with strict `>` comparisons, so the boundary values 10,
//! 5, and 0 fall into the *next lower* band. That strictness is part of the
//! observable contract and must stay as-is.

use crate::console::Console;
use crate::error::ExerciseError;

/// The four mutually exclusive classification bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Large,
    Medium,
    SmallPositive,
    ZeroOrNegative,
}

impl Band {
    /// Classify `x`. Comparisons are strict: `of(10)` is `Medium`, `of(5)`
    /// is `SmallPositive`, `of(0)` is `ZeroOrNegative`.
    pub fn of(x: i64) -> Band {
        if x > 10 {
            Band::Large
        } else if x > 5 {
            Band::Medium
        } else if x > 0 {
            Band::SmallPositive
        } else {
            Band::ZeroOrNegative
        }
    }

    /// Human-readable label printed by [`test_if_else`].
    pub fn label(self) -> &'static str {
        match self {
            Band::Large => "Large number",
            Band::Medium => "Medium number",
            Band::SmallPositive => "Small positive number",
            Band::ZeroOrNegative => "Zero or negative",
        }
    }

    /// Value derived from `x` for this band.
    pub fn derived(self, x: i64) -> i64 {
        match self {
            Band::Large => x * 2,
            Band::Medium => x + 5,
            Band::SmallPositive => x + 1,
            Band::ZeroOrNegative => 0,
        }
    }
}

/// Print the band label for `x` and return the derived value.
pub fn test_if_else(console: &mut dyn Console, x: i64) -> Result<i64, ExerciseError> {
    let band = Band::of(x);
    console.println(band.label())?;
    Ok(band.derived(x))
}

/// Print `Even` or `Odd` for `n`.
pub fn simple_if_else(console: &mut dyn Console, n: i64) -> Result<(), ExerciseError> {
    if n % 2 == 0 {
        console.println("Even")
    } else {
        console.println("Odd")
    }
}

/// Run the fixed driver sequence: classify 15, 7, 3, and -1 (printing each
/// derived value), then the parity of 4 and 5.
pub fn run(console: &mut dyn Console) -> Result<(), ExerciseError> {
    for x in [15, 7, 3, -1] {
        let result = test_if_else(console, x)?;
        console.println(&result.to_string())?;
    }
    simple_if_else(console, 4)?;
    simple_if_else(console, 5)?;
    Ok(())
}
