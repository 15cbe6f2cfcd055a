//! # Introduction
//!
//! Coursework runs three short interactive console exercises from a beginner
//! programming course: an arithmetic and control-flow walkthrough, an
//! addition calculator loop, and a pair of number classification demos.
//! Each exercise is a linear script of prompts and printed lines; the exact
//! output wording is the compatibility contract.
//!
//! ## Execution pipeline
//!
//! ```text
//! stdin → Console → exercise function → Console → stdout
//! ```
//!
//! 1. [`console`] — the I/O seam: [`console::StdConsole`] for a real
//!    terminal, [`console::MockConsole`] for tests, which scripts the input
//!    lines and captures the full session transcript.
//! 2. [`exercises`] — the catalogue: [`exercises::basics`],
//!    [`exercises::calculator`], and [`exercises::classify`], plus the
//!    name lookup used by the binary.
//! 3. [`error`] — [`error::ExerciseError`]; every variant is fatal. Bad
//!    numeric input aborts the run by design of the exercises, it is never
//!    re-prompted.
//!
//! ## Exercises
//!
//! `simple`: variables, a rectangle area, an age check, three loop forms.
//! `calculator`: a prompt/add/continue loop that rejects negative inputs.
//! `if_else`: the strict `>` banded classifier and an even/odd printer.

pub mod console;
pub mod error;
pub mod exercises;
