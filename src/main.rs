// Coursework: interactive console exercises for a beginner programming course

use std::process;

use coursework::console::StdConsole;
use coursework::exercises;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("coursework");
        eprintln!("Error: No exercise name provided");
        eprintln!();
        eprintln!("Usage: {} <exercise>", program_name);
        eprintln!();
        eprintln!("Exercises:");
        for exercise in exercises::EXERCISES {
            eprintln!("  {:<12} {}", exercise.name, exercise.summary);
        }
        process::exit(1);
    }

    let name = &args[1];
    let Some(exercise) = exercises::find(name) else {
        eprintln!("Error: Unknown exercise '{}'", name);
        eprintln!(
            "Run {} with no arguments to list the available exercises",
            args.first().map(|s| s.as_str()).unwrap_or("coursework")
        );
        process::exit(1);
    };

    // Bad numeric input propagates out of the exercise and aborts the run
    let mut console = StdConsole::new();
    (exercise.run)(&mut console)?;

    Ok(())
}
