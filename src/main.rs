//! A command line front end for the solver. Invoked with the name of one of
//! the built-in sample puzzles (default `first`), it prints the puzzle, the
//! solve statistics, and the resulting grid.

use sudoku_margins::SudokuGrid;
use sudoku_margins::solver::{self, SolveMethod, Solution};

use std::env;
use std::process;

/// The built-in sample puzzles, by difficulty. `first` through `fourth` are
/// solvable by sweeping alone, `hardest` and `evil` exercise guessing.
const SAMPLES: &[(&str, [[usize; 9]; 9])] = &[
    ("first", [
        [0, 6, 0, 0, 8, 7, 0, 0, 0],
        [0, 0, 3, 9, 0, 0, 6, 0, 5],
        [0, 7, 0, 0, 0, 0, 0, 0, 4],
        [6, 0, 4, 8, 0, 0, 0, 0, 0],
        [0, 9, 0, 0, 2, 0, 0, 6, 0],
        [0, 0, 0, 0, 0, 6, 1, 0, 3],
        [1, 0, 0, 0, 0, 0, 0, 5, 0],
        [2, 0, 9, 0, 0, 5, 4, 0, 0],
        [0, 0, 0, 2, 7, 0, 0, 1, 0]
    ]),
    ("second", [
        [0, 8, 0, 0, 6, 0, 3, 0, 7],
        [0, 0, 0, 0, 8, 0, 0, 0, 0],
        [7, 0, 1, 3, 4, 0, 6, 0, 9],
        [5, 6, 2, 0, 3, 7, 0, 0, 0],
        [3, 0, 0, 0, 0, 0, 0, 0, 5],
        [0, 0, 0, 2, 9, 0, 7, 3, 6],
        [2, 0, 5, 0, 7, 8, 9, 0, 4],
        [0, 0, 0, 0, 5, 0, 0, 0, 0],
        [1, 0, 8, 0, 2, 0, 0, 6, 0]
    ]),
    ("third", [
        [4, 1, 0, 7, 0, 9, 0, 5, 0],
        [3, 0, 0, 0, 5, 0, 1, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 9],
        [0, 3, 0, 0, 0, 0, 7, 0, 6],
        [0, 0, 0, 2, 0, 1, 0, 0, 0],
        [8, 0, 5, 0, 0, 0, 0, 1, 0],
        [9, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 4, 0, 6, 0, 0, 0, 7],
        [0, 7, 0, 3, 0, 5, 0, 2, 8]
    ]),
    ("fourth", [
        [1, 0, 3, 0, 0, 0, 5, 0, 0],
        [0, 0, 0, 3, 0, 1, 0, 7, 9],
        [0, 4, 0, 0, 5, 0, 0, 0, 3],
        [0, 3, 0, 0, 0, 6, 0, 0, 0],
        [8, 0, 6, 0, 2, 0, 1, 0, 4],
        [0, 0, 0, 4, 0, 0, 0, 6, 0],
        [6, 0, 0, 0, 4, 0, 0, 5, 0],
        [3, 2, 0, 1, 0, 8, 0, 0, 0],
        [0, 0, 9, 0, 0, 0, 2, 0, 1]
    ]),
    ("hardest", [
        [8, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 3, 6, 0, 0, 0, 0, 0],
        [0, 7, 0, 0, 9, 0, 2, 0, 0],
        [0, 5, 0, 0, 0, 7, 0, 0, 0],
        [0, 0, 0, 0, 4, 5, 7, 0, 0],
        [0, 0, 0, 1, 0, 0, 0, 3, 0],
        [0, 0, 1, 0, 0, 0, 0, 6, 8],
        [0, 0, 8, 5, 0, 0, 0, 1, 0],
        [0, 0, 9, 0, 0, 0, 4, 0, 0]
    ]),
    ("evil", [
        [0, 0, 0, 0, 0, 8, 0, 4, 0],
        [4, 5, 0, 0, 0, 7, 6, 0, 0],
        [1, 0, 0, 5, 0, 0, 0, 0, 2],
        [2, 0, 0, 0, 9, 0, 0, 0, 5],
        [0, 8, 0, 0, 0, 0, 0, 3, 0],
        [6, 0, 0, 0, 1, 0, 0, 0, 8],
        [8, 0, 0, 0, 0, 1, 0, 0, 9],
        [0, 0, 6, 3, 0, 0, 0, 2, 7],
        [0, 1, 0, 2, 0, 0, 0, 0, 0]
    ])
];

fn sample(name: &str) -> Option<[[usize; 9]; 9]> {
    SAMPLES.iter()
        .find(|(sample_name, _)| *sample_name == name)
        .map(|(_, cells)| *cells)
}

fn run(name: &str) -> Result<(), String> {
    let cells = sample(name)
        .ok_or_else(|| {
            let names: Vec<&str> =
                SAMPLES.iter().map(|(name, _)| *name).collect();
            format!("unknown sample puzzle '{}', expected one of: {}",
                name, names.join(", "))
        })?;
    let puzzle = SudokuGrid::from_array(cells)
        .map_err(|e| format!("invalid sample puzzle: {}", e))?;

    println!("Problem:\n");
    println!("{}\n", puzzle);

    let report = solver::solve(&puzzle);

    match report.solution {
        Solution::Solved(grid) => {
            match report.method {
                Some(SolveMethod::Propagation) =>
                    println!("Solved with {} sweeps of unique option \
                        identifying", report.sweeps),
                _ =>
                    println!("Solved with {} guess attempts",
                        report.attempts)
            }

            println!("{:.2} seconds\n", report.elapsed.as_secs_f64());
            println!("{}", grid);
        },
        Solution::Unsolved(_) => {
            println!("No solution found");
        }
    }

    Ok(())
}

fn main() {
    let name = env::args().nth(1).unwrap_or_else(|| String::from("first"));

    if let Err(message) = run(name.as_str()) {
        eprintln!("{}", message);
        process::exit(1);
    }
}
