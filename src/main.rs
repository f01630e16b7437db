// Linpuzlo – an optimal solver for the 8-digit linear swap puzzle
// Copyright (C) 2024  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

mod neighbors;
mod solver;
mod state;

use clap::Parser;
use serde_json::json;
use state::State;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "linpuzlo",
    about = "Finds the minimum number of adjacent swaps that transform \
             one 8-digit configuration into another. Reported swap \
             positions are 0-based.",
)]
struct Args {
    /// Start configuration as an 8-digit string, eg. 12345678
    #[arg(long)]
    start: String,

    /// Goal configuration as an 8-digit string, eg. 87654321
    #[arg(long)]
    goal: String,

    /// Print every intermediate state and the swap that produced it
    #[arg(long)]
    show_path: bool,

    /// Print the result as a JSON object instead of a text report
    #[arg(long)]
    json: bool,
}

fn render_state(state: &[char]) -> String {
    state.iter().collect()
}

fn print_report(solution: &solver::Solution<char>, show_path: bool) {
    println!("Minimum swaps: {}", solution.steps);

    if show_path {
        println!("Path:");

        for (i, state) in solution.path.iter().enumerate() {
            if i == 0 {
                println!("  {}: {} (start)", i, render_state(state));
            } else {
                println!(
                    "  {}: {}  {}",
                    i,
                    render_state(state),
                    solution.moves[i - 1],
                );
            }
        }

        println!("Explored {} states", solution.explored);
    }
}

fn print_json(solution: &solver::Solution<char>) {
    let path = solution.path.iter()
        .map(|state| render_state(state))
        .collect::<Vec<String>>();

    let result = json!({
        "steps": solution.steps,
        "path": path,
        "moves": solution.moves,
        "explored": solution.explored,
    });

    println!("{}", result);
}

fn main() -> ExitCode {
    let args = Args::parse();

    let start = match args.start.parse::<State>() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("start: {}", e);
            return ExitCode::FAILURE;
        },
    };

    let goal = match args.goal.parse::<State>() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("goal: {}", e);
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = solver::validate(
        start.symbols(),
        goal.symbols(),
        state::PUZZLE_LENGTH,
    ) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let solution = solver::solve(start.symbols(), goal.symbols());

    if args.json {
        print_json(&solution);
    } else {
        print_report(&solution, args.show_path);
    }

    ExitCode::SUCCESS
}
