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

use super::neighbors::Neighbors;
use super::state::Move;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;

// Predecessor map built during the search. Key presence doubles as the
// visited set. The start state maps to (None, None).
type SearchRecord<T> = HashMap<Vec<T>, (Option<Vec<T>>, Option<Move>)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<T> {
    pub steps: usize,
    pub path: Vec<Vec<T>>,
    pub moves: Vec<Move>,
    pub explored: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    // (expected, actual)
    WrongStartLength(usize, usize),
    WrongGoalLength(usize, usize),
    MismatchedSymbols,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::WrongStartLength(expected, actual) => {
                write!(
                    f,
                    "start must contain exactly {} symbols (got {})",
                    expected,
                    actual,
                )
            },
            ValidationError::WrongGoalLength(expected, actual) => {
                write!(
                    f,
                    "goal must contain exactly {} symbols (got {})",
                    expected,
                    actual,
                )
            },
            ValidationError::MismatchedSymbols => {
                write!(
                    f,
                    "start and goal must contain the same symbols with \
                     the same multiplicities",
                )
            },
        }
    }
}

// Precondition check run before any search state is allocated. If the
// sorted symbol multisets differ the two configurations live in
// disjoint components of the swap graph and no path exists.
pub fn validate<T: Ord>(
    start: &[T],
    goal: &[T],
    length: usize,
) -> Result<(), ValidationError> {
    if start.len() != length {
        return Err(ValidationError::WrongStartLength(length, start.len()));
    }

    if goal.len() != length {
        return Err(ValidationError::WrongGoalLength(length, goal.len()));
    }

    let mut start_sorted = start.iter().collect::<Vec<&T>>();
    let mut goal_sorted = goal.iter().collect::<Vec<&T>>();
    start_sorted.sort_unstable();
    goal_sorted.sort_unstable();

    if start_sorted != goal_sorted {
        return Err(ValidationError::MismatchedSymbols);
    }

    Ok(())
}

fn reconstruct<T>(parents: &SearchRecord<T>, goal: &[T]) -> Solution<T>
where
    T: Hash + Clone + Eq
{
    let mut path = Vec::new();
    let mut moves = Vec::new();
    let mut current = Some(goal.to_owned());

    while let Some(state) = current {
        let (parent, mov) = &parents[&state];

        if let Some(mov) = mov {
            moves.push(*mov);
        }

        current = parent.clone();
        path.push(state);
    }

    path.reverse();
    moves.reverse();

    debug_assert_eq!(path.len(), moves.len() + 1);

    Solution {
        steps: moves.len(),
        path,
        moves,
        explored: parents.len(),
    }
}

// Breadth-first search over the graph whose nodes are the distinct
// orderings of the symbols and whose edges are adjacent swaps. Because
// every edge has the same weight, the first path found is minimal.
//
// The inputs must already have been validated: if the frontier empties
// without reaching the goal this panics, since that can only happen
// when start and goal have different symbol multisets.
pub fn solve<T>(start: &[T], goal: &[T]) -> Solution<T>
where
    T: Hash + Clone + Eq
{
    assert_eq!(start.len(), goal.len());

    if start == goal {
        return Solution {
            steps: 0,
            path: vec![start.to_owned()],
            moves: Vec::new(),
            explored: 1,
        };
    }

    let mut parents = SearchRecord::new();
    parents.insert(start.to_owned(), (None, None));

    let mut frontier = VecDeque::new();
    frontier.push_back(start.to_owned());

    while let Some(state) = frontier.pop_front() {
        for (next, mov) in Neighbors::new(&state) {
            if parents.contains_key(&next) {
                continue;
            }

            parents.insert(next.clone(), (Some(state.clone()), Some(mov)));

            if next == goal {
                return reconstruct(&parents, goal);
            }

            frontier.push_back(next);
        }
    }

    panic!(
        "search frontier exhausted without reaching the goal even \
         though the inputs passed validation",
    );
}
