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

use super::state::Move;

// Iterator over the states reachable from a state with a single
// adjacent swap, paired with the swap that produces each one. Swaps are
// enumerated left to right, ie, (0,1), (1,2), … (len-2,len-1).
pub struct Neighbors<'a, T> {
    state: &'a [T],
    i: usize,
}

impl<'a, T> Neighbors<'a, T> {
    pub fn new(state: &'a [T]) -> Neighbors<'a, T> {
        Neighbors {
            state,
            i: 0,
        }
    }
}

impl<'a, T: Clone> Iterator for Neighbors<'a, T> {
    type Item = (Vec<T>, Move);

    fn next(&mut self) -> Option<(Vec<T>, Move)> {
        if self.i + 1 >= self.state.len() {
            return None;
        }

        let mut next = self.state.to_owned();
        next.swap(self.i, self.i + 1);

        let mov = Move::adjacent(self.i);

        self.i += 1;

        Some((next, mov))
    }
}
