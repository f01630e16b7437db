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

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const PUZZLE_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    symbols: Vec<char>,
}

// An adjacent swap. b is always a + 1 and both indices are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Move {
    pub a: usize,
    pub b: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    UnexpectedCharacter(usize, char),
}

impl Move {
    pub fn adjacent(a: usize) -> Move {
        Move { a, b: a + 1 }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "swap({},{})", self.a, self.b)
    }
}

impl State {
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl FromStr for State {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<State, ParseError> {
        let mut symbols = Vec::new();

        for (position, ch) in s.chars().enumerate() {
            if !ch.is_ascii_digit() {
                return Err(ParseError::UnexpectedCharacter(position, ch));
            }

            symbols.push(ch);
        }

        Ok(State { symbols })
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &ch in self.symbols.iter() {
            write!(f, "{}", ch)?;
        }

        Ok(())
    }
}

fn format_character(ch: char, f: &mut fmt::Formatter) -> fmt::Result {
    if ch.is_control() {
        write!(f, "U+{:04x}", ch as u32)
    } else {
        write!(f, "{}", ch)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::UnexpectedCharacter(position, ch) => {
                write!(f, "position {}: unexpected character: ", position)?;
                format_character(*ch, f)
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        let state = "12345678".parse::<State>().unwrap();

        assert_eq!(
            state.symbols(),
            &['1', '2', '3', '4', '5', '6', '7', '8'],
        );
        assert_eq!(&state.to_string(), "12345678");
    }

    #[test]
    fn parse_duplicates() {
        let state = "11223344".parse::<State>().unwrap();

        assert_eq!(&state.to_string(), "11223344");
    }

    #[test]
    fn bad_character() {
        assert_eq!(
            "position 4: unexpected character: x",
            &"1234x678".parse::<State>().unwrap_err().to_string(),
        );
        assert_eq!(
            "position 1: unexpected character: ,",
            &"1,2,3,4,5,6,7,8".parse::<State>().unwrap_err().to_string(),
        );
        assert_eq!(
            "position 0: unexpected character: U+0009",
            &"\t2345678".parse::<State>().unwrap_err().to_string(),
        );
    }

    #[test]
    fn move_display() {
        assert_eq!(&Move::adjacent(0).to_string(), "swap(0,1)");
        assert_eq!(&Move::adjacent(6).to_string(), "swap(6,7)");
    }
}
