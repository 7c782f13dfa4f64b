/*
cell.rs

Copyright 2025 Hervé Quatremain

This file is part of Kazumaze.

Kazumaze is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Kazumaze is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Kazumaze. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Cell values in the puzzle grid.
//!
//! Every grid cell holds either a single digit or an arithmetic operator.
//! The two kinds are kept as a tagged [`Cell`] variant so that the evaluator
//! never has to parse strings: a coordinate lookup directly yields a
//! [`Cell::Number`] or a [`Cell::Operator`].

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Arithmetic operator carried by an operator cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(usize)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Return the single-character symbol for the operator.
    pub fn symbol(&self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    /// Apply the operator to the two operands.
    ///
    /// The computation uses checked integer arithmetic. The method returns
    /// [`None`] on a division by zero or when the result does not fit in an
    /// [`i64`].
    /// Division rounds toward negative infinity, so that `7 / 2` is `3` and
    /// `-7 / 2` is `-4`.
    pub fn apply(&self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Op::Add => lhs.checked_add(rhs),
            Op::Sub => lhs.checked_sub(rhs),
            Op::Mul => lhs.checked_mul(rhs),
            Op::Div => {
                if rhs == 0 {
                    None
                } else {
                    lhs.checked_div_euclid(rhs)
                }
            }
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Value of a grid cell.
///
/// The generator only ever emits digits between 1 and 9, but
/// [`Cell::Number`] can represent 0 so that hand-built grids round-trip; the
/// evaluator treats a zero divisor as an invalid result.
///
/// Cells serialize as their single-character token (`"7"`, `"+"`), which
/// keeps saved grids compact and readable.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(into = "char", try_from = "char")]
pub enum Cell {
    /// Digit cell. The value must stay between 0 and 9.
    Number(u8),

    /// Operator cell.
    Operator(Op),
}

impl From<Cell> for char {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Number(n) => {
                char::from_digit(u32::from(n), 10).expect("Cell digit out of range")
            }
            Cell::Operator(op) => op.symbol(),
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = String;

    fn try_from(token: char) -> Result<Self, Self::Error> {
        match token {
            '+' => Ok(Cell::Operator(Op::Add)),
            '-' => Ok(Cell::Operator(Op::Sub)),
            '*' => Ok(Cell::Operator(Op::Mul)),
            '/' => Ok(Cell::Operator(Op::Div)),
            '0'..='9' => {
                let digit: u32 = token.to_digit(10).expect("Digit token out of range");
                Ok(Cell::Number(digit as u8))
            }
            _ => Err(format!("Invalid cell token: {token}")),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_conversion() {
        assert_eq!(Cell::try_from('7'), Ok(Cell::Number(7)));
        assert_eq!(Cell::try_from('+'), Ok(Cell::Operator(Op::Add)));
        assert_eq!(Cell::try_from('/'), Ok(Cell::Operator(Op::Div)));
        assert!(Cell::try_from('x').is_err());
        assert_eq!(char::from(Cell::Number(3)), '3');
        assert_eq!(char::from(Cell::Operator(Op::Mul)), '*');
    }

    #[test]
    fn apply_floors_division() {
        assert_eq!(Op::Div.apply(7, 2), Some(3));
        assert_eq!(Op::Div.apply(-7, 2), Some(-4));
        assert_eq!(Op::Div.apply(100, 10), Some(10));
    }

    #[test]
    fn apply_rejects_zero_divisor() {
        assert_eq!(Op::Div.apply(7, 0), None);
    }

    #[test]
    fn apply_rejects_overflow() {
        assert_eq!(Op::Mul.apply(i64::MAX, 2), None);
        assert_eq!(Op::Add.apply(i64::MAX, 1), None);
    }

    #[test]
    fn operator_from_index() {
        assert_eq!(Op::from_repr(0), Some(Op::Add));
        assert_eq!(Op::from_repr(3), Some(Op::Div));
        assert_eq!(Op::from_repr(4), None);
    }
}
