//! Parsing of `--move` operations.

use std::fmt;
use std::str::FromStr;

use campus_order::WorkingOrder;

/// One reorder operation as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOp {
    /// `FROM:TO` — positional move, both zero-based.
    Position { from: usize, to: usize },
    /// `start:ID` — move the item to the front.
    ToStart(String),
    /// `end:ID` — move the item to the back.
    ToEnd(String),
    /// `left:ID` — move the item one step toward the front.
    Left(String),
    /// `right:ID` — move the item one step toward the back.
    Right(String),
}

impl MoveOp {
    /// Apply this operation to a working order.
    pub fn apply(&self, order: &mut WorkingOrder) {
        match self {
            MoveOp::Position { from, to } => order.move_by_position(*from, *to),
            MoveOp::ToStart(id) => order.move_to_start(id),
            MoveOp::ToEnd(id) => order.move_to_end(id),
            MoveOp::Left(id) => order.move_left(id),
            MoveOp::Right(id) => order.move_right(id),
        }
    }
}

impl fmt::Display for MoveOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOp::Position { from, to } => write!(f, "{from}:{to}"),
            MoveOp::ToStart(id) => write!(f, "start:{id}"),
            MoveOp::ToEnd(id) => write!(f, "end:{id}"),
            MoveOp::Left(id) => write!(f, "left:{id}"),
            MoveOp::Right(id) => write!(f, "right:{id}"),
        }
    }
}

impl FromStr for MoveOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((head, tail)) = s.split_once(':') else {
            return Err(format!(
                "invalid move '{s}': expected FROM:TO, start:ID, end:ID, left:ID, or right:ID"
            ));
        };
        if tail.is_empty() {
            return Err(format!("invalid move '{s}': missing target"));
        }
        match head {
            "start" => Ok(MoveOp::ToStart(tail.to_string())),
            "end" => Ok(MoveOp::ToEnd(tail.to_string())),
            "left" => Ok(MoveOp::Left(tail.to_string())),
            "right" => Ok(MoveOp::Right(tail.to_string())),
            _ => {
                let from = head
                    .parse::<usize>()
                    .map_err(|_| format!("invalid move '{s}': '{head}' is not a position"))?;
                let to = tail
                    .parse::<usize>()
                    .map_err(|_| format!("invalid move '{s}': '{tail}' is not a position"))?;
                Ok(MoveOp::Position { from, to })
            }
        }
    }
}
