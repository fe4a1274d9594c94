//! Common types shared across vimtractor crates.

/// Cardinal step direction used by motions and the rock transmute command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Returns the `(column, row)` delta of one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// Semantic cell categories addressable by the `f`/`F`/`t`/`T` motions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetKind {
    Rock,
    Vegetable,
    Gas,
    Life,
}

/// Unified error type for game logic.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("invalid operation")]
    InvalidOperation,
    #[error("parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type GameResult<T> = Result<T, GameError>;
