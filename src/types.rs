use serde::{Serialize, Serializer};

use crate::error::{ReplayError, Result};

pub const BOARD_SIZE: usize = 8;
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;
/// Number of moves in a completed game: every square except the four
/// starting discs.
pub const GAME_LENGTH: usize = BOARD_CELLS - 4;

/// Side to move. Black is Player1 (+1), White is Player2 (-1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Canonical signed value.
    pub fn value(self) -> i8 {
        match self {
            Player::Black => 1,
            Player::White => -1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Maps a transcript player tag (`B` or `W`).
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "B" => Ok(Player::Black),
            "W" => Ok(Player::White),
            other => Err(ReplayError::MalformedTranscript(format!(
                "unknown player token {other:?}"
            ))),
        }
    }
}

impl Serialize for Player {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.value())
    }
}

/// State of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Cell {
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Player1 => 1,
            Cell::Player2 => -1,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Player1,
            Player::White => Cell::Player2,
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.value())
    }
}

/// Immutable copy of the board taken at one point of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(serialize_with = "serialize_cells")]
    pub cells: [Cell; BOARD_CELLS],
    pub player: Player,
    pub move_index: usize,
    /// Zero-based position of the move within the game.
    pub round: usize,
}

fn serialize_cells<S: Serializer>(
    cells: &[Cell; BOARD_CELLS],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(cells.iter())
}
