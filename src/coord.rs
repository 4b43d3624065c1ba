//! Algebraic coordinates (`D4`) to linear board indices and back.

use std::fmt;
use std::str::FromStr;

use crate::error::{ReplayError, Result};
use crate::types::{BOARD_CELLS, BOARD_SIZE};

/// A board square as zero-based column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub col: u8,
    pub row: u8,
}

impl Coordinate {
    pub fn index(self) -> usize {
        self.col as usize + self.row as usize * BOARD_SIZE
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Coordinate {
    type Err = ReplayError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(letter), Some(digit), None) => decode(encode(letter, digit)?),
            _ => Err(ReplayError::InvalidCoordinate(format!(
                "expected two characters, got {s:?}"
            ))),
        }
    }
}

/// `index = (letter - 'A') + (digit - 1) * 8`.
pub fn encode(column_letter: char, row_digit: char) -> Result<usize> {
    let letter = column_letter.to_ascii_uppercase();
    if !('A'..='H').contains(&letter) || !('1'..='8').contains(&row_digit) {
        return Err(ReplayError::InvalidCoordinate(format!(
            "{column_letter}{row_digit}"
        )));
    }

    let col = letter as usize - 'A' as usize;
    let row = row_digit as usize - '1' as usize;
    Ok(col + row * BOARD_SIZE)
}

pub fn decode(index: usize) -> Result<Coordinate> {
    if index >= BOARD_CELLS {
        return Err(ReplayError::InvalidCoordinate(format!(
            "index {index} is outside the board"
        )));
    }
    Ok(Coordinate {
        col: (index % BOARD_SIZE) as u8,
        row: (index / BOARD_SIZE) as u8,
    })
}

/// Parses a two-character coordinate straight to its index.
pub fn parse_index(text: &str) -> Result<usize> {
    text.parse::<Coordinate>().map(Coordinate::index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_corners_and_center() {
        assert_eq!(encode('A', '1'), Ok(0));
        assert_eq!(encode('H', '1'), Ok(7));
        assert_eq!(encode('A', '8'), Ok(56));
        assert_eq!(encode('H', '8'), Ok(63));
        assert_eq!(encode('D', '4'), Ok(27));
        assert_eq!(encode('e', '5'), Ok(36));
    }

    #[test]
    fn index_round_trips_through_coordinate() {
        for index in 0..BOARD_CELLS {
            let coord = decode(index).unwrap();
            assert_eq!(parse_index(&coord.to_string()), Ok(index));
        }
    }

    #[test]
    fn coordinate_text_round_trips() {
        for letter in 'A'..='H' {
            for digit in '1'..='8' {
                let text = format!("{letter}{digit}");
                let coord: Coordinate = text.parse().unwrap();
                assert_eq!(coord.to_string(), text);
            }
        }
    }

    #[test]
    fn out_of_range_input_is_rejected() {
        for bad in ["I1", "A0", "A9", "@4", "D", "D44", "", "4D"] {
            assert!(
                matches!(parse_index(bad), Err(ReplayError::InvalidCoordinate(_))),
                "{bad:?} should be rejected"
            );
        }
        assert!(decode(64).is_err());
    }
}
