use std::fmt;

use crate::error::{ReplayError, Result};
use crate::types::{BOARD_CELLS, BOARD_SIZE, Cell, Player, Record};

/// (dcol, drow) steps: up, down, left, right and the four diagonals.
const DIRECTIONS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (1, -1),
    (-1, -1),
    (1, 1),
    (-1, 1),
];

/// Reversi board as 64 row-major cells, `index = col + row * 8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        let mut cells = [Cell::Empty; BOARD_CELLS];
        cells[27] = Cell::Player2; // d4
        cells[28] = Cell::Player1; // e4
        cells[35] = Cell::Player1; // d5
        cells[36] = Cell::Player2; // e5
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Places one disc and flips every bounded run of opponent discs.
    /// Returns the captured indices in ascending order.
    ///
    /// Caller contract: the move is taken from a trusted transcript. A
    /// placement that captures nothing is still applied.
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<Vec<usize>> {
        let flips = self.captures_for(index, player)?;

        let disc = Cell::from(player);
        let captured = bitmask_to_indices(flips);
        for &pos in &captured {
            self.cells[pos] = disc;
        }
        self.cells[index] = disc;

        Ok(captured)
    }

    /// Computes the capture mask for `player` at `index` without mutating.
    pub fn captures_for(&self, index: usize, player: Player) -> Result<u64> {
        let occupant = self.get(index).ok_or(ReplayError::IndexOutOfRange(index))?;
        if occupant != Cell::Empty {
            return Err(ReplayError::IllegalMoveTarget { index, occupant });
        }

        let me = Cell::from(player);
        let opp = Cell::from(player.opponent());
        let (col, row) = pos_to_col_row(index);
        let mut flips = 0u64;

        for (dc, dr) in DIRECTIONS {
            let mut c = col + dc;
            let mut r = row + dr;
            let mut line = 0u64;

            while in_bounds(c, r) {
                let pos = (r as usize) * BOARD_SIZE + c as usize;
                let cell = self.cells[pos];
                if cell == opp {
                    line |= bit(pos);
                } else {
                    if cell == me {
                        flips |= line;
                    }
                    break;
                }

                c += dc;
                r += dr;
            }
        }

        Ok(flips)
    }

    /// Copies the current cells into a [`Record`].
    pub fn snapshot(&self, player: Player, move_index: usize, round: usize) -> Record {
        Record {
            cells: self.cells,
            player,
            move_index,
            round,
        }
    }

    /// Returns `(player1_count, player2_count)`.
    pub fn count(&self) -> (u8, u8) {
        self.cells
            .iter()
            .fold((0, 0), |(p1, p2), cell| match cell {
                Cell::Player1 => (p1 + 1, p2),
                Cell::Player2 => (p1, p2 + 1),
                Cell::Empty => (p1, p2),
            })
    }

    pub fn empty_count(&self) -> u8 {
        let (p1, p2) = self.count();
        BOARD_CELLS as u8 - p1 - p2
    }

    /// Player1 discs minus Player2 discs.
    pub fn differential(&self) -> i32 {
        self.cells.iter().map(|cell| cell.value() as i32).sum()
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  A B C D E F G H")?;
        for (row, line) in self.cells.chunks(BOARD_SIZE).enumerate() {
            write!(f, "{}", row + 1)?;
            for cell in line {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Player1 => 'X',
                    Cell::Player2 => 'O',
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn bit(pos: usize) -> u64 {
    if pos < BOARD_CELLS { 1u64 << pos } else { 0 }
}

fn pos_to_col_row(pos: usize) -> (i32, i32) {
    ((pos % BOARD_SIZE) as i32, (pos / BOARD_SIZE) as i32)
}

fn in_bounds(col: i32, row: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&col) && (0..BOARD_SIZE as i32).contains(&row)
}

fn bitmask_to_indices(mask: u64) -> Vec<usize> {
    let mut bits = mask;
    let mut out = Vec::new();

    while bits != 0 {
        out.push(bits.trailing_zeros() as usize);
        bits &= bits - 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;

    fn idx(text: &str) -> usize {
        coord::parse_index(text).unwrap()
    }

    fn board_with(discs: &[(&str, Player)]) -> Board {
        let mut cells = [Cell::Empty; BOARD_CELLS];
        for &(text, player) in discs {
            cells[idx(text)] = player.into();
        }
        Board::from_cells(cells)
    }

    #[test]
    fn initial_board_has_four_center_discs() {
        let board = Board::new();

        assert_eq!(board.get(idx("D4")), Some(Cell::Player2));
        assert_eq!(board.get(idx("E5")), Some(Cell::Player2));
        assert_eq!(board.get(idx("E4")), Some(Cell::Player1));
        assert_eq!(board.get(idx("D5")), Some(Cell::Player1));
        assert_eq!(board.count(), (2, 2));
        assert_eq!(board.empty_count(), 60);
        assert_eq!(board.differential(), 0);
    }

    #[test]
    fn t01_opening_move_flips_only_the_bounded_run() {
        let mut board = Board::new();

        let captured = board.apply_move(idx("D3"), Player::Black).unwrap();

        assert_eq!(captured, vec![idx("D4")]);
        assert_eq!(board.count(), (4, 1));
        assert_eq!(board.get(idx("D3")), Some(Cell::Player1));
        assert_eq!(board.get(idx("D4")), Some(Cell::Player1));
        assert_eq!(board.get(idx("E5")), Some(Cell::Player2));
    }

    #[test]
    fn t02_captures_union_across_directions() {
        // Black at D4 plays into a cross of white runs ending in black.
        let mut board = board_with(&[
            ("D3", Player::White),
            ("D2", Player::Black),
            ("C4", Player::White),
            ("B4", Player::Black),
            ("E5", Player::White),
            ("F6", Player::White),
            ("G7", Player::Black),
            ("E4", Player::White),
        ]);

        let captured = board.apply_move(idx("D4"), Player::Black).unwrap();

        let mut expected = vec![idx("D3"), idx("C4"), idx("E5"), idx("F6")];
        expected.sort_unstable();
        assert_eq!(captured, expected);
        // E4 run is unterminated.
        assert_eq!(board.get(idx("E4")), Some(Cell::Player2));
        assert_eq!(board.count(), (8, 1));
    }

    #[test]
    fn t03_unterminated_and_empty_runs_capture_nothing() {
        let mut board = board_with(&[
            ("B1", Player::White),
            ("C1", Player::White),
            ("A2", Player::Black),
        ]);

        let captured = board.apply_move(idx("A1"), Player::Black).unwrap();

        assert!(captured.is_empty());
        assert_eq!(board.get(idx("A1")), Some(Cell::Player1));
        assert_eq!(board.get(idx("B1")), Some(Cell::Player2));
    }

    #[test]
    fn t04_left_edge_scan_does_not_wrap_to_previous_row() {
        // From A2 a wrapping scan would land on H1 then G1.
        let mut board = board_with(&[("H1", Player::White), ("G1", Player::Black)]);

        let captured = board.apply_move(idx("A2"), Player::Black).unwrap();

        assert!(captured.is_empty());
        assert_eq!(board.get(idx("H1")), Some(Cell::Player2));
    }

    #[test]
    fn t05_right_edge_scan_does_not_wrap_to_next_row() {
        // From H2 a wrapping scan would land on A3 then B3.
        let mut board = board_with(&[("A3", Player::Black), ("B3", Player::White)]);

        let captured = board.apply_move(idx("H2"), Player::White).unwrap();

        assert!(captured.is_empty());
        assert_eq!(board.get(idx("A3")), Some(Cell::Player1));
    }

    #[test]
    fn t06_diagonal_scan_stops_at_edges() {
        // Up-right from H5 would wrap to A5 then B4 with index arithmetic.
        let mut board = board_with(&[("A5", Player::Black), ("B4", Player::White)]);

        let captured = board.apply_move(idx("H5"), Player::White).unwrap();

        assert!(captured.is_empty());
        assert_eq!(board.get(idx("A5")), Some(Cell::Player1));
        assert_eq!(board.count(), (1, 2));
    }

    #[test]
    fn occupied_target_is_rejected_without_mutation() {
        let mut board = Board::new();
        let before = board;

        let err = board.apply_move(idx("D4"), Player::Black).unwrap_err();

        assert_eq!(
            err,
            ReplayError::IllegalMoveTarget {
                index: idx("D4"),
                occupant: Cell::Player2,
            }
        );
        assert_eq!(board, before);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut board = Board::new();

        assert_eq!(
            board.apply_move(64, Player::Black),
            Err(ReplayError::IndexOutOfRange(64))
        );
    }

    #[test]
    fn snapshot_is_a_detached_copy() {
        let mut board = Board::new();
        let first = board.snapshot(Player::Black, 19, 0);
        let second = board.snapshot(Player::Black, 19, 0);
        assert_eq!(first, second);

        board.apply_move(idx("D3"), Player::Black).unwrap();

        assert_eq!(first.cells[idx("D4")], Cell::Player2);
        assert_ne!(board.snapshot(Player::Black, 19, 0), first);
    }

    #[test]
    fn display_labels_rows_and_columns() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "  A B C D E F G H");
        assert_eq!(lines[4], "4 . . . O X . . .");
        assert_eq!(lines[5], "5 . . . X O . . .");
    }
}
