//! Winning line analysis for the 3x3 board

use crate::board::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Extract the cell contents of a line as an ordered triple
    pub fn line(cells: &[Cell; 9], indices: &[usize; 3]) -> [Cell; 3] {
        [cells[indices[0]], cells[indices[1]], cells[indices[2]]]
    }

    /// Find the first position that would immediately win for the player,
    /// scanning lines in the fixed `WINNING_LINES` order.
    pub fn first_winning_move(cells: &[Cell; 9], player: Player) -> Option<usize> {
        WINNING_LINES
            .iter()
            .find_map(|line| Self::winning_move_in_line(cells, player, line))
    }

    /// Check if a player has an immediate winning move available (2 in a line with 1 empty)
    pub fn has_immediate_win(cells: &[Cell; 9], player: Player) -> bool {
        Self::first_winning_move(cells, player).is_some()
    }

    /// Find the winning move position in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        // More than one empty cell, not a winning move
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None, // Opponent piece in line
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_has_won_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[4] = Cell::X;
        cells[8] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_line_extraction() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::O;

        let line = LineAnalyzer::line(&cells, &[0, 1, 2]);
        assert_eq!(line, [Cell::X, Cell::O, Cell::Empty]);
    }

    #[test]
    fn test_first_winning_move() {
        // X.X
        // ...
        // ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[2] = Cell::X;

        assert_eq!(LineAnalyzer::first_winning_move(&cells, Player::X), Some(1));
        assert_eq!(LineAnalyzer::first_winning_move(&cells, Player::O), None);
    }

    #[test]
    fn test_first_winning_move_scan_order() {
        // XX.
        // X..
        // ...
        // Both position 2 (top row) and position 6 (left column) complete a
        // line; the row comes first in the line enumeration.
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[3] = Cell::X;

        assert_eq!(LineAnalyzer::first_winning_move(&cells, Player::X), Some(2));
    }

    #[test]
    fn test_blocked_line_is_not_winning() {
        // XXO leaves nothing to complete on the top row
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::O;

        assert_eq!(LineAnalyzer::first_winning_move(&cells, Player::X), None);
    }

    #[test]
    fn test_has_immediate_win() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;

        assert!(LineAnalyzer::has_immediate_win(&cells, Player::X));
        assert!(!LineAnalyzer::has_immediate_win(&cells, Player::O));
    }

    #[test]
    fn test_no_immediate_win() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;

        assert!(!LineAnalyzer::has_immediate_win(&cells, Player::X));
        assert!(!LineAnalyzer::has_immediate_win(&cells, Player::O));
    }
}
