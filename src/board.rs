//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines::LineAnalyzer;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Compact character form used by [`BoardState::encode`]
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Complete board state including cells and whose turn it is
///
/// This type implements `Copy` since it's only 10 bytes, so hypothetical
/// moves during search are plain value copies with no shared mutation.
/// `make_move` returns a new state and leaves the original unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Create a new empty board with a specified player to move first
    pub fn new_with_player(first_player: Player) -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: first_player,
        }
    }

    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; 9], crate::Error> {
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    fn determine_turn_from_counts(count: &PieceCount) -> Result<Player, crate::Error> {
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else if count.o == count.x + 1 {
            Ok(Player::X)
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters (whitespace is filtered
    /// out) and may optionally include a suffix `_X` or `_O` to explicitly
    /// set the player to move. When the suffix is omitted, the player is
    /// inferred from the piece counts, defaulting to X-first semantics.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board part has fewer than 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts differ by more than 1
    /// - Both players hold a complete winning line
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (board_part, specified_turn) = Self::split_board_and_turn(&cleaned)?;
        let chars: Vec<char> = board_part.chars().collect();
        let cells = Self::parse_cells(&chars, s)?;
        let count = Self::count_pieces(&cells);

        if count.x.abs_diff(count.o) > 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        let to_move = match specified_turn {
            Some(turn) => turn,
            None => Self::determine_turn_from_counts(&count)?,
        };

        let board = BoardState { cells, to_move };
        if board.has_won(Player::X) && board.has_won(Player::O) {
            return Err(crate::Error::InvalidBoard {
                context: s.to_string(),
                reason: "both players cannot have winning lines".to_string(),
            });
        }

        Ok(board)
    }

    fn split_board_and_turn(cleaned: &str) -> Result<(&str, Option<Player>), crate::Error> {
        if let Some(idx) = cleaned.find('_') {
            let board = &cleaned[..idx];
            let suffix = &cleaned[idx + 1..];
            let player = match suffix {
                "X" => Player::X,
                "O" => Player::O,
                _ => {
                    return Err(crate::Error::InvalidPlayerString {
                        player: suffix.to_string(),
                        context: cleaned.to_string(),
                    });
                }
            };
            Ok((board, Some(player)))
        } else {
            Ok((cleaned, None))
        }
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Get legal moves in this position (empty cells when game not terminal)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Make a move and return a new board state
    ///
    /// # Errors
    ///
    /// Returns error if the game is already over, the position is out of
    /// bounds, or the cell is occupied.
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<BoardState, crate::Error> {
        if self.is_terminal() {
            return Err(crate::Error::GameOver);
        }

        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }

        if !self.is_empty(pos) {
            return Err(crate::Error::OccupiedCell { position: pos });
        }

        let mut new_state = *self;
        new_state.cells[pos] = self.to_move.to_cell();
        new_state.to_move = self.to_move.opponent();
        Ok(new_state)
    }

    /// Get the contents of a line as an ordered triple
    pub fn line(&self, indices: &[usize; 3]) -> [Cell; 3] {
        LineAnalyzer::line(&self.cells, indices)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check if any player has a complete winning line
    pub fn has_winner(&self) -> bool {
        self.winner().is_some()
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.has_winner() || !self.cells.contains(&Cell::Empty)
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winner().is_none()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Get a compact string representation for use as a key
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells.iter().map(|&c| c.to_char()).collect::<String>(),
            self.to_move
        )
    }

    /// Render the board as a 3x3 grid with `" | "` separators and dashed
    /// dividers; empty cells render as a space.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            if row > 0 {
                out.push_str("---------\n");
            }
            for col in 0..3 {
                if col > 0 {
                    out.push_str(" | ");
                }
                out.push(match self.cells[row * 3 + col] {
                    Cell::Empty => ' ',
                    c => c.to_char(),
                });
            }
            out.push('\n');
        }
        out
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
