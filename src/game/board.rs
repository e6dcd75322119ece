use std::fmt;

use crate::error::{BoardError, MoveError};

use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// The player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::Player1),
            Cell::Player2 => Some(Player::Player2),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Player1 => 'X',
            Cell::Player2 => 'O',
        }
    }
}

/// One position of a flattened line sequence: either a board cell or the
/// padding that lies off the board. Padding never matches a player, so runs
/// cannot wrap around a board edge or continue into the next line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Cell(Cell),
    Sentinel,
}

/// The four directions a winning run can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFamily {
    /// Each row, left to right.
    Rows,
    /// Each column, top to bottom.
    Columns,
    /// `\` diagonals, top-left to bottom-right.
    Backslash,
    /// `/` diagonals, top-right to bottom-left.
    Slash,
}

impl LineFamily {
    pub const ALL: [LineFamily; 4] = [
        LineFamily::Rows,
        LineFamily::Columns,
        LineFamily::Backslash,
        LineFamily::Slash,
    ];
}

/// A `rows x cols` grid where tokens fall to the lowest empty cell of a column.
///
/// Row 0 is the top row; row `rows - 1` is the bottom of every column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    win_length: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with the default run length of four.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Self::with_win_length(rows, cols, WIN_LENGTH)
    }

    /// Create an empty board that needs `win_length` tokens in a row to win.
    pub fn with_win_length(rows: usize, cols: usize, win_length: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        if win_length == 0 {
            return Err(BoardError::InvalidWinLength);
        }
        Ok(Board {
            rows,
            cols,
            win_length,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    /// The classic 6x7 board with a run length of four.
    pub fn standard() -> Self {
        Board {
            rows: ROWS,
            cols: COLS,
            win_length: WIN_LENGTH,
            cells: vec![Cell::Empty; ROWS * COLS],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Get the cell at a specific position, or an error if it lies off the board.
    pub fn try_get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::InvalidPosition {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cells[row * self.cols + col])
    }

    /// Get the cell at a specific position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        match self.try_get(row, col) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }

    /// Whether the cell at a position holds a token. Panics like [`Board::get`].
    pub fn occupied(&self, row: usize, col: usize) -> bool {
        !self.get(row, col).is_empty()
    }

    /// Whether another token fits in `col`, i.e. its top cell is still empty.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of range.
    pub fn is_column_placeable(&self, col: usize) -> bool {
        self.get(0, col).is_empty()
    }

    /// All columns that can still take a token, in ascending order.
    pub fn placeable_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| self.is_column_placeable(col))
            .collect()
    }

    /// Drop a token for `player` into `col`; returns the row where it landed.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of range. A full column is reported as
    /// [`MoveError::ColumnFull`] and leaves the board untouched.
    pub fn place(&mut self, player: Player, col: usize) -> Result<usize, MoveError> {
        if !self.is_column_placeable(col) {
            return Err(MoveError::ColumnFull { column: col });
        }

        // Find the lowest empty row in this column
        for row in (0..self.rows).rev() {
            let idx = row * self.cols + col;
            if self.cells[idx].is_empty() {
                self.cells[idx] = player.to_cell();
                return Ok(row);
            }
        }

        unreachable!("column {col} has an empty top cell but no empty cell");
    }

    /// Number of tokens on the board.
    pub fn token_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Copy of row `i`, left to right.
    pub fn row(&self, i: usize) -> Vec<Cell> {
        (0..self.cols).map(|col| self.get(i, col)).collect()
    }

    /// Copy of column `j`, top to bottom.
    pub fn col(&self, j: usize) -> Vec<Cell> {
        (0..self.rows).map(|row| self.get(row, j)).collect()
    }

    /// Check if the board is completely filled. Says nothing about wins.
    pub fn has_draw(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// The player owning a run of `win_length` tokens, if any.
    ///
    /// Player 1 is checked across every line family before Player 2.
    pub fn who_wins(&self) -> Option<Player> {
        let families: Vec<Vec<Slot>> = LineFamily::ALL
            .iter()
            .map(|&family| self.line_slots(family))
            .collect();

        Player::ALL.into_iter().find(|&player| {
            let target = Slot::Cell(player.to_cell());
            families
                .iter()
                .any(|slots| has_run(slots, target, self.win_length))
        })
    }

    /// Win first, then draw, otherwise the game goes on.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(player) = self.who_wins() {
            Some(GameOutcome::Winner(player))
        } else if self.has_draw() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.has_draw() || self.who_wins().is_some()
    }

    /// Flatten every line of a family into one sequence, each line followed
    /// by a sentinel.
    ///
    /// Diagonal lines are walked as if row `r` were shifted sideways by its
    /// offset and padded with sentinels, so every diagonal line has exactly
    /// `rows` slots and off-board positions are sentinels.
    pub fn line_slots(&self, family: LineFamily) -> Vec<Slot> {
        let diagonals = self.rows + self.cols - 1;
        let mut slots = Vec::new();

        match family {
            LineFamily::Rows => {
                for row in 0..self.rows {
                    slots.extend((0..self.cols).map(|col| Slot::Cell(self.get(row, col))));
                    slots.push(Slot::Sentinel);
                }
            }
            LineFamily::Columns => {
                for col in 0..self.cols {
                    slots.extend((0..self.rows).map(|row| Slot::Cell(self.get(row, col))));
                    slots.push(Slot::Sentinel);
                }
            }
            LineFamily::Backslash => {
                // Line k holds the cells with col - row == k - (rows - 1).
                for k in 0..diagonals {
                    for row in 0..self.rows {
                        let col = (k + row).checked_sub(self.rows - 1);
                        slots.push(self.slot_at(row, col));
                    }
                    slots.push(Slot::Sentinel);
                }
            }
            LineFamily::Slash => {
                // Line k holds the cells with row + col == k.
                for k in 0..diagonals {
                    for row in 0..self.rows {
                        slots.push(self.slot_at(row, k.checked_sub(row)));
                    }
                    slots.push(Slot::Sentinel);
                }
            }
        }

        slots
    }

    fn slot_at(&self, row: usize, col: Option<usize>) -> Slot {
        match col {
            Some(col) if col < self.cols => Slot::Cell(self.get(row, col)),
            _ => Slot::Sentinel,
        }
    }
}

/// Whether `slots` contains `len` consecutive copies of `target`.
fn has_run(slots: &[Slot], target: Slot, len: usize) -> bool {
    let mut count = 0;
    for &slot in slots {
        if slot == target {
            count += 1;
            if count >= len {
                return true;
            }
        } else {
            count = 0;
        }
    }
    false
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: Vec<String> = self.row(row).iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
