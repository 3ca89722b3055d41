use std::fmt;

/// Side length of the board.
pub const LENGTH: usize = 3;
/// Number of cells on the board.
pub const NUM_CELLS: usize = LENGTH * LENGTH;
/// Size of the state space, `3^9`. Every grid assignment has an id below this.
pub const NUM_STATES: usize = 19_683;

/// Base-3 encoding of a full grid, see [`Board::encode_state`].
pub type StateId = usize;

/// A mark a player puts on the board.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// Both symbols, X first.
    pub const ALL: [Symbol; 2] = [Symbol::X, Symbol::O];

    pub fn opponent(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Digit of this symbol in the state encoding. Empty cells are 0.
    pub fn digit(self) -> usize {
        match self {
            Symbol::X => 1,
            Symbol::O => 2,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::X => write!(f, "x"),
            Symbol::O => write!(f, "o"),
        }
    }
}

/// Contents of every cell, indexed `[row][column]`.
pub type Grid = [[Option<Symbol>; LENGTH]; LENGTH];

const ROWS_AND_COLUMNS: [[(usize, usize); LENGTH]; 6] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
];

const DIAGONALS: [[(usize, usize); LENGTH]; 2] =
    [[(0, 0), (1, 1), (2, 2)], [(0, 2), (1, 1), (2, 0)]];

/// The 3x3 tic-tac-toe environment.
///
/// Terminal status and winner are computed lazily by [`Board::is_terminal`] and
/// cached once the game has ended. [`Board::place`] does not invalidate the
/// cache; only a forced recalculation does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    grid: Grid,
    ended: bool,
    winner: Option<Symbol>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board holding an arbitrary grid, legal or not.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            ended: false,
            winner: None,
        }
    }

    /// Inverse of [`Board::encode_state`].
    ///
    /// # Panics
    ///
    /// Panics if `state` is not below [`NUM_STATES`].
    pub fn from_state(state: StateId) -> Self {
        assert!(state < NUM_STATES, "state {state} is out of range");
        let mut grid: Grid = [[None; LENGTH]; LENGTH];
        let mut rest = state;
        for cell in grid.iter_mut().flatten() {
            *cell = match rest % 3 {
                0 => None,
                1 => Some(Symbol::X),
                _ => Some(Symbol::O),
            };
            rest /= 3;
        }
        Self::from_grid(grid)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, i: usize, j: usize) -> Option<Symbol> {
        self.grid[i][j]
    }

    /// # Panics
    ///
    /// Panics if `i` or `j` is not below [`LENGTH`].
    pub fn is_empty(&self, i: usize, j: usize) -> bool {
        self.grid[i][j].is_none()
    }

    /// Puts `symbol` on `(i, j)`.
    ///
    /// The caller must have checked that the cell is empty; overwriting a mark
    /// leaves the board in a state no game can reach.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not below [`LENGTH`].
    pub fn place(&mut self, i: usize, j: usize, symbol: Symbol) {
        self.grid[i][j] = Some(symbol);
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        (0..LENGTH)
            .flat_map(|i| (0..LENGTH).map(move |j| (i, j)))
            .filter(|&(i, j)| self.is_empty(i, j))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.grid.iter().flatten().all(|cell| cell.is_some())
    }

    /// Base-3 number whose `k`-th digit (row-major, weight `3^k`) is the digit
    /// of cell `k`: 0 empty, 1 X, 2 O.
    pub fn encode_state(&self) -> StateId {
        let mut state = 0;
        let mut weight = 1;
        for cell in self.grid.iter().flatten() {
            state += weight * cell.map_or(0, Symbol::digit);
            weight *= 3;
        }
        state
    }

    /// State that placing `symbol` on the empty cell `(i, j)` would produce.
    /// The board is left untouched.
    pub fn state_after(&self, i: usize, j: usize, symbol: Symbol) -> StateId {
        self.encode_state() + symbol.digit() * 3usize.pow((i * LENGTH + j) as u32)
    }

    /// Symbol owning a complete line, computed from the grid alone.
    pub fn winning_symbol_if_any(&self) -> Option<Symbol> {
        let owned_by = |line: &[(usize, usize); LENGTH], symbol: Symbol| {
            line.iter().all(|&(i, j)| self.grid[i][j] == Some(symbol))
        };

        // The scan order picks the winner on impossible boards where both
        // symbols complete a line.
        for line in &ROWS_AND_COLUMNS {
            for symbol in Symbol::ALL {
                if owned_by(line, symbol) {
                    return Some(symbol);
                }
            }
        }
        for symbol in Symbol::ALL {
            for line in &DIAGONALS {
                if owned_by(line, symbol) {
                    return Some(symbol);
                }
            }
        }
        None
    }

    /// Whether the game is over, by a completed line or a full board.
    ///
    /// A positive answer is cached together with the winner. Pass
    /// `force_recalculate` after writing cells without going through a game.
    pub fn is_terminal(&mut self, force_recalculate: bool) -> bool {
        if self.ended && !force_recalculate {
            return true;
        }

        self.winner = self.winning_symbol_if_any();
        self.ended = self.winner.is_some() || self.is_full();
        self.ended
    }

    /// Winner recorded by the last [`Board::is_terminal`] evaluation.
    pub fn winner(&self) -> Option<Symbol> {
        self.winner
    }

    pub fn is_draw(&mut self) -> bool {
        self.is_terminal(false) && self.winner.is_none()
    }

    /// 1.0 if the game is over and `symbol` won, 0.0 otherwise. A game still in
    /// progress also yields 0.0, so check terminality first.
    pub fn reward(&mut self, symbol: Symbol) -> f64 {
        if self.is_terminal(false) && self.winner == Some(symbol) {
            1.0
        } else {
            0.0
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::display::render(self))
    }
}
