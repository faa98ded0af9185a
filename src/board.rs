//! Sliding tile board representation and operations.
//!
//! A [`Board`] is an immutable snapshot of one N-by-N tile configuration,
//! stored as a flat row-major grid of `u8` values with 0 marking the blank.
//! Every operation that "moves" a tile returns a new board; two boards
//! compare equal exactly when their dimension and full grids match.

use std::fmt;
use std::str::FromStr;

/// Largest supported board side length.
///
/// Keeps every tile value and cell index within `u8`, and bounds the solver
/// to puzzle sizes it can realistically finish.
pub const MAX_DIM: usize = 16;

/// Errors from constructing or parsing a board.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("unsupported dimension {0}, expected 2 to {MAX_DIM}")]
    UnsupportedDimension(usize),

    #[error("a {dim}x{dim} board needs {expected} tiles, got {got}")]
    WrongTileCount {
        dim: usize,
        expected: usize,
        got: usize,
    },

    #[error("tile value {value} is outside 0..={max}")]
    TileOutOfRange { value: u32, max: u32 },

    #[error("tile value {0} appears more than once")]
    DuplicateTile(u32),

    #[error("board text is missing the dimension line")]
    MissingDimension,

    #[error("invalid number in board text: {0}")]
    BadNumber(#[from] std::num::ParseIntError),
}

/// One configuration of an N-by-N sliding tile puzzle.
///
/// The goal configuration for dimension n holds k+1 at cell k, except the
/// last cell, which holds the blank.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    dim: u8,
    /// Row-major tile values, 0 for the blank.
    tiles: Box<[u8]>,
    /// Cached index of the blank cell; always agrees with `tiles`.
    blank: u8,
}

impl Board {
    /// Builds a board from row-major tile values.
    ///
    /// The values must form a permutation of `0..dim*dim`; anything else is
    /// rejected with a descriptive error.
    pub fn new(dim: usize, tiles: &[u32]) -> Result<Self, BoardError> {
        if !(2..=MAX_DIM).contains(&dim) {
            return Err(BoardError::UnsupportedDimension(dim));
        }
        let cells = dim * dim;
        if tiles.len() != cells {
            return Err(BoardError::WrongTileCount {
                dim,
                expected: cells,
                got: tiles.len(),
            });
        }

        let mut seen = [false; MAX_DIM * MAX_DIM];
        let mut grid = Vec::with_capacity(cells);
        let mut blank = 0;
        for (idx, &value) in tiles.iter().enumerate() {
            if value as usize >= cells {
                return Err(BoardError::TileOutOfRange {
                    value,
                    max: cells as u32 - 1,
                });
            }
            if seen[value as usize] {
                return Err(BoardError::DuplicateTile(value));
            }
            seen[value as usize] = true;
            if value == 0 {
                blank = idx;
            }
            grid.push(value as u8);
        }

        Ok(Self {
            dim: dim as u8,
            tiles: grid.into_boxed_slice(),
            blank: blank as u8,
        })
    }

    /// The solved configuration for a dimension.
    pub fn goal(dim: usize) -> Result<Self, BoardError> {
        if !(2..=MAX_DIM).contains(&dim) {
            return Err(BoardError::UnsupportedDimension(dim));
        }
        let mut tiles: Vec<u32> = (1..(dim * dim) as u32).collect();
        tiles.push(0);
        Self::new(dim, &tiles)
    }

    /// Side length of the grid.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dim as usize
    }

    /// Number of tiles that are not on their goal cell, ignoring the blank.
    pub fn hamming(&self) -> u32 {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(idx, &value)| value != 0 && value != self.goal_value(idx))
            .count() as u32
    }

    /// Sum over all tiles of the row plus column distance to the goal cell,
    /// ignoring the blank.
    pub fn manhattan(&self) -> u32 {
        let n = self.dim as usize;
        let mut distance = 0;
        for (idx, &value) in self.tiles.iter().enumerate() {
            if value == 0 {
                continue;
            }
            let goal = value as usize - 1;
            distance += ((idx / n).abs_diff(goal / n) + (idx % n).abs_diff(goal % n)) as u32;
        }
        distance
    }

    /// Does every cell hold its goal value?
    pub fn is_goal(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(idx, &value)| value == self.goal_value(idx))
    }

    /// A board with one adjacent pair of non-blank tiles exchanged.
    ///
    /// The pair is the first adjacent non-blank pair in row-major scan
    /// order, so the choice is deterministic and the blank never moves,
    /// making the transform an involution. A board is solvable exactly when
    /// its twin is not, which the solver exploits to detect unsolvable
    /// inputs.
    pub fn twin(&self) -> Self {
        let n = self.dim as usize;
        for row in 0..n {
            for col in 0..n - 1 {
                let a = row * n + col;
                if self.tiles[a] != 0 && self.tiles[a + 1] != 0 {
                    return self.with_swapped(a, a + 1);
                }
            }
        }
        unreachable!("any board of dimension 2 or more has an adjacent non-blank pair")
    }

    /// Iterates over the boards one blank move away.
    ///
    /// Order is fixed: the tile above the blank slides down first, then the
    /// one below slides up, then left, then right, skipping directions that
    /// leave the grid. Every board has at least two neighbors.
    pub fn neighbors(&self) -> Neighbors<'_> {
        Neighbors {
            board: self,
            moves: BLANK_MOVES.iter(),
        }
    }

    /// Goal value for a cell index.
    #[inline]
    fn goal_value(&self, idx: usize) -> u8 {
        if idx == self.tiles.len() - 1 {
            0
        } else {
            (idx + 1) as u8
        }
    }

    /// A copy of this board with two cells exchanged.
    fn with_swapped(&self, a: usize, b: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(a, b);
        let blank = if tiles[a] == 0 {
            a
        } else if tiles[b] == 0 {
            b
        } else {
            self.blank as usize
        };
        Self {
            dim: self.dim,
            tiles,
            blank: blank as u8,
        }
    }
}

/// Offsets the blank may move by, as (row, column) deltas.
const BLANK_MOVES: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Lazy iterator over the legal successor boards of one configuration.
///
/// Restartable by calling [`Board::neighbors`] again; boards are built on
/// demand.
pub struct Neighbors<'a> {
    board: &'a Board,
    moves: std::slice::Iter<'static, (i32, i32)>,
}

impl Iterator for Neighbors<'_> {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        let n = self.board.dim as i32;
        let blank = self.board.blank as i32;
        let (row, col) = (blank / n, blank % n);
        for &(dr, dc) in self.moves.by_ref() {
            let (r, c) = (row + dr, col + dc);
            if (0..n).contains(&r) && (0..n).contains(&c) {
                return Some(self.board.with_swapped(blank as usize, (r * n + c) as usize));
            }
        }
        None
    }
}

impl fmt::Display for Board {
    /// Writes the dimension line followed by one space-separated row per
    /// line. Parsing this text back yields an equal board.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.dim)?;
        for row in self.tiles.chunks(self.dim as usize) {
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses the text format: the dimension, then dim*dim row-major tile
    /// values, separated by any whitespace (trailing spaces included).
    fn from_str(s: &str) -> Result<Self, BoardError> {
        let mut tokens = s.split_whitespace();
        let dim: usize = tokens.next().ok_or(BoardError::MissingDimension)?.parse()?;
        let tiles: Vec<u32> = tokens
            .map(str::parse)
            .collect::<Result<_, std::num::ParseIntError>>()?;
        Self::new(dim, &tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn board(dim: usize, tiles: &[u32]) -> Board {
        Board::new(dim, tiles).expect("valid test board")
    }

    fn arb_board(max_dim: usize) -> impl Strategy<Value = Board> {
        (2usize..=max_dim).prop_flat_map(|dim| {
            let tiles: Vec<u32> = (0..(dim * dim) as u32).collect();
            Just(tiles)
                .prop_shuffle()
                .prop_map(move |tiles| Board::new(dim, &tiles).expect("shuffled permutation"))
        })
    }

    #[test]
    fn test_goal_layout() {
        let goal = Board::goal(3).unwrap();
        assert_eq!(goal.to_string(), "3\n1 2 3\n4 5 6\n7 8 0\n");
        assert!(goal.is_goal());
        assert_eq!(goal.dimension(), 3);
    }

    #[test]
    fn test_heuristics_on_classic_instance() {
        let b = board(3, &[8, 1, 3, 4, 0, 2, 7, 6, 5]);
        assert_eq!(b.hamming(), 5);
        assert_eq!(b.manhattan(), 10);
        assert!(!b.is_goal());
    }

    #[test]
    fn test_twin_swaps_first_adjacent_pair() {
        let goal = Board::goal(3).unwrap();
        assert_eq!(goal.twin(), board(3, &[2, 1, 3, 4, 5, 6, 7, 8, 0]));

        // blank splits the top row, so the scan moves past it
        let b = board(3, &[1, 0, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(b.twin(), board(3, &[1, 0, 2, 4, 3, 5, 6, 7, 8]));
    }

    #[test]
    fn test_twin_with_blank_in_top_row_of_2x2() {
        let b = board(2, &[0, 1, 2, 3]);
        assert_eq!(b.twin(), board(2, &[0, 1, 3, 2]));
    }

    #[test]
    fn test_neighbors_order_from_center_blank() {
        let b = board(3, &[1, 2, 3, 4, 0, 5, 7, 8, 6]);
        let expected = [
            board(3, &[1, 0, 3, 4, 2, 5, 7, 8, 6]),
            board(3, &[1, 2, 3, 4, 8, 5, 7, 0, 6]),
            board(3, &[1, 2, 3, 0, 4, 5, 7, 8, 6]),
            board(3, &[1, 2, 3, 4, 5, 0, 7, 8, 6]),
        ];
        let got: Vec<Board> = b.neighbors().collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_neighbors_from_corner_blank() {
        let b = board(2, &[0, 1, 2, 3]);
        let expected = [board(2, &[2, 1, 0, 3]), board(2, &[1, 0, 2, 3])];
        let got: Vec<Board> = b.neighbors().collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_rejects_malformed_grids() {
        assert!(matches!(
            Board::new(1, &[0]),
            Err(BoardError::UnsupportedDimension(1))
        ));
        assert!(matches!(
            Board::new(17, &[]),
            Err(BoardError::UnsupportedDimension(17))
        ));
        assert!(matches!(
            Board::new(2, &[0, 1, 2]),
            Err(BoardError::WrongTileCount { expected: 4, got: 3, .. })
        ));
        assert!(matches!(
            Board::new(2, &[0, 1, 2, 4]),
            Err(BoardError::TileOutOfRange { value: 4, max: 3 })
        ));
        assert!(matches!(
            Board::new(2, &[0, 1, 2, 2]),
            Err(BoardError::DuplicateTile(2))
        ));
    }

    #[test]
    fn test_parse_tolerates_loose_whitespace() {
        let text = "3\n 1 2 3 \n4 5 6 \n7 8 0 \n";
        let parsed: Board = text.parse().unwrap();
        assert_eq!(parsed, Board::goal(3).unwrap());
    }

    #[test]
    fn test_parse_failures() {
        assert!(matches!(
            "".parse::<Board>(),
            Err(BoardError::MissingDimension)
        ));
        assert!(matches!(
            "3\n1 2 x\n4 5 6\n7 8 0".parse::<Board>(),
            Err(BoardError::BadNumber(_))
        ));
        assert!(matches!(
            "2\n1 2 3".parse::<Board>(),
            Err(BoardError::WrongTileCount { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_equality_is_structural(b in arb_board(4)) {
            prop_assert_eq!(&b, &b.clone());
        }

        #[test]
        fn prop_twin_differs_and_inverts(b in arb_board(4)) {
            let twin = b.twin();
            prop_assert_ne!(&twin, &b);
            prop_assert_eq!(&twin.twin(), &b);
        }

        #[test]
        fn prop_heuristics_vanish_only_at_goal(b in arb_board(4)) {
            prop_assert_eq!(b.hamming() == 0, b.is_goal());
            prop_assert_eq!(b.manhattan() == 0, b.is_goal());
        }

        #[test]
        fn prop_manhattan_dominates_hamming(b in arb_board(4)) {
            prop_assert!(b.manhattan() >= b.hamming());
        }

        #[test]
        fn prop_text_round_trip(b in arb_board(4)) {
            let reparsed: Board = b.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, b);
        }

        #[test]
        fn prop_neighbor_moves_are_mutual(b in arb_board(4)) {
            let neighbors: Vec<Board> = b.neighbors().collect();
            prop_assert!((2..=4).contains(&neighbors.len()));
            for neighbor in neighbors {
                prop_assert_ne!(&neighbor, &b);
                prop_assert!(neighbor.neighbors().any(|back| back == b));
            }
        }
    }
}
