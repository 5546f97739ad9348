//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of columns (and rows) on the board.
pub const BOARD_SIZE: u8 = 8;

/// Number of squares on the board.
pub const NUM_SQUARES: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// A square on the chess board, represented as (column, row), both 1-based.
///
/// Squares can only be created through the checked constructors, so a
/// `Square` value is always on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Square(u8, u8); // (column, row)

#[inline]
const fn in_range(value: i32) -> bool {
    value >= 1 && value <= BOARD_SIZE as i32
}

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(column: u8, row: u8) -> Option<Self> {
        if column >= 1 && column <= BOARD_SIZE && row >= 1 && row <= BOARD_SIZE {
            Some(Square(column, row))
        } else {
            None
        }
    }

    /// Get the column (1-8, where 1 = file a)
    #[inline]
    #[must_use]
    pub const fn column(self) -> u8 {
        self.0
    }

    /// Get the row (1-8, where 1 = rank 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.1
    }

    /// Get the square's vertex index (0-63, column-major: (1,1)=0, (1,2)=1, ..., (8,8)=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 as usize - 1) * BOARD_SIZE as usize + (self.1 as usize - 1)
    }

    /// Create a square from a vertex index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < NUM_SQUARES {
            let size = BOARD_SIZE as usize;
            Some(Square((idx / size) as u8 + 1, (idx % size) as u8 + 1))
        } else {
            None
        }
    }

    /// The square displaced by `(d_column, d_row)`, if it is still on the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, d_column: i32, d_row: i32) -> Option<Self> {
        let column = self.0 as i32 + d_column;
        let row = self.1 as i32 + d_row;
        if in_range(column) && in_range(row) {
            Some(Square(column as u8, row as u8))
        } else {
            None
        }
    }

    /// All 64 squares in vertex order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES).filter_map(Square::from_index)
    }

    /// Algebraic name of the square, e.g. `a1` for (1, 1).
    #[must_use]
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (self.0 - 1 + b'a') as char, self.1)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = SquareError;

    fn try_from((column, row): (i32, i32)) -> Result<Self, Self::Error> {
        if in_range(column) && in_range(row) {
            Ok(Square(column as u8, row as u8))
        } else {
            Err(SquareError::OutOfRange { column, row })
        }
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((column, row): (u8, u8)) -> Result<Self, Self::Error> {
        Square::try_from((i32::from(column), i32::from(row)))
    }
}

impl From<Square> for (u8, u8) {
    fn from(sq: Square) -> Self {
        (sq.0, sq.1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Accepts either `"column,row"` (e.g. `"1,5"`) or algebraic notation (e.g. `"a5"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        if let Some((column, row)) = trimmed.split_once(',') {
            let column = column.trim().parse::<i32>().map_err(|_| invalid())?;
            let row = row.trim().parse::<i32>().map_err(|_| invalid())?;
            return Square::try_from((column, row));
        }

        let chars: Vec<char> = trimmed.chars().collect();
        if chars.len() != 2 {
            return Err(invalid());
        }

        let column = match chars[0].to_ascii_lowercase() {
            c @ 'a'..='h' => c as i32 - 'a' as i32 + 1,
            _ => return Err(invalid()),
        };

        let row = match chars[1] {
            c @ '1'..='8' => c as i32 - '0' as i32,
            _ => return Err(invalid()),
        };

        Square::try_from((column, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_off_board() {
        assert!(Square::new(0, 1).is_none());
        assert!(Square::new(1, 9).is_none());
        assert_eq!(Square::new(8, 8).map(Square::index), Some(63));
    }

    #[test]
    fn test_index_is_column_major() {
        assert_eq!(Square::new(1, 1).map(Square::index), Some(0));
        assert_eq!(Square::new(1, 2).map(Square::index), Some(1));
        assert_eq!(Square::new(2, 1).map(Square::index), Some(8));
        for idx in 0..NUM_SQUARES {
            let sq = Square::from_index(idx).unwrap();
            assert_eq!(sq.index(), idx);
        }
        assert!(Square::from_index(NUM_SQUARES).is_none());
    }

    #[test]
    fn test_all_yields_every_square_once() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), NUM_SQUARES);
        assert!(squares.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Square::new(1, 1).unwrap();
        assert_eq!(corner.offset(2, 1), Square::new(3, 2));
        assert_eq!(corner.offset(-1, 2), None);
        assert_eq!(corner.offset(1, -2), None);
    }

    #[test]
    fn test_try_from_out_of_range() {
        assert_eq!(
            Square::try_from((9, 1)),
            Err(SquareError::OutOfRange { column: 9, row: 1 })
        );
        assert_eq!(
            Square::try_from((3, -1)),
            Err(SquareError::OutOfRange { column: 3, row: -1 })
        );
        assert_eq!(Square::try_from((3, 4)), Ok(Square::new(3, 4).unwrap()));
    }

    #[test]
    fn test_parse_comma_pair() {
        assert_eq!("1,5".parse::<Square>(), Ok(Square::new(1, 5).unwrap()));
        assert_eq!(" 8 , 2 ".parse::<Square>(), Ok(Square::new(8, 2).unwrap()));
        assert_eq!(
            "0,5".parse::<Square>(),
            Err(SquareError::OutOfRange { column: 0, row: 5 })
        );
        assert!(matches!(
            "x,5".parse::<Square>(),
            Err(SquareError::InvalidNotation { .. })
        ));
    }

    #[test]
    fn test_parse_algebraic() {
        assert_eq!("a1".parse::<Square>(), Ok(Square::new(1, 1).unwrap()));
        assert_eq!("H8".parse::<Square>(), Ok(Square::new(8, 8).unwrap()));
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("".parse::<Square>().is_err());
    }

    #[test]
    fn test_display_and_algebraic() {
        let sq = Square::new(3, 7).unwrap();
        assert_eq!(sq.to_string(), "(3, 7)");
        assert_eq!(sq.to_algebraic(), "c7");
    }
}
