//! Error types for board and path-finding operations.

use std::fmt;

use super::types::Square;

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Column or row outside 1-8
    OutOfRange { column: i32, row: i32 },
    /// Input is neither a `column,row` pair nor algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfRange { column, row } => {
                write!(f, "Square ({column}, {row}) is off the board (must be 1-8)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for path-finding failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Start or target coordinate outside 1-8 on either axis
    OutOfRange { column: i32, row: i32 },
    /// The search finished without reaching the target.
    ///
    /// The knight graph is connected, so this means the search result is
    /// corrupt or belongs to a different query.
    UnreachableTarget { start: Square, target: Square },
    /// A path must contain at least the start square
    EmptyPath,
    /// Two consecutive path squares are not one knight move apart
    NotAKnightMove { from: Square, to: Square },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::OutOfRange { column, row } => {
                write!(f, "Coordinate ({column}, {row}) is off the board (must be 1-8)")
            }
            PathError::UnreachableTarget { start, target } => {
                write!(f, "Target {target} was not reached from {start}")
            }
            PathError::EmptyPath => write!(f, "Path contains no squares"),
            PathError::NotAKnightMove { from, to } => {
                write!(f, "{from} -> {to} is not a knight move")
            }
        }
    }
}

impl std::error::Error for PathError {}

impl PathError {
    /// Convert a raw coordinate pair, reporting it as `OutOfRange` if it is off the board.
    pub(crate) fn check_square((column, row): (i32, i32)) -> Result<Square, PathError> {
        Square::try_from((column, row)).map_err(|_| PathError::OutOfRange { column, row })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_error_out_of_range() {
        let err = SquareError::OutOfRange { column: 9, row: 1 };
        assert!(err.to_string().contains("(9, 1)"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_path_error_out_of_range() {
        let err = PathError::OutOfRange { column: -2, row: 4 };
        assert!(err.to_string().contains("(-2, 4)"));
    }

    #[test]
    fn test_path_error_unreachable() {
        let err = PathError::UnreachableTarget {
            start: Square::new(1, 1).unwrap(),
            target: Square::new(8, 8).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("(1, 1)"));
        assert!(msg.contains("(8, 8)"));
    }

    #[test]
    fn test_check_square() {
        assert_eq!(
            PathError::check_square((0, 3)),
            Err(PathError::OutOfRange { column: 0, row: 3 })
        );
        assert_eq!(PathError::check_square((2, 3)), Ok(Square::new(2, 3).unwrap()));
    }

    #[test]
    fn test_path_error_not_a_knight_move() {
        let err = PathError::NotAKnightMove {
            from: Square::new(1, 1).unwrap(),
            to: Square::new(8, 8).unwrap(),
        };
        assert!(err.to_string().contains("(1, 1) -> (8, 8)"));
        assert!(PathError::EmptyPath.to_string().contains("no squares"));
    }

    #[test]
    fn test_error_clone() {
        let err = SquareError::OutOfRange { column: 10, row: 10 };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
