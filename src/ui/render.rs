//! ASCII board rendering.
//!
//! Each cell is 9 characters wide and 4 lines tall. Rows are labelled with
//! large digits on the left and columns along the bottom; squares on the path
//! show a knight tagged with its move number.

use crate::board::{Square, BOARD_SIZE};

use super::options::DisplayOptions;

const CELL_HEIGHT: usize = 4;
const EMPTY_CELL: &str = "         ";
const CELL_BORDER: &str = "+---------";
const LABEL_BORDER: &str = "---------";

const DIGITS: [[&str; CELL_HEIGHT]; 8] = [
    ["         ", "    |    ", "    |    ", "         "],
    ["   __    ", "   __|   ", "  |__    ", "         "],
    ["   __    ", "   __|   ", "   __|   ", "         "],
    ["         ", "  |__|   ", "     |   ", "         "],
    ["   __    ", "  |__    ", "   __|   ", "         "],
    ["   __    ", "  |__    ", "  |__|   ", "         "],
    ["   __    ", "     |   ", "     |   ", "         "],
    ["   __    ", "  |__|   ", "  |__|   ", "         "],
];

const KNIGHT: [&str; CELL_HEIGHT] = ["  __/\\  ", " /__  \\  ", "   /  |  ", "  /____\\ "];

fn digit_line(number: u8, line: usize) -> &'static str {
    DIGITS[usize::from(number - 1)][line]
}

fn knight_line(line: usize, move_number: usize, options: &DisplayOptions) -> String {
    let text = if line == 0 {
        // Paths are at most 6 moves long, so the number fits in one column.
        format!("{}{}", KNIGHT[0], move_number % 10)
    } else {
        KNIGHT[line].to_string()
    };
    if options.color {
        format!("\x1b[1;42m{text}\x1b[0m")
    } else {
        text
    }
}

fn push_border(out: &mut String) {
    out.push_str(LABEL_BORDER);
    for _ in 0..BOARD_SIZE {
        out.push_str(CELL_BORDER);
    }
    out.push_str("+\n");
}

/// Draw the board with a knight on every square of `path`, numbered by its
/// position in the sequence.
#[must_use]
pub fn render_board(path: &[Square], options: &DisplayOptions) -> String {
    let mut out = String::new();

    for row in 1..=BOARD_SIZE {
        push_border(&mut out);
        for line in 0..CELL_HEIGHT {
            out.push_str(digit_line(row, line));
            for column in 1..=BOARD_SIZE {
                out.push('|');
                let step = Square::new(column, row)
                    .and_then(|sq| path.iter().position(|&p| p == sq));
                match step {
                    Some(n) => out.push_str(&knight_line(line, n, options)),
                    None => out.push_str(EMPTY_CELL),
                }
            }
            out.push_str("|\n");
        }
    }
    push_border(&mut out);

    for line in 0..CELL_HEIGHT {
        out.push_str(EMPTY_CELL);
        out.push('|');
        for column in 1..=BOARD_SIZE {
            out.push_str(digit_line(column, line));
            out.push('|');
        }
        out.push('\n');
    }

    out
}
