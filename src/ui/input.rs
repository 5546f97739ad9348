//! Prompting and reading user input.

use std::io::{self, BufRead, Write};

use crate::board::{Square, SquareError};

/// Which end of the path is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Initial,
    Target,
}

impl Endpoint {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Endpoint::Initial => "initial",
            Endpoint::Target => "target",
        }
    }
}

/// Parse one line of user input into a square.
///
/// # Errors
///
/// See [`Square::from_str`](std::str::FromStr).
pub fn parse_square(line: &str) -> Result<Square, SquareError> {
    line.trim().parse()
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Ask for a square until the user enters one on the board.
///
/// Returns `Ok(None)` when input is exhausted.
pub fn prompt_square<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    endpoint: Endpoint,
) -> io::Result<Option<Square>> {
    loop {
        writeln!(
            output,
            "Please specify the {} position of your Knight as two comma separated integers \
             between 1 and 8 (e.g. '1,5'):",
            endpoint.label()
        )?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        match parse_square(&line) {
            Ok(sq) => {
                #[cfg(feature = "logging")]
                log::debug!("{} square {sq}", endpoint.label());
                return Ok(Some(sq));
            }
            Err(_e) => {
                #[cfg(feature = "logging")]
                log::warn!("rejected {} input: {_e}", endpoint.label());
                writeln!(
                    output,
                    "The {} coordinates entered do not fall on the gameboard. Try again...",
                    endpoint.label()
                )?;
            }
        }
    }
}

/// Ask whether to run another query. Only `y` or `yes` count as agreement.
pub fn prompt_again<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    writeln!(
        output,
        "Would you like to find a path for a different set of start and end points? \
         ('y' for yes, anything else for no)"
    )?;
    output.flush()?;
    let answer = read_line(input)?.unwrap_or_default();
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_square() {
        assert_eq!(parse_square("3,4\n"), Ok(Square::new(3, 4).unwrap()));
        assert_eq!(parse_square("e2"), Ok(Square::new(5, 2).unwrap()));
        assert!(parse_square("9,9").is_err());
        assert!(parse_square("hello").is_err());
    }

    #[test]
    fn test_prompt_retries_until_valid() {
        let mut input = Cursor::new("0,0\nabc\n2,7\n");
        let mut output = Vec::new();
        let sq = prompt_square(&mut input, &mut output, Endpoint::Target).unwrap();
        assert_eq!(sq, Square::new(2, 7));
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Please specify the target position").count(), 3);
        assert_eq!(
            text.matches("The target coordinates entered do not fall on the gameboard")
                .count(),
            2
        );
    }

    #[test]
    fn test_prompt_eof() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let sq = prompt_square(&mut input, &mut output, Endpoint::Initial).unwrap();
        assert_eq!(sq, None);
    }

    #[test]
    fn test_prompt_again() {
        let mut output = Vec::new();
        assert!(prompt_again(&mut Cursor::new("Y\n"), &mut output).unwrap());
        assert!(prompt_again(&mut Cursor::new("yes\n"), &mut output).unwrap());
        assert!(!prompt_again(&mut Cursor::new("nope\n"), &mut output).unwrap());
        assert!(!prompt_again(&mut Cursor::new(""), &mut output).unwrap());
    }
}
