//! Interactive terminal front end.
//!
//! Reads start and target squares, draws the board and prints the shortest
//! knight path. All I/O goes through generic readers and writers so sessions
//! can be scripted in tests.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{KnightGraph, KnightPath, PathError, Square};

pub mod input;
pub mod options;
pub mod render;

pub use input::{parse_square, prompt_again, prompt_square, Endpoint};
pub use options::{DisplayOptions, OptionAction, OptionError, USAGE};
pub use render::render_board;

const WELCOME: &str = "Welcome to Knight Moves, please make sure that your terminal window is wide \
enough to fit the full chessboard width on.\nThe outputs will look weird if you don't!";

const FAREWELL: &str = "Ok, thanks for stopping by!!";

/// Error type for an interactive session
#[derive(Debug)]
pub enum SessionError {
    /// Reading input or writing output failed
    Io(io::Error),
    /// Path search failed
    Path(PathError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Io(e) => write!(f, "I/O error: {e}"),
            SessionError::Path(e) => write!(f, "Path search failed: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io(e) => Some(e),
            SessionError::Path(e) => Some(e),
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        SessionError::Io(e)
    }
}

impl From<PathError> for SessionError {
    fn from(e: PathError) -> Self {
        SessionError::Path(e)
    }
}

/// Summary form of a square, e.g. `[1, 5]`.
fn bracketed(sq: Square) -> String {
    format!("[{}, {}]", sq.column(), sq.row())
}

/// Print the move-by-move summary for a path.
pub fn write_summary<W: Write>(output: &mut W, path: &KnightPath) -> io::Result<()> {
    writeln!(
        output,
        "The path from {} to {} requires a minimum of {} moves. These are as follows:",
        bracketed(path.start()),
        bracketed(path.target()),
        path.moves()
    )?;
    for &sq in path {
        writeln!(output, "{}", bracketed(sq))?;
    }
    Ok(())
}

fn draw<W: Write>(output: &mut W, squares: &[Square], options: &DisplayOptions) -> io::Result<()> {
    if options.draw_board {
        output.write_all(render_board(squares, options).as_bytes())?;
    }
    Ok(())
}

/// Run one start/target query. Returns `Ok(None)` if input ran out first.
fn run_query<R: BufRead, W: Write>(
    graph: &KnightGraph,
    input: &mut R,
    output: &mut W,
    options: &DisplayOptions,
) -> Result<Option<KnightPath>, SessionError> {
    let Some(start) = prompt_square(input, output, Endpoint::Initial)? else {
        return Ok(None);
    };
    draw(output, &[start], options)?;

    let Some(target) = prompt_square(input, output, Endpoint::Target)? else {
        return Ok(None);
    };

    let path = graph.shortest_path(start, target)?;
    #[cfg(feature = "logging")]
    log::debug!("path {start} -> {target}: {} moves", path.moves());

    draw(output, path.as_slice(), options)?;
    write_summary(output, &path)?;
    Ok(Some(path))
}

/// Drive a full session over arbitrary input and output streams.
///
/// # Errors
///
/// Returns [`SessionError::Io`] if the streams fail and
/// [`SessionError::Path`] if the search cannot reach the target.
pub fn run_session<R: BufRead, W: Write>(
    graph: &KnightGraph,
    input: &mut R,
    output: &mut W,
    options: &DisplayOptions,
) -> Result<(), SessionError> {
    writeln!(output)?;
    writeln!(output, "{WELCOME}")?;
    writeln!(output)?;

    loop {
        if run_query(graph, input, output, options)?.is_none() {
            break;
        }
        if !prompt_again(input, output)? {
            break;
        }
    }

    writeln!(output, "{FAREWELL}")?;
    output.flush()?;
    Ok(())
}

/// Run an interactive session on stdin/stdout using the shared graph.
///
/// # Errors
///
/// See [`run_session`].
pub fn run(options: &DisplayOptions) -> Result<(), SessionError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(
        KnightGraph::shared(),
        &mut stdin.lock(),
        &mut stdout.lock(),
        options,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(script: &str, options: DisplayOptions) -> String {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        run_session(KnightGraph::shared(), &mut input, &mut output, &options).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn text_only() -> DisplayOptions {
        DisplayOptions {
            color: false,
            draw_board: false,
        }
    }

    #[test]
    fn test_single_query() {
        let out = session("1,1\n8,8\nn\n", text_only());
        assert!(out.contains(
            "The path from [1, 1] to [8, 8] requires a minimum of 6 moves. These are as follows:"
        ));
        assert!(out.contains("[1, 1]\n[3, 2]\n[5, 3]\n[7, 4]\n[8, 6]\n[6, 7]\n[8, 8]\n"));
        assert!(out.trim_end().ends_with(FAREWELL));
    }

    #[test]
    fn test_replay_runs_second_query() {
        let out = session("1,1\n2,3\ny\n4,4\n4,4\nno\n", text_only());
        assert!(out.contains("requires a minimum of 1 moves"));
        assert!(out.contains("from [4, 4] to [4, 4] requires a minimum of 0 moves"));
        assert_eq!(out.matches("Would you like to find a path").count(), 2);
    }

    #[test]
    fn test_invalid_target_reprompts() {
        let out = session("1,1\n9,1\n2,3\n", text_only());
        assert!(out.contains("The target coordinates entered do not fall on the gameboard"));
        assert!(out.contains("requires a minimum of 1 moves"));
    }

    #[test]
    fn test_eof_mid_query_ends_cleanly() {
        let out = session("1,1\n", text_only());
        assert!(!out.contains("requires a minimum"));
        assert!(out.trim_end().ends_with(FAREWELL));
    }

    #[test]
    fn test_board_is_drawn_twice_per_query() {
        let options = DisplayOptions {
            color: false,
            draw_board: true,
        };
        let out = session("1,1\n2,3\nn\n", options);
        // Start-only board shows one knight, path board shows two.
        assert_eq!(out.matches("__/\\  0").count(), 2);
        assert_eq!(out.matches("__/\\  1").count(), 1);
    }

    #[test]
    fn test_session_error_display() {
        let err = SessionError::from(PathError::OutOfRange { column: 9, row: 1 });
        assert!(err.to_string().contains("(9, 1)"));
    }
}
