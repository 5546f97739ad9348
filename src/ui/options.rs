//! Display options for the interactive session.

use std::fmt;

pub const USAGE: &str = "\
Usage: knight_moves [OPTIONS]

Finds the shortest sequence of knight moves between two squares.

Options:
  --no-color    Draw the knight without ANSI colours (also set by NO_COLOR)
  --no-board    Only print the list of moves, not the board
  -h, --help    Print this help
";

/// Follow-up the caller must perform after parsing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionAction {
    ShowHelp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    UnknownFlag { flag: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownFlag { flag } => write!(f, "Unknown option '{flag}'"),
        }
    }
}

impl std::error::Error for OptionError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Wrap knight glyphs in ANSI colour codes
    pub color: bool,
    /// Draw the ASCII board before and after each search
    pub draw_board: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            color: true,
            draw_board: true,
        }
    }
}

impl DisplayOptions {
    /// Parse command line flags (program name already stripped).
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::UnknownFlag`] for anything unrecognised.
    pub fn from_args<I, S>(args: I) -> Result<(Self, Option<OptionAction>), OptionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = DisplayOptions::default();
        let mut action = None;
        for arg in args {
            if let Some(a) = options.apply_flag(arg.as_ref())? {
                action = Some(a);
            }
        }
        Ok((options, action))
    }

    /// Apply one flag. Flags are case-insensitive and `_` is accepted for `-`.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::UnknownFlag`] for anything unrecognised.
    pub fn apply_flag(&mut self, flag: &str) -> Result<Option<OptionAction>, OptionError> {
        let normalized = flag.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "--no-color" | "--no-colour" => self.color = false,
            "--color" | "--colour" => self.color = true,
            "--no-board" => self.draw_board = false,
            "--board" => self.draw_board = true,
            "-h" | "--help" => return Ok(Some(OptionAction::ShowHelp)),
            _ => {
                return Err(OptionError::UnknownFlag {
                    flag: flag.to_string(),
                })
            }
        }
        Ok(None)
    }

    /// Honour the `NO_COLOR` convention.
    #[must_use]
    pub fn with_no_color_env(mut self, no_color_set: bool) -> Self {
        if no_color_set {
            self.color = false;
        }
        self
    }
}
