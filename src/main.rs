use std::process::ExitCode;

use knight_moves::ui::{self, DisplayOptions, OptionAction};

fn main() -> ExitCode {
    let (options, action) = match DisplayOptions::from_args(std::env::args().skip(1)) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{e}\n\n{}", ui::USAGE);
            return ExitCode::from(2);
        }
    };

    if action == Some(OptionAction::ShowHelp) {
        print!("{}", ui::USAGE);
        return ExitCode::SUCCESS;
    }

    let options = options.with_no_color_env(std::env::var_os("NO_COLOR").is_some());
    match ui::run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("knight_moves: {e}");
            ExitCode::FAILURE
        }
    }
}
