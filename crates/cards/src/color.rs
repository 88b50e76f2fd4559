use crate::cli::ColorChoice;
use std::io::IsTerminal;

/// Decide whether painted output should carry ANSI colors.
///
/// `auto` honors the NO_COLOR convention (https://no-color.org/) and
/// disables color when stdout is not a terminal, e.g. under a pipe.
pub fn init(choice: ColorChoice) {
    let enabled = match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
        }
    };
    colored::control::set_override(enabled);
}
