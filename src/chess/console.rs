use is_terminal::IsTerminal;
use std::io::{self, Write};

const GREEN_BOLD: &str = "\x1b[1;32m";
const RED_BOLD: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

/// Progress and result lines for the command line: `[+]` in green on stdout,
/// `[!]` in red on stderr. Colors are used only for terminals.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    stdout_colors: bool,
    stderr_colors: bool,
}

impl Console {
    pub fn new() -> Self {
        Self {
            stdout_colors: io::stdout().is_terminal(),
            stderr_colors: io::stderr().is_terminal(),
        }
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        let line = format_line("[+]", msg.as_ref(), self.stdout_colors.then_some(GREEN_BOLD));
        let _ = writeln!(io::stdout(), "{}", line);
    }

    pub fn failure(&self, msg: impl AsRef<str>) {
        let line = format_line("[!]", msg.as_ref(), self.stderr_colors.then_some(RED_BOLD));
        let _ = writeln!(io::stderr(), "{}", line);
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

fn format_line(marker: &str, msg: &str, color: Option<&str>) -> String {
    match color {
        Some(color) => format!("{}{} {}{}", color, marker, msg, RESET),
        None => format!("{} {}", marker, msg),
    }
}

/// `game` or `games` depending on `count`.
pub fn games_noun(count: usize) -> &'static str {
    if count == 1 { "game" } else { "games" }
}
