//! What the terminal can do, combined with the user's display flags.

use std::io::IsTerminal;

use super::OutputMode;

const FALLBACK_WIDTH: usize = 80;

/// Display settings every renderer receives.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub is_tty: bool,
    /// ANSI styling allowed
    pub color: bool,
    /// Box-drawing and block glyphs allowed; ASCII otherwise
    pub unicode: bool,
    /// Columns available for tables and bar charts
    pub width: usize,
    pub mode: OutputMode,
}

/// Facts read from the process environment.
#[derive(Debug, Clone, Copy)]
struct Terminal {
    stdout_tty: bool,
    dumb: bool,
    no_color_env: bool,
    width: usize,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
            no_color_env: std::env::var_os("NO_COLOR").is_some(),
            width: terminal_width().unwrap_or(FALLBACK_WIDTH),
        }
    }
}

impl UiContext {
    /// Build the context for one command from its `--json`/`--format`
    /// flags and the merged `--no-color`/`--ascii` settings.
    pub fn from_env(
        json_flag: bool,
        format_flag: Option<&str>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        Self::for_terminal(
            Terminal::detect(),
            json_flag,
            format_flag,
            no_color_flag,
            ascii_flag,
        )
    }

    fn for_terminal(
        terminal: Terminal,
        json_flag: bool,
        format_flag: Option<&str>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        let color =
            terminal.stdout_tty && !terminal.dumb && !terminal.no_color_env && !no_color_flag;
        Self {
            is_tty: terminal.stdout_tty,
            color,
            unicode: !ascii_flag,
            width: terminal.width,
            mode: OutputMode::resolve(json_flag, format_flag, terminal.stdout_tty, terminal.dumb),
        }
    }

    /// The add form may prompt only when both ends are a terminal.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }
}

/// `COLUMNS` when set, else the window size of stdout.
fn terminal_width() -> Option<usize> {
    let from_env = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width > 0);
    if from_env.is_some() {
        return from_env;
    }

    #[cfg(unix)]
    {
        let mut size = libc::winsize {
            ws_row: 0,
            ws_col: 0,
            ws_xpixel: 0,
            ws_ypixel: 0,
        };
        let size_ptr: *mut libc::winsize = &mut size;
        // SAFETY: TIOCGWINSZ writes only into `size`, which outlives the call
        let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, size_ptr) };
        if rc == 0 && size.ws_col > 0 {
            return Some(usize::from(size.ws_col));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty() -> Terminal {
        Terminal {
            stdout_tty: true,
            dumb: false,
            no_color_env: false,
            width: 120,
        }
    }

    #[test]
    fn test_terminal_gets_pretty_color() {
        let ctx = UiContext::for_terminal(tty(), false, None, false, false);
        assert_eq!(ctx.mode, OutputMode::Pretty);
        assert!(ctx.color);
        assert!(ctx.unicode);
        assert_eq!(ctx.width, 120);
    }

    #[test]
    fn test_pipe_gets_plain_without_color() {
        let pipe = Terminal {
            stdout_tty: false,
            ..tty()
        };
        let ctx = UiContext::for_terminal(pipe, false, None, false, false);
        assert_eq!(ctx.mode, OutputMode::Plain);
        assert!(!ctx.color);
    }

    #[test]
    fn test_color_switches() {
        let no_color_env = Terminal {
            no_color_env: true,
            ..tty()
        };
        assert!(!UiContext::for_terminal(no_color_env, false, None, false, false).color);
        assert!(!UiContext::for_terminal(tty(), false, None, true, false).color);

        let dumb = Terminal {
            dumb: true,
            ..tty()
        };
        let ctx = UiContext::for_terminal(dumb, false, None, false, false);
        assert!(!ctx.color);
        assert_eq!(ctx.mode, OutputMode::Plain);
    }

    #[test]
    fn test_ascii_flag_and_json() {
        let ctx = UiContext::for_terminal(tty(), true, None, false, true);
        assert!(!ctx.unicode);
        assert!(ctx.mode.is_json());
    }
}
