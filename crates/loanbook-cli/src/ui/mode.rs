//! Picks one of the three renderings for a command.

/// How a command renders its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// A single JSON document on stdout
    Json,
    /// Tab-separated rows and `key=value` lines for scripts
    #[default]
    Plain,
    /// Tables, bar charts and color for a person at a terminal
    Pretty,
}

impl OutputMode {
    /// `--json` beats everything. `--format plain` and `TERM=dumb` force
    /// plain output. Otherwise a terminal gets pretty output and a pipe
    /// gets plain.
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        let forced_plain = term_is_dumb || format_flag == Some("plain");
        if is_tty && !forced_plain {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    pub fn is_json(&self) -> bool {
        *self == Self::Json
    }

    pub fn is_pretty(&self) -> bool {
        *self == Self::Pretty
    }
}
