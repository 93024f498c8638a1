use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

/// Terminal presentation settings resolved once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let prefs = resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("COLUMNS").ok().as_deref(),
    );
    let _ = UI_PREFS.set(prefs);
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

fn resolve(flags: &GlobalFlags, is_tty: bool, no_color: bool, columns: Option<&str>) -> UiPrefs {
    UiPrefs {
        table_color: is_tty && !no_color && !flags.quiet && flags.format == OutputFormat::Table,
        term_width: columns
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|width| *width >= 40),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: OutputFormat) -> GlobalFlags {
        GlobalFlags {
            format,
            quiet: false,
            verbose: false,
            user: None,
            snapshot: None,
        }
    }

    #[test]
    fn color_only_for_tables_on_a_terminal() {
        assert!(resolve(&flags(OutputFormat::Table), true, false, None).table_color);
        assert!(!resolve(&flags(OutputFormat::Json), true, false, None).table_color);
        assert!(!resolve(&flags(OutputFormat::Table), false, false, None).table_color);
        assert!(!resolve(&flags(OutputFormat::Table), true, true, None).table_color);
    }

    #[test]
    fn tiny_or_garbage_widths_are_ignored() {
        let table = flags(OutputFormat::Table);
        assert_eq!(resolve(&table, false, false, Some("120")).term_width, Some(120));
        assert_eq!(resolve(&table, false, false, Some("20")).term_width, None);
        assert_eq!(resolve(&table, false, false, Some("wide")).term_width, None);
    }
}
