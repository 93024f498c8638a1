//! Plain-text tables for `--format table`.

const MIN_COLUMN_WIDTH: usize = 6;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Column-aligned table of string cells.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Numbers are right-aligned, status words colored when `options.color`
    /// is set, and the widest columns shrink first to fit `max_width`.
    #[must_use]
    pub fn render(&self, options: TableOptions) -> String {
        let widths = self.column_widths(options.max_width);

        let mut out = String::new();
        let header = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(header, width)| pad(&truncate(header, *width), *width, false))
            .collect::<Vec<_>>()
            .join(GAP);
        let divider_len = header.chars().count();
        out.push_str(header.trim_end());
        out.push('\n');
        out.push_str(&"-".repeat(divider_len));

        for row in &self.rows {
            out.push('\n');
            let line = widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let cell = truncate(row.get(index).map_or("-", String::as_str), *width);
                    let aligned = pad(&cell, *width, is_numeric(&cell));
                    match status_color(&cell).filter(|_| options.color) {
                        Some(code) => {
                            aligned.replacen(&cell, &format!("\u{1b}[{code}m{cell}\u{1b}[0m"), 1)
                        }
                        None => aligned,
                    }
                })
                .collect::<Vec<_>>()
                .join(GAP);
            out.push_str(line.trim_end());
        }
        out
    }

    fn column_widths(&self, max_width: Option<usize>) -> Vec<usize> {
        let floor = |index: usize| self.headers[index].chars().count().max(MIN_COLUMN_WIDTH);

        let mut widths = (0..self.headers.len())
            .map(|index| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(floor(index))
            })
            .collect::<Vec<_>>();

        let Some(max_width) = max_width else {
            return widths;
        };
        let gaps = widths.len().saturating_sub(1) * GAP.len();
        while widths.iter().sum::<usize>() + gaps > max_width {
            let widest = widths
                .iter()
                .enumerate()
                .filter(|(index, width)| **width > floor(*index))
                .max_by_key(|(_, width)| **width)
                .map(|(index, _)| index);
            let Some(index) = widest else {
                break;
            };
            widths[index] -= 1;
        }
        widths
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok()
}

/// ANSI color for fit statuses, trends and alert types.
fn status_color(value: &str) -> Option<&'static str> {
    match value.to_ascii_lowercase().as_str() {
        "optimaal" | "stabiel" | "up" | "opportunity" | "true" => Some("32"),
        "instabiel" | "warning" => Some("33"),
        "kritiek" | "down" | "false" => Some("31"),
        "info" => Some("36"),
        _ => None,
    }
}
