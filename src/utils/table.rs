//! Bordered table rendering for the schedule grid.

use unicode_width::UnicodeWidthStr;

/// A text table with a fixed header row and box-drawing borders. Data
/// rows may carry fewer (or more) cells than the header; missing cells
/// render empty. Cell strings may contain `\n`, which becomes extra
/// physical lines within the same row band.
pub struct Grid {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render the table. The header band sits under a double rule, data
    /// rows are separated by single rules, and everything is left-aligned
    /// and padded to the column's display width. No trailing newline.
    pub fn render(&self) -> String {
        let columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain([self.headers.len()])
            .max()
            .unwrap_or(0);

        let mut widths = vec![0usize; columns];
        for (i, header) in self.headers.iter().enumerate() {
            widths[i] = header.width();
        }
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                for line in cell.lines() {
                    widths[i] = widths[i].max(line.width());
                }
            }
        }

        let mut out = String::new();
        rule(&mut out, &widths, '╒', '═', '╤', '╕');
        band(&mut out, &widths, &self.headers);
        rule(&mut out, &widths, '╞', '═', '╪', '╡');
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                rule(&mut out, &widths, '├', '─', '┼', '┤');
            }
            band(&mut out, &widths, row);
        }
        rule(&mut out, &widths, '╘', '═', '╧', '╛');
        out.pop(); // callers decide about the final line break
        out
    }
}

/// One horizontal rule: `left`, `fill` runs joined by `mid`, `right`.
fn rule(out: &mut String, widths: &[usize], left: char, fill: char, mid: char, right: char) {
    out.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push(mid);
        }
        for _ in 0..width + 2 {
            out.push(fill);
        }
    }
    out.push(right);
    out.push('\n');
}

/// One logical row, possibly several physical lines when a cell wraps.
fn band(out: &mut String, widths: &[usize], cells: &[String]) {
    let split: Vec<Vec<&str>> = (0..widths.len())
        .map(|i| {
            cells
                .get(i)
                .map(|cell| cell.split('\n').collect())
                .unwrap_or_default()
        })
        .collect();
    let height = split.iter().map(Vec::len).max().unwrap_or(1).max(1);

    for line in 0..height {
        out.push('│');
        for (i, lines) in split.iter().enumerate() {
            let text = lines.get(line).copied().unwrap_or("");
            out.push(' ');
            out.push_str(text);
            for _ in text.width()..widths[i] {
                out.push(' ');
            }
            out.push(' ');
            out.push('│');
        }
        out.push('\n');
    }
}
