//! Horizontal bar charts in plain text.
//!
//! The renderer is a pure consumer of ranked `(label, count)` pairs. It keeps
//! the first `top_k` rows in the order given and scales bars against the
//! largest count shown.
//!
//! ```text
//! Top 10 most common words
//! --------------------------------
//! Word | Word Count
//! cat  | ████████████████████████████████████████ 2
//! sat  | ████████████████████ 1
//! --------------------------------
//! ```

use core::fmt::Write;

use lexis_types::ChartOptions;

const BAR: char = '█';
const RULE: &str = "--------------------------------";

/// Renders `rows` as a horizontal bar chart.
///
/// An empty input renders the title, axis header and `(no data)`.
pub fn render(rows: &[(String, usize)], options: &ChartOptions) -> String {
    let rows = &rows[..options.top_k.min(rows.len())];

    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .chain(core::iter::once(options.y_label.chars().count()))
        .max()
        .unwrap_or(0);
    let max_count = rows.iter().map(|&(_, count)| count).max().unwrap_or(0);

    let mut out = String::new();
    if !options.title.is_empty() {
        out.push_str(&options.title);
        out.push('\n');
    }
    out.push_str(RULE);
    out.push('\n');

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "{:<width$} | {}",
        options.y_label,
        options.x_label,
        width = label_width
    );

    if rows.is_empty() {
        out.push_str("(no data)\n");
    }

    for (label, count) in rows {
        let bar = bar_len(*count, max_count, options.width);
        let _ = write!(out, "{:<width$} | ", label, width = label_width);
        out.extend(core::iter::repeat(BAR).take(bar));
        let _ = writeln!(out, " {}", count);
    }

    out.push_str(RULE);
    out.push('\n');
    out
}

/// Bar length for `count`, rounded up so every non-zero count is visible.
#[inline]
fn bar_len(count: usize, max_count: usize, width: usize) -> usize {
    if max_count == 0 || count == 0 {
        return 0;
    }
    (count * width).div_ceil(max_count)
}
