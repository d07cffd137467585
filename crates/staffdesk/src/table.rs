//! Plain and styled text tables.

use console::Style;
use staffdesk_seeker::{Dir, Page, SortSpec};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::records::{Badge, Record};

/// Widest a column may get before its cells are truncated.
pub const MAX_COLUMN_WIDTH: usize = 32;

const GAP: &str = "  ";

/// Truncates to a display width, ending in `…` when something was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let limit = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > limit {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Left-aligns `s` in `width` columns.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

fn badge_style(badge: Badge) -> Style {
    match badge {
        Badge::Success => Style::new().green(),
        Badge::Warning => Style::new().yellow(),
        Badge::Error => Style::new().red(),
        Badge::Info => Style::new().cyan(),
        Badge::Neutral => Style::new().dim(),
    }
}

/// Renders text with a style, or as-is when styling is off.
struct Painter {
    styled: bool,
}

impl Painter {
    fn paint(&self, style: &Style, text: String) -> String {
        if self.styled {
            style.apply_to(text).force_styling(true).to_string()
        } else {
            text
        }
    }
}

/// Renders `rows` as a table with one column per schema field.
///
/// The sorted column's header carries an arrow. An empty `rows` renders the
/// header and a "no results" line.
pub fn render_table<R: Record>(rows: &[&R], sort: Option<&SortSpec>, styled: bool) -> String {
    let painter = Painter { styled };
    let fields = R::schema().fields();

    let headers: Vec<String> = fields
        .iter()
        .map(|f| match sort {
            Some(s) if s.field == f.name => {
                let arrow = if s.dir == Dir::Asc { "↑" } else { "↓" };
                format!("{} {}", f.label, arrow)
            }
            _ => f.label.to_string(),
        })
        .collect();

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.cells()
                .iter()
                .map(|c| truncate_to_width(c, MAX_COLUMN_WIDTH))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|r| r[i].width())
                .chain(std::iter::once(h.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| painter.paint(&Style::new().bold(), pad(h, *w)))
        .collect::<Vec<_>>()
        .join(GAP);
    lines.push(header_line.trim_end().to_string());

    let rule_width = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);
    lines.push(painter.paint(&Style::new().dim(), "─".repeat(rule_width)));

    if rows.is_empty() {
        lines.push(painter.paint(&Style::new().dim().italic(), "No matching records.".to_string()));
    }

    for (row, row_cells) in rows.iter().zip(&cells) {
        let line = fields
            .iter()
            .zip(row_cells)
            .zip(&widths)
            .map(|((field, text), width)| {
                let padded = pad(text, *width);
                match row.badge(field.name) {
                    Some(badge) => painter.paint(&badge_style(badge), padded),
                    None => padded,
                }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Renders the pager line under a table:
/// `Showing 11 to 20 of 23 results   ‹ 1 [2] 3 ›`.
pub fn render_footer(page: &Page, styled: bool) -> String {
    let painter = Painter { styled };

    let numbers = page
        .window()
        .map(|n| {
            if n == page.page {
                painter.paint(&Style::new().bold().reverse(), format!("[{}]", n))
            } else {
                n.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let arrow = |enabled: bool, glyph: &str| {
        if enabled {
            glyph.to_string()
        } else {
            painter.paint(&Style::new().dim(), glyph.to_string())
        }
    };

    format!(
        "{}   {} {} {}",
        page.summary(),
        arrow(page.has_previous(), "‹"),
        numbers,
        arrow(page.has_next(), "›")
    )
}

/// One line describing the active search and filters, or `None` when the
/// view is unfiltered.
pub fn render_filter_line<'a>(
    search: &str,
    filters: impl Iterator<Item = (&'a str, &'a str)>,
) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    if !search.is_empty() {
        parts.push(format!("search \"{}\"", search));
    }
    parts.extend(filters.map(|(field, value)| format!("{} = {}", field, value)));
    (!parts.is_empty()).then(|| format!("Filtered by {}", parts.join(", ")))
}
