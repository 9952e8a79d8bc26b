#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN_WIDTH: usize = 6;
const SEPARATOR: &str = "  ";

/// Render a simple aligned table for string rows.
///
/// Numeric cells are right-aligned. When `max_width` is set, the widest
/// columns shrink first and overflowing cells end in `…`.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.len(), MIN_COLUMN_WIDTH])
                .max()
                .unwrap_or(MIN_COLUMN_WIDTH)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    let mut lines = vec![
        header_line.trim_end().to_string(),
        "-".repeat(header_line.chars().count()),
    ];

    for row in rows {
        let cells = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let text = truncate(value, *width);
                let padded = pad(&text, *width, looks_numeric(&text));
                if options.color {
                    colorize_status(&padded, &text)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>();
        lines.push(cells.join(SEPARATOR).trim_end().to_string());
    }

    lines.join("\n")
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);
        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
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

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

/// Wrap the status word of a purge report in an ANSI color.
fn colorize_status(padded: &str, text: &str) -> String {
    let code = match text {
        "purged" | "counted" => "32",
        "aborted" | "empty" => "33",
        _ => return padded.to_string(),
    };
    padded.replacen(text, &format!("\u{1b}[{code}m{text}\u{1b}[0m"), 1)
}
