//! Plain aligned tables for terminal output.

const MIN_COLUMN_WIDTH: usize = 6;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render `rows` under `headers`, shrinking the widest columns first when
/// `max_width` is set.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|value| value.chars().count())
                .chain([header.chars().count(), MIN_COLUMN_WIDTH])
                .max()
                .unwrap_or(MIN_COLUMN_WIDTH)
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(GAP);
    let header_line = header_line.trim_end().to_string();

    let mut lines = vec![
        header_line.clone(),
        "-".repeat(header_line.chars().count()),
    ];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let text = truncate(value, *width);
                let padded = pad(&text, *width, is_numeric(&text));
                if options.color {
                    colorize(&padded, &text)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| {
                **width > headers[*index].chars().count().max(MIN_COLUMN_WIDTH)
            })
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);

        match widest {
            Some(index) => widths[index] -= 1,
            None => break,
        }
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out = value.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
}

/// Color workflow states so failures stand out.
fn colorize(padded: &str, text: &str) -> String {
    let code = match text.to_ascii_lowercase().as_str() {
        "submitted" | "loaded" | "true" => "32",
        "submitting" | "loading" | "discarded" => "33",
        "invalid" | "failed" | "load_failed" | "false" => "31",
        _ => return padded.to_string(),
    };
    padded.replacen(text, &format!("\u{1b}[{code}m{text}\u{1b}[0m"), 1)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn aligns_columns_and_draws_divider() {
        let rows = vec![
            vec!["42".to_string(), "Seaside Cottage".to_string()],
            vec!["1043".to_string(), "Lodge".to_string()],
        ];
        let table = render(&["id", "name"], &rows, PLAIN);
        let lines = table.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "id      name");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "    42  Seaside Cottage");
        assert_eq!(lines[3], "  1043  Lodge");
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec![
            "42".to_string(),
            "A very long establishment name indeed".to_string(),
        ]];
        let table = render(
            &["id", "name"],
            &rows,
            TableOptions {
                max_width: Some(24),
                color: false,
            },
        );
        let row = table.lines().nth(2).expect("row");
        assert!(row.ends_with('…'));
        assert!(row.chars().count() <= 24);
    }

    #[test]
    fn color_wraps_known_states_only() {
        let rows = vec![vec!["failed".to_string()], vec!["Seaside".to_string()]];
        let table = render(
            &["status"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        let lines = table.lines().collect::<Vec<_>>();
        assert!(lines[2].contains("\u{1b}[31mfailed\u{1b}[0m"));
        assert_eq!(lines[3], "Seaside");
    }
}
