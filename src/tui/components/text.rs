//! Text layout helpers for fixed-size terminal views.

/// Word-wraps `text` to `max_width` columns, hard-wrapping words that do not
/// fit on a line of their own. Existing line breaks are kept.
#[must_use]
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return text.lines().map(ToOwned::to_owned).collect();
    }

    let mut lines = Vec::new();
    for source_line in text.lines() {
        let mut current = String::new();
        let mut width = 0_usize;
        for word in source_line.split_whitespace() {
            let word_width = word.chars().count();
            if width > 0 && width + 1 + word_width > max_width {
                lines.push(std::mem::take(&mut current));
                width = 0;
            }
            if width > 0 {
                current.push(' ');
                width += 1;
            }
            for ch in word.chars() {
                if width >= max_width {
                    lines.push(std::mem::take(&mut current));
                    width = 0;
                }
                current.push(ch);
                width += 1;
            }
        }
        lines.push(current);
    }
    lines
}

/// Keeps at most `max_lines` lines, replacing the last kept line with `...`
/// when anything was cut.
#[must_use]
pub fn truncate_lines(mut lines: Vec<String>, max_lines: usize) -> Vec<String> {
    if lines.len() <= max_lines {
        return lines;
    }
    lines.truncate(max_lines.saturating_sub(1));
    if max_lines > 0 {
        lines.push("...".to_owned());
    }
    lines
}
