//! Text fitting helpers for fixed-width card content

/// Word-wrap `text` into at most `max_lines` lines of `width` characters.
///
/// Words longer than a line are split. When text remains after the last
/// line, that line ends in an ellipsis.
pub fn wrap_text_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return vec![];
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut truncated = false;

    'words: for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        loop {
            let current_len = current.chars().count();
            let needed = if current_len == 0 {
                word.len()
            } else {
                current_len + 1 + word.len()
            };

            if needed <= width {
                if current_len > 0 {
                    current.push(' ');
                }
                current.extend(word.iter());
                continue 'words;
            }

            if current_len == 0 {
                let rest = word.split_off(width);
                lines.push(word.iter().collect());
                word = rest;
            } else {
                lines.push(std::mem::take(&mut current));
            }

            if lines.len() == max_lines {
                truncated = true;
                break 'words;
            }
        }
    }

    if !truncated && !current.is_empty() {
        lines.push(current);
    }

    if truncated && let Some(last) = lines.last_mut() {
        *last = with_ellipsis(last, width);
    }

    lines
}

/// Truncate to `width` characters, marking the cut with an ellipsis
pub fn truncate_string(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        with_ellipsis(text, width)
    }
}

fn with_ellipsis(text: &str, width: usize) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    if chars.len() >= width {
        chars.truncate(width.saturating_sub(1));
    }
    chars.push('…');
    chars.into_iter().collect()
}
