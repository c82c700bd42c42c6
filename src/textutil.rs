//! Width-aware text helpers for terminal output.
//!
//! Widths are counted in characters, not bytes, so multi-byte text never gets
//! cut mid-codepoint.

/// Count visible character width (single-cell approximation).
pub fn visible_width(s: &str) -> usize {
    s.chars().count()
}

/// Re-flow `line` into rows of at most `max_width` characters.
///
/// Leading indentation stays on the first row and whitespace runs inside a
/// row are kept as typed; only the whitespace at a row break is dropped.
/// Tabs expand to 8-column stops and other whitespace characters become
/// spaces. A word longer than `max_width` fills what is left of the current
/// row and continues on the next ones.
pub fn wrap_words(line: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut pending: Vec<String> = split_chunks(&expand_whitespace(line))
        .into_iter()
        .rev()
        .map(str::to_string)
        .collect();
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    while let Some(chunk) = pending.pop() {
        let is_space = chunk.starts_with(' ');
        if is_space && current.is_empty() && !rows.is_empty() {
            continue;
        }
        let chunk_width = visible_width(&chunk);
        if current_width + chunk_width <= max_width {
            current.push_str(&chunk);
            current_width += chunk_width;
            continue;
        }

        if !is_space {
            if chunk_width > max_width && current_width < max_width {
                let room = max_width - current_width;
                current.extend(chunk.chars().take(room));
                pending.push(chunk.chars().skip(room).collect());
            } else {
                pending.push(chunk);
            }
        }
        finish_row(&mut rows, &mut current);
        current_width = 0;
    }
    finish_row(&mut rows, &mut current);

    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

fn finish_row(rows: &mut Vec<String>, current: &mut String) {
    let row = current.trim_end_matches(' ');
    if !row.is_empty() {
        rows.push(row.to_string());
    }
    current.clear();
}

/// Expand tabs to 8-column stops and turn other whitespace into spaces.
fn expand_whitespace(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0usize;
    for ch in line.chars() {
        match ch {
            '\t' => {
                let fill = 8 - column % 8;
                out.extend(std::iter::repeat(' ').take(fill));
                column += fill;
            }
            '\n' | '\r' | '\x0b' | '\x0c' => {
                out.push(' ');
                column += 1;
            }
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }
    out
}

/// Split into alternating runs of spaces and non-spaces.
fn split_chunks(line: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_space = None;
    for (idx, ch) in line.char_indices() {
        let space = ch == ' ';
        if in_space.is_some_and(|prev| prev != space) {
            chunks.push(&line[start..idx]);
            start = idx;
        }
        in_space = Some(space);
    }
    if start < line.len() {
        chunks.push(&line[start..]);
    }
    chunks
}
