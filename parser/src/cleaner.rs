//! Removal of `--` comments and blank lines from raw schedule text.

pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Cuts a line at the first `--` that is not inside a quoted string.
pub fn strip_comment(line: &str) -> &str {
    let mut in_quotes = false;
    let mut previous_dash = false;

    for (index, c) in line.char_indices() {
        match c {
            '\'' => {
                in_quotes = !in_quotes;
                previous_dash = false;
            }
            '-' if !in_quotes => {
                if previous_dash {
                    return &line[..index - 1];
                }
                previous_dash = true;
            }
            _ => previous_dash = false,
        }
    }

    line
}

/// Strips comments and trailing whitespace, and drops the lines left empty.
pub fn clean<A: AsRef<str>>(text: A) -> String {
    let text = text.as_ref();
    text.strip_prefix(BYTE_ORDER_MARK)
        .unwrap_or(text)
        .lines()
        .map(|line| strip_comment(line).trim_end())
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
