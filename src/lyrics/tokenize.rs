//! Lossless whitespace tokenization of content lines.

/// Split a line into alternating non-whitespace and whitespace runs.
///
/// The result always starts and ends with a non-whitespace slot, which is
/// empty when the line starts or ends with whitespace; an empty line yields
/// a single empty slot. Concatenating the parts reproduces `line`.
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space = false;

    for (i, c) in line.char_indices() {
        let space = c.is_whitespace();
        if space != in_space {
            tokens.push(&line[start..i]);
            start = i;
            in_space = space;
        }
    }
    tokens.push(&line[start..]);

    if in_space {
        tokens.push("");
    }
    tokens
}

/// Whether a token is a (non-empty) whitespace run.
pub fn is_whitespace_run(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_whitespace)
}
