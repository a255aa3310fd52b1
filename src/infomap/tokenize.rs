//! Quote-aware field tokenizer for tree-family data lines

/// Split a data line into fields.
///
/// A field is either a maximal run of characters that are not whitespace or
/// quotes, or a double-quoted group returned with its quotes, so names may
/// contain the field delimiter:
///
/// - `1:2 0.5 "node one" 1` yields `1:2`, `0.5`, `"node one"`, `1`
/// - single quotes and unpaired double quotes act as separators
/// - no escaping is supported inside quoted groups
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < line.len() {
        let rest = &line[pos..];

        if let Some(inner) = rest.strip_prefix('"') {
            // Quoted group; an unpaired opening quote is dropped.
            match inner.find('"') {
                Some(len) => {
                    let end = pos + len + 2;
                    tokens.push(&line[pos..end]);
                    pos = end;
                }
                None => pos += 1,
            }
            continue;
        }

        let first = match rest.chars().next() {
            Some(first) => first,
            None => break,
        };

        if first.is_whitespace() || first == '\'' {
            pos += first.len_utf8();
            continue;
        }

        // Bare run up to the next whitespace or quote character.
        let len = rest
            .find(|c: char| c.is_whitespace() || c == '"' || c == '\'')
            .unwrap_or(rest.len());
        tokens.push(&rest[..len]);
        pos += len;
    }

    tokens
}
