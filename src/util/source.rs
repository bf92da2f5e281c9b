/// Character separating statements.
pub const STATEMENT_SEPARATOR: char = ';';

/// Removes every `//` comment up to, but not including, the end of its line.
///
/// # Example
/// ```
/// use rpncalc::util::source::strip_comments;
///
/// assert_eq!(strip_comments("x = 1 // one\ny = 2"), "x = 1 \ny = 2");
/// ```
#[must_use]
pub fn strip_comments(source: &str) -> String {
    source.split_inclusive('\n')
          .map(|line| match line.find("//") {
              Some(start) if line.ends_with('\n') => {
                  let mut kept = line[..start].to_string();
                  kept.push('\n');
                  kept
              },
              Some(start) => line[..start].to_string(),
              None => line.to_string(),
          })
          .collect()
}

/// Splits `source` on `separator`, ignoring separators nested inside braces.
///
/// Returns each piece together with its offset in `source`. Pieces are not
/// trimmed and may be blank.
///
/// # Example
/// ```
/// use rpncalc::util::source::split_top_level;
///
/// let pieces = split_top_level("a = 1; if (a) { b = 2; c = 3 }; c", ';');
/// let texts: Vec<&str> = pieces.iter().map(|(_, piece)| piece.trim()).collect();
///
/// assert_eq!(texts, ["a = 1", "if (a) { b = 2; c = 3 }", "c"]);
/// assert_eq!(pieces[1].0, 6);
/// ```
#[must_use]
pub fn split_top_level(source: &str, separator: char) -> Vec<(usize, &str)> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, ch) in source.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            _ if ch == separator && depth == 0 => {
                pieces.push((start, &source[start..index]));
                start = index + ch.len_utf8();
            },
            _ => {},
        }
    }

    pieces.push((start, &source[start..]));
    pieces
}

/// Finds the bracket closing the one at byte offset `open_at`.
///
/// Only `open` and `close` are counted; other bracket kinds are ignored.
/// Returns `None` if `open_at` does not hold `open` or the bracket is never
/// closed.
///
/// # Example
/// ```
/// use rpncalc::util::source::find_matching;
///
/// assert_eq!(find_matching("(a(b)c)d", 0, '(', ')'), Some(6));
/// assert_eq!(find_matching("{ {}", 0, '{', '}'), None);
/// ```
#[must_use]
pub fn find_matching(source: &str, open_at: usize, open: char, close: char) -> Option<usize> {
    if !source[open_at..].starts_with(open) {
        return None;
    }

    let mut depth = 0usize;
    for (index, ch) in source[open_at..].char_indices() {
        if ch == open {
            depth += 1;
        } else if ch == close {
            depth -= 1;
            if depth == 0 {
                return Some(open_at + index);
            }
        }
    }

    None
}

/// Finds the `else` belonging to the conditional whose then-branch starts
/// `source`.
///
/// Only whole words at bracket depth zero count. Every nested `if` claims
/// the next free `else`, so `if (a) 1 else 2 else 3` yields the offset of the
/// second `else`.
#[must_use]
pub fn find_else(source: &str) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut pending_ifs = 0usize;
    let mut index = 0;

    while index < bytes.len() {
        let byte = bytes[index];
        match byte {
            b'(' | b'{' => depth += 1,
            b')' | b'}' => depth = depth.saturating_sub(1),
            _ if byte.is_ascii_alphabetic() => {
                let end = bytes[index..].iter()
                                        .position(|b| !b.is_ascii_alphabetic())
                                        .map_or(bytes.len(), |length| index + length);
                let word = &source[index..end];

                if depth == 0 {
                    if word.eq_ignore_ascii_case("if") {
                        pending_ifs += 1;
                    } else if word.eq_ignore_ascii_case("else") {
                        if pending_ifs == 0 {
                            return Some(index);
                        }
                        pending_ifs -= 1;
                    }
                }

                index = end;
                continue;
            },
            _ => {},
        }
        index += 1;
    }

    None
}

/// Finds the `=` of an assignment statement.
///
/// A statement containing `==` is never an assignment. Otherwise the first
/// `=` that is not part of `<=`, `>=` or `!=` is returned.
///
/// # Example
/// ```
/// use rpncalc::util::source::find_assignment;
///
/// assert_eq!(find_assignment("x = y + 2"), Some(2));
/// assert_eq!(find_assignment("x = y == 2"), None);
/// assert_eq!(find_assignment("x = y <= 2"), Some(2));
/// assert_eq!(find_assignment("x <= 2"), None);
/// ```
#[must_use]
pub fn find_assignment(source: &str) -> Option<usize> {
    if source.contains("==") {
        return None;
    }

    let bytes = source.as_bytes();

    (0..bytes.len()).find(|&index| {
                        bytes[index] == b'='
                        && !matches!(index.checked_sub(1).map(|before| bytes[before]),
                                     Some(b'=' | b'<' | b'>' | b'!'))
                        && bytes.get(index + 1) != Some(&b'=')
                    })
}
