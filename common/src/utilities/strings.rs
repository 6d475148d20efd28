/// Inserts `separator` at camel-case boundaries, preserving the original
/// characters: between an uppercase run and a trailing `Xx` word, before any
/// uppercase following a non-uppercase, and between a letter and a non-letter.
pub fn split_camel_case(s: &str, separator: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + separator.len() * 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && is_boundary(&chars, i) {
            result.push_str(separator);
        }
        result.push(c);
    }
    result
}

fn is_boundary(chars: &[char], i: usize) -> bool {
    let prev = chars[i - 1];
    let curr = chars[i];
    if prev.is_ascii_uppercase()
        && curr.is_ascii_uppercase()
        && chars.get(i + 1).map_or(false, |c| c.is_ascii_lowercase())
    {
        return true;
    }
    if !prev.is_ascii_uppercase() && curr.is_ascii_uppercase() {
        return true;
    }
    prev.is_ascii_alphabetic() && !curr.is_ascii_alphabetic()
}

/// Removes exactly one leading `/` if present.
pub fn maybe_chomp_leading_slash(s: &str) -> &str {
    s.strip_prefix('/').unwrap_or(s)
}

/// Returns the path up to (not including) the second `/`, or the whole
/// string when there is at most one segment. Leading-slash handling is the
/// caller's business.
pub fn first_path_segment(path: &str) -> &str {
    match path.char_indices().filter(|(_, c)| *c == '/').nth(1) {
        Some((idx, _)) => &path[..idx],
        None => path,
    }
}
