//! Binary-safe `KEY=value` lookup for os-release style files

/// Find the value of `key` in `KEY=value` lines.
///
/// `data` is treated as raw bytes and may contain anything, including NULs;
/// only `\n` and `=` are significant. Lines starting with `#` are comments.
/// A value wrapped in matching single or double quotes is unquoted. The first
/// matching line wins.
pub fn find_value(key: &str, data: &[u8]) -> Option<String> {
    let key = key.as_bytes();
    let mut rest = data;

    while !rest.is_empty() {
        // Nothing left can match once there are no more '=' at all
        let equal = memchr(b'=', rest)?;
        let eol = memchr(b'\n', rest);
        let line_end = eol.unwrap_or(rest.len());
        let line = &rest[..line_end];
        rest = match eol {
            Some(eol) => &rest[eol + 1..],
            None => &[],
        };

        if equal >= line_end || line.first() == Some(&b'#') {
            continue;
        }
        if &line[..equal] != key {
            continue;
        }

        let value = unquote(&line[equal + 1..]);
        return Some(String::from_utf8_lossy(value).into_owned());
    }

    None
}

fn memchr(needle: u8, haystack: &[u8]) -> Option<usize> {
    haystack.iter().position(|&b| b == needle)
}

fn unquote(value: &[u8]) -> &[u8] {
    match value {
        [first, inner @ .., last] if first == last && (*first == b'"' || *first == b'\'') => inner,
        _ => value,
    }
}
