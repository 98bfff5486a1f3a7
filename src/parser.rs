use smallvec::SmallVec;

const SLASH: char = '/';
const BRACE_OPEN: char = '{';
const BRACE_CLOSE: char = '}';
const SHORTCUT_MARK: char = '|';

/// Default pattern for `{name}` segments: one or more URL-safe characters
/// (RFC 3986 pchar without the slash).
pub const DEFAULT_SEGMENT_PATTERN: &str =
    "(?:[A-Za-z0-9._~-]|%[0-9A-Fa-f]{2}|[!$&'()*+,;=:@])+";

/// One `/`-delimited token of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matches only the exact text.
    Literal(Box<str>),
    /// Matches tokens against `source`, capturing the token as `name`.
    Regex { name: Box<str>, source: Box<str> },
    /// Matches tokens via the shortcut registered under `key`.
    Shortcut { name: Box<str>, key: Box<str> },
    /// Starts with `{` but does not satisfy the segment grammar.
    Malformed { raw: Box<str> },
}

/// Parses a route pattern into segment records.
///
/// One leading `/` is ignored; a trailing `/` yields a real empty literal
/// segment, so `"a/b/"` parses as `a`, `b`, `""`.
pub fn parse_pattern(pattern: &str) -> SmallVec<[Segment; 8]> {
    split_path(pattern).iter().map(|&tok| classify(tok)).collect()
}

/// Splits a request path on `/` boundaries, with the same leading- and
/// trailing-slash handling as [`parse_pattern`] but no `{}` interpretation.
pub fn split_path(path: &str) -> SmallVec<[&str; 8]> {
    trim_first_slash(path).split(SLASH).collect()
}

fn classify(token: &str) -> Segment {
    if !token.starts_with(BRACE_OPEN) {
        return Segment::Literal(token.into());
    }

    let inner = match token
        .strip_prefix(BRACE_OPEN)
        .and_then(|t| t.strip_suffix(BRACE_CLOSE))
    {
        Some(inner) => inner,
        None => return malformed(token),
    };

    let (name, body) = match find_colon(inner) {
        Some(i) => (&inner[..i], Some(&inner[i + 1..])),
        None => (inner, None),
    };

    if !is_valid_name(name) {
        return malformed(token);
    }

    match body {
        None => Segment::Regex {
            name: name.into(),
            source: DEFAULT_SEGMENT_PATTERN.into(),
        },
        // "{name:}" has an empty body and fails the grammar
        Some("") => malformed(token),
        Some(body) => match body.strip_prefix(SHORTCUT_MARK) {
            Some(key) => Segment::Shortcut {
                name: name.into(),
                key: key.into(),
            },
            None => Segment::Regex {
                name: name.into(),
                source: body.into(),
            },
        },
    }
}

fn malformed(token: &str) -> Segment {
    Segment::Malformed { raw: token.into() }
}

// The name ends at the first colon; everything after it belongs to the
// regex body, colons included.
#[inline]
fn find_colon(s: &str) -> Option<usize> {
    s.bytes().position(|b| b == b':')
}

fn is_valid_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

#[inline]
fn trim_first_slash(s: &str) -> &str {
    if s.starts_with(SLASH) {
        &s[1..]
    } else {
        s
    }
}
