use trellis_router::{parse_pattern, split_path, Segment, DEFAULT_SEGMENT_PATTERN};

fn lit(text: &str) -> Segment {
    Segment::Literal(text.into())
}

fn reg(name: &str, source: &str) -> Segment {
    Segment::Regex {
        name: name.into(),
        source: source.into(),
    }
}

fn sreg(name: &str, key: &str) -> Segment {
    Segment::Shortcut {
        name: name.into(),
        key: key.into(),
    }
}

#[test]
fn parse_literal_patterns() {
    let cases: &[(&str, &[&str])] = &[
        ("/abc/def/ghi/", &["abc", "def", "ghi", ""]),
        ("abc/def/ghi/", &["abc", "def", "ghi", ""]),
        ("abc/def/ghi.jkl", &["abc", "def", "ghi.jkl"]),
        ("", &[""]),
        ("/", &[""]),
        ("//", &["", ""]),
    ];

    for &(pattern, expected) in cases {
        let segments = parse_pattern(pattern);
        let expected: Vec<Segment> = expected.iter().map(|&t| lit(t)).collect();
        assert_eq!(&segments[..], &expected[..], "pattern = {:?}", pattern);
    }
}

#[test]
fn parse_capture_patterns() {
    let segments = parse_pattern("abc/{id}");
    assert_eq!(
        &segments[..],
        &[lit("abc"), reg("id", DEFAULT_SEGMENT_PATTERN)][..]
    );

    let segments = parse_pattern("abc/{id:\\d+}/");
    assert_eq!(&segments[..], &[lit("abc"), reg("id", "\\d+"), lit("")][..]);

    // the name ends at the first colon, the body keeps the rest verbatim
    let segments = parse_pattern("{when:[0-9]{2}:[0-9]{2}}");
    assert_eq!(&segments[..], &[reg("when", "[0-9]{2}:[0-9]{2}")][..]);

    let segments = parse_pattern("abc/{id:|natural}");
    assert_eq!(&segments[..], &[lit("abc"), sreg("id", "natural")][..]);

    let segments = parse_pattern("{x:|}");
    assert_eq!(&segments[..], &[sreg("x", "")][..]);
}

#[test]
fn parse_malformed_segments() {
    let cases: &[&str] = &["{", "{}", "{id", "{id:}", "{1id}", "{a-b}", "{id}x"];

    for &token in cases {
        let segments = parse_pattern(token);
        assert_eq!(
            segments[0],
            Segment::Malformed { raw: token.into() },
            "token = {:?}",
            token
        );
    }

    // only a leading brace opts into the segment grammar
    assert_eq!(parse_pattern("x{y}")[0], lit("x{y}"));
}

#[test]
fn split_request_paths() {
    let cases: &[(&str, &[&str])] = &[
        ("/abc/def/ghi/", &["abc", "def", "ghi", ""]),
        ("abc/def/ghi/", &["abc", "def", "ghi", ""]),
        ("abc/def/ghi.jkl", &["abc", "def", "ghi.jkl"]),
        ("abc/123", &["abc", "123"]),
        ("", &[""]),
        ("/", &[""]),
    ];

    for &(path, expected) in cases {
        assert_eq!(&split_path(path)[..], expected, "path = {:?}", path);
    }
}

#[test]
fn split_and_parse_agree_on_boundaries() {
    // for `{}`-free input both tokenizers must yield identical boundaries
    let paths = &[
        "",
        "/",
        "a",
        "/a",
        "a/",
        "a/b",
        "/a/b/",
        "a//b",
        "x.y/z-w/_",
    ];

    for &path in paths {
        let tokens = split_path(path);
        let segments = parse_pattern(path);
        assert_eq!(tokens.len(), segments.len(), "path = {:?}", path);
        for (token, segment) in tokens.iter().zip(&segments) {
            assert_eq!(segment, &lit(token), "path = {:?}", path);
        }
    }
}
