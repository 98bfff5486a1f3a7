/// Registration-time failures. Query-time misses are not errors; they are
/// reported through [`super::SearchResult`].
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("malformed segment {segment:?} in pattern {pattern:?}")]
    MalformedSegment { pattern: String, segment: String },

    #[error("no usable method was given")]
    EmptyMethods,

    #[error("unknown shortcut key {key:?}")]
    UnknownShortcut { key: String },

    #[error("invalid regex {regex:?}")]
    InvalidRegex {
        regex: String,
        #[source]
        error: regex::Error,
    },
}
