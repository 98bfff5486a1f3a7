#![deny(unsafe_code)]

mod parser;
mod router;
mod shortcut;
mod value;

#[cfg(feature = "http-router")]
pub mod http_router;

pub use self::parser::{parse_pattern, split_path, Segment, DEFAULT_SEGMENT_PATTERN};
pub use self::router::{Outcome, Params, Router, RouterError, SearchResult};
pub use self::shortcut::{NaturalNumber, ShortRegex};
pub use self::value::Value;
