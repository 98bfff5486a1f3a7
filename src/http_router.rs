use crate::router::{Router, SearchResult};

pub use http::Method;

impl Router {
    /// [`Router::search`] with a typed HTTP method.
    pub fn search_request(&self, method: &Method, path: &str) -> SearchResult {
        self.search(method.as_str(), path)
    }
}
