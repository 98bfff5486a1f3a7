/// Builds the explicit-parameter list for a route registration.
///
/// ```
/// use trellis_router::{params, Router};
///
/// let mut router = Router::new();
/// router
///     .get("/articles/{slug}", params! {
///         "controller" => "articles",
///         "revision" => 2,
///     })
///     .unwrap();
/// ```
#[macro_export]
macro_rules! params {
    () => {
        ::std::vec::Vec::new()
    };
    ($($key:expr => $val:expr),+ $(,)?) => {{
        let mut __params: ::std::vec::Vec<(::std::boxed::Box<str>, $crate::Value)> =
            ::std::vec::Vec::new();
        $(__params.push(($key.into(), $val.into()));)+
        __params
    }};
}
