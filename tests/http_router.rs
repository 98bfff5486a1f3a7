#![cfg(feature = "http-router")]

use trellis_router::http_router::Method;
use trellis_router::{params, NaturalNumber, Outcome, Router, Value};

#[test]
fn typed_method_search() {
    let mut router = Router::new();
    router.register_shortcut("natural", NaturalNumber);
    router
        .get("/users/{uid:|natural}/", params! { "controller" => "users" })
        .unwrap();

    let res = router.search_request(&Method::GET, "/users/42/");
    assert!(res.is_found());
    assert_eq!(res.get("uid"), Some(&Value::from(42)));

    let res = router.search_request(&Method::POST, "/users/42/");
    assert_eq!(res.outcome(), Outcome::MethodNotAllowed);

    let res = router.search_request(&Method::GET, "/users/42");
    assert_eq!(res.outcome(), Outcome::NotFound);
}
