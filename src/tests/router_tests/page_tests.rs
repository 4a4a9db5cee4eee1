// src/tests/router_tests/page_tests.rs

use crate::router::{handle, respond};
use crate::tests::utils::{body_string, request, test_context, ScriptedRanker};
use http::Method;
use std::sync::Arc;

#[test]
fn board_page_lists_catalog() {
    let ctx = test_context(Arc::new(ScriptedRanker::default()));

    let mut resp = handle(request(Method::GET, "/", ""), &ctx).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(&mut resp);
    assert!(body.contains("Rental Buddy"));
    assert!(body.contains("123 Main St"));
    assert!(body.contains("9 Pine Rd"));
    assert!(!body.contains(r#"class="modal""#));
}

#[test]
fn detail_query_opens_modal() {
    let ctx = test_context(Arc::new(ScriptedRanker::default()));

    let mut resp = handle(
        request(
            Method::GET,
            "/?detail=https%3A%2F%2Frentals.example%2F2",
            "",
        ),
        &ctx,
    )
    .unwrap();

    let body = body_string(&mut resp);
    assert!(body.contains(r#"class="modal""#));
    assert!(body.contains(r#"href="https://rentals.example/2""#));
    assert!(body.contains("a month in Ballard"));
}

#[test]
fn unknown_detail_renders_without_modal() {
    let ctx = test_context(Arc::new(ScriptedRanker::default()));

    let mut resp = handle(request(Method::GET, "/?detail=nope", ""), &ctx).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(!body_string(&mut resp).contains(r#"class="modal""#));
}

#[test]
fn unknown_page_is_html_404() {
    let ctx = test_context(Arc::new(ScriptedRanker::default()));

    let mut resp = respond(request(Method::GET, "/nowhere", ""), &ctx);
    assert_eq!(resp.status(), 404);

    let body = body_string(&mut resp);
    assert!(body.contains("Error 404"));
    assert!(body.contains("Not Found"));
}
