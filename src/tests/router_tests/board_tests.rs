// src/tests/router_tests/board_tests.rs

use crate::ranking::RankingError;
use crate::router::{handle, respond};
use crate::tests::utils::{body_json, request, test_context, ScriptedRanker};
use http::Method;
use serde_json::{json, Value};
use std::sync::Arc;

fn place_body(url: &str, x: f64, y: f64) -> String {
    json!({
        "url": url,
        "drop": { "x": x, "y": y },
        "container": { "left": 0.0, "top": 0.0, "height": 600.0 }
    })
    .to_string()
}

fn addresses(state: &Value) -> Vec<String> {
    state["ordered"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["address"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn state_starts_with_raw_catalog() {
    let ctx = test_context(Arc::new(ScriptedRanker::default()));

    let mut resp = handle(request(Method::GET, "/api/state", ""), &ctx).unwrap();
    assert_eq!(resp.status(), 200);

    let state = body_json(&mut resp);
    assert_eq!(state["loading"], false);
    assert_eq!(state["squares"].as_array().unwrap().len(), 0);
    assert_eq!(addresses(&state), vec!["123 Main St", "77 Oak Ave", "9 Pine Rd"]);
}

#[test]
fn place_ranks_remaining_listings() {
    let ranker = Arc::new(ScriptedRanker::with_responses(vec![Ok(
        "9 Pine Rd; 77 Oak Ave.".into()
    )]));
    let ctx = test_context(ranker.clone());

    let mut resp = handle(
        request(
            Method::POST,
            "/api/board/place",
            &place_body("https://rentals.example/1", 125.0, 75.0),
        ),
        &ctx,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let state = body_json(&mut resp);
    let squares = state["squares"].as_array().unwrap();
    assert_eq!(squares.len(), 1);
    assert_eq!(squares[0]["left"], 100.0);
    assert_eq!(squares[0]["top"], 50.0);
    assert_eq!(squares[0]["listing"]["likability"], 100.0);
    assert_eq!(squares[0]["listing"]["applyLikelihood"], 550.0);
    assert_eq!(addresses(&state), vec!["9 Pine Rd", "77 Oak Ave"]);
    assert_eq!(ranker.call_count(), 1);
}

#[test]
fn placing_twice_is_a_noop() {
    let ranker = Arc::new(ScriptedRanker::with_responses(vec![Ok(
        "77 Oak Ave; 9 Pine Rd".into()
    )]));
    let ctx = test_context(ranker.clone());
    let body = place_body("https://rentals.example/1", 100.0, 100.0);

    let mut first = handle(request(Method::POST, "/api/board/place", &body), &ctx).unwrap();
    let before = body_json(&mut first);

    let mut second = handle(request(Method::POST, "/api/board/place", &body), &ctx).unwrap();
    assert_eq!(second.status(), 200);
    let after = body_json(&mut second);

    assert_eq!(before["squares"], after["squares"]);
    assert_eq!(before["ordered"], after["ordered"]);
    assert_eq!(ranker.call_count(), 1);
}

#[test]
fn move_and_remove_round_trip() {
    let ranker = Arc::new(ScriptedRanker::with_responses(vec![
        Ok("77 Oak Ave; 9 Pine Rd".into()),
        Err(RankingError::Api {
            status: 401,
            body: "bad key".into(),
        }),
    ]));
    let ctx = test_context(ranker);

    let mut placed = handle(
        request(
            Method::POST,
            "/api/board/place",
            &place_body("https://rentals.example/1", 100.0, 100.0),
        ),
        &ctx,
    )
    .unwrap();
    let id = body_json(&mut placed)["squares"][0]["id"].as_u64().unwrap();

    let move_body = json!({
        "id": id,
        "drop": { "x": 325.0, "y": 125.0 },
        "container": { "left": 0.0, "top": 0.0, "height": 600.0 }
    })
    .to_string();
    let mut moved = handle(request(Method::POST, "/api/board/move", &move_body), &ctx).unwrap();
    let state = body_json(&mut moved);
    assert_eq!(state["squares"][0]["id"].as_u64(), Some(id));
    assert_eq!(state["squares"][0]["listing"]["likability"], 300.0);
    assert_eq!(state["squares"][0]["listing"]["applyLikelihood"], 500.0);
    // The failed cycle kept the previous order.
    assert_eq!(addresses(&state), vec!["77 Oak Ave", "9 Pine Rd"]);
    assert_eq!(state["loading"], false);

    let remove_body = json!({ "id": id }).to_string();
    let mut removed = handle(request(Method::POST, "/api/board/remove", &remove_body), &ctx).unwrap();
    let state = body_json(&mut removed);
    assert!(state["squares"].as_array().unwrap().is_empty());
    assert_eq!(addresses(&state), vec!["77 Oak Ave", "9 Pine Rd", "123 Main St"]);
}

#[test]
fn unknown_square_is_json_404() {
    let ctx = test_context(Arc::new(ScriptedRanker::default()));

    let mut resp = respond(
        request(Method::POST, "/api/board/remove", r#"{"id": 99}"#),
        &ctx,
    );
    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(&mut resp)["error"], "Not Found");
}

#[test]
fn unknown_listing_is_json_404() {
    let ctx = test_context(Arc::new(ScriptedRanker::default()));

    let resp = respond(
        request(
            Method::POST,
            "/api/board/place",
            &place_body("https://rentals.example/404", 1.0, 1.0),
        ),
        &ctx,
    );
    assert_eq!(resp.status(), 404);
}

#[test]
fn malformed_body_is_json_400() {
    let ctx = test_context(Arc::new(ScriptedRanker::default()));

    let mut resp = respond(
        request(Method::POST, "/api/board/move", r#"{"id": "one"}"#),
        &ctx,
    );
    assert_eq!(resp.status(), 400);
    let err = body_json(&mut resp)["error"].as_str().unwrap().to_string();
    assert!(err.starts_with("Bad Request: invalid JSON body"));
}
