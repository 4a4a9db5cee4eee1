use crate::app::{AppController, RankingDispatch};
use crate::domain::listing::sample;
use crate::domain::{Listing, ListingStore};
use crate::ranking::{Ranker, RankingError, RankingRequest};
use astra::{Body, Request, Response};
use http::Method;
use std::collections::VecDeque;
use std::io::Read;
use std::sync::{Arc, Mutex};

/// Ranker that replays canned completions and records every request.
#[derive(Default)]
pub struct ScriptedRanker {
    responses: Mutex<VecDeque<Result<String, RankingError>>>,
    calls: Mutex<Vec<RankingRequest>>,
}

impl ScriptedRanker {
    pub fn with_responses(responses: Vec<Result<String, RankingError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<RankingRequest> {
        self.calls.lock().unwrap().last().cloned()
    }
}

impl Ranker for ScriptedRanker {
    fn complete(&self, request: &RankingRequest) -> Result<String, RankingError> {
        self.calls.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RankingError::MalformedResponse("no scripted response".into())))
    }
}

pub fn sample_catalog() -> Vec<Listing> {
    vec![
        sample("https://rentals.example/1", "123 Main St"),
        sample("https://rentals.example/2", "77 Oak Ave"),
        sample("https://rentals.example/3", "9 Pine Rd"),
    ]
}

/// Controller over the sample catalog that ranks inline, already showing
/// the raw catalog order.
pub fn test_controller(ranker: Arc<ScriptedRanker>) -> AppController {
    let c = AppController::new(
        ListingStore::from_listings(sample_catalog()),
        ranker,
        200,
        RankingDispatch::Inline,
    );
    c.refresh_ranking();
    c
}

pub fn request(method: Method, uri: &str, body: &str) -> Request {
    let mut req = Request::new(Body::from(body.to_string()));
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

pub fn body_json(resp: &mut Response) -> serde_json::Value {
    serde_json::from_str(&body_string(resp)).unwrap()
}

pub fn test_context(ranker: Arc<ScriptedRanker>) -> crate::router::AppContext {
    crate::router::AppContext {
        controller: test_controller(ranker),
        config: crate::config::AppConfig::default(),
    }
}
