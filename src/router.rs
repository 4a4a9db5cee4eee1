use crate::app::AppController;
use crate::config::AppConfig;
use crate::domain::{ContainerRect, DropPoint, SquareId};
use crate::errors::ServerError;
use crate::responses::{
    html_error_response, html_response, json_error_response, json_response, ResultResp,
};
use crate::templates::{board_page, BoardVm};
use astra::{Request, Response};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;

/// Shared by every worker thread.
pub struct AppContext {
    pub controller: AppController,
    pub config: AppConfig,
}

#[derive(Debug, Deserialize)]
struct PlaceBody {
    url: String,
    drop: DropPoint,
    container: ContainerRect,
}

#[derive(Debug, Deserialize)]
struct MoveBody {
    id: SquareId,
    drop: DropPoint,
    container: ContainerRect,
}

#[derive(Debug, Deserialize)]
struct RemoveBody {
    id: SquareId,
}

pub fn handle(req: Request, ctx: &AppContext) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => board(&req, ctx),
        ("GET", "/api/state") => json_response(200, &ctx.controller.snapshot()),
        ("POST", "/api/board/place") => {
            let body: PlaceBody = read_json(req)?;
            ctx.controller
                .place_listing(&body.url, body.drop, body.container)?;
            json_response(200, &ctx.controller.snapshot())
        }
        ("POST", "/api/board/move") => {
            let body: MoveBody = read_json(req)?;
            ctx.controller
                .move_square(body.id, body.drop, body.container)?;
            json_response(200, &ctx.controller.snapshot())
        }
        ("POST", "/api/board/remove") => {
            let body: RemoveBody = read_json(req)?;
            ctx.controller.remove_square(body.id)?;
            json_response(200, &ctx.controller.snapshot())
        }
        _ => Err(ServerError::NotFound),
    }
}

/// Runs `handle` and renders any error: JSON for API routes, an HTML page
/// for everything else.
pub fn respond(req: Request, ctx: &AppContext) -> Response {
    let is_api = req.uri().path().starts_with("/api/");

    match handle(req, ctx) {
        Ok(resp) => resp,
        Err(err) if is_api => json_error_response(err),
        Err(err) => html_error_response(err),
    }
}

fn board(req: &Request, ctx: &AppContext) -> ResultResp {
    let params = parse_query(req);
    let detail = params.get("detail").and_then(|url| ctx.controller.listing(url));
    let snapshot = ctx.controller.snapshot();

    html_response(board_page(&BoardVm {
        snapshot: &snapshot,
        detail: detail.as_ref(),
        x_label: &ctx.config.x_axis_label,
        y_label: &ctx.config.y_axis_label,
    }))
}

fn read_json<T: serde::de::DeserializeOwned>(mut req: Request) -> Result<T, ServerError> {
    let mut bytes = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::BadRequest(format!("failed to read body: {e}")))?;

    Ok(serde_json::from_slice(&bytes)?)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
