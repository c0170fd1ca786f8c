//! tiny_http server adapter
//!
//! Handles routing, header/body extraction, and response conversion for
//! tiny_http. Each webhook delivery is acknowledged immediately and then
//! processed on its own thread: the HTTP response to GitHub is decoupled
//! from completion of the classification/status-post pipeline, and no
//! ordering between concurrent deliveries is guaranteed or required.

use std::io::Cursor;
#[allow(unused_imports)]
use std::io::Read as _;
use std::sync::Arc;
use std::thread;

use anyhow::anyhow;
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use testkeeper::config::BotConfig;
use testkeeper::github::GithubClient;
use testkeeper::webhook::{Event, EventHandler};

const EVENT_HEADER: &str = "X-GitHub-Event";

/// Run the webhook server until the process is terminated
pub fn serve(config: BotConfig) -> anyhow::Result<()> {
    let token = config.token();
    if token.is_none() {
        log::warn!("no GitHub token configured; status posting will fail on private repos");
    }

    let client = Arc::new(GithubClient::new(&config.github.api_url, token)?);
    let addr = format!("{}:{}", config.server.bind, config.server.port);
    let server = Server::http(&addr).map_err(|err| anyhow!("failed to bind {addr}: {err}"))?;
    log::info!("listening on {addr}");

    for request in server.incoming_requests() {
        handle_request(request, &client, &config);
    }
    Ok(())
}

/// Route a single HTTP request
fn handle_request(request: Request, client: &Arc<GithubClient>, config: &BotConfig) {
    let method = request.method().clone();
    let url = request.url().to_string();

    let response = match (&method, url.as_str()) {
        (&Method::Get, "/healthz") => json_response(r#"{"status":"ok"}"#, 200),
        (&Method::Post, "/" | "/hook") => return accept_delivery(request, client, config),
        _ => json_response(r#"{"error":"not found"}"#, 404),
    };

    respond(request, response);
}

/// Decode a webhook delivery, acknowledge it, and process it off-thread
fn accept_delivery(mut request: Request, client: &Arc<GithubClient>, config: &BotConfig) {
    let kind = event_kind(&request);
    let mut body = String::new();
    if let Err(err) = request.as_reader().read_to_string(&mut body) {
        log::warn!("failed to read webhook body: {err}");
        respond(request, json_response(r#"{"error":"unreadable body"}"#, 400));
        return;
    }

    let Some(kind) = kind else {
        respond(request, json_response(r#"{"error":"missing event header"}"#, 400));
        return;
    };

    let event = match Event::decode(&kind, &body) {
        Ok(event) => event,
        Err(err) => {
            log::warn!("rejecting {kind} delivery: {err:#}");
            respond(request, json_response(r#"{"error":"malformed payload"}"#, 400));
            return;
        },
    };

    // Acknowledge first; classification and status posting happen on a
    // worker thread and their outcome never reaches this response.
    respond(request, json_response(r#"{"accepted":true}"#, 202));

    let client = Arc::clone(client);
    let plugins = config.plugins.clone();
    thread::spawn(move || {
        let handler = EventHandler::new(client.as_ref(), plugins);
        if let Err(err) = handler.handle(&event) {
            log::error!("delivery processing failed: {err:#}");
        }
    });
}

/// Extract the `X-GitHub-Event` header value
fn event_kind(request: &Request) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.equiv(EVENT_HEADER))
        .map(|h| h.value.as_str().to_string())
}

/// Build a JSON response with a status code
fn json_response(body: &str, status: u16) -> Response<Cursor<Vec<u8>>> {
    Response::from_data(body.as_bytes().to_vec())
        .with_header(Header::from_bytes("Content-Type", "application/json").unwrap())
        .with_status_code(StatusCode(status))
}

/// Send a response, logging transport failures
fn respond(request: Request, response: Response<Cursor<Vec<u8>>>) {
    if let Err(err) = request.respond(response) {
        log::warn!("failed to send response: {err}");
    }
}
