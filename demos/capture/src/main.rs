use std::io::{Cursor, Read};

use wirelog::{LogOptions, SystemLocalhost, TrafficLogger};
use wirelog_backend_http::{LoggedRequest, Payload};

fn main() -> wirelog::Result<()> {
    tracing_subscriber::fmt().init();

    let payload = br#"{"city":"Reykjavik"}"#.to_vec();
    let request = http::Request::builder()
        .method(http::Method::POST)
        .uri("http://httpbin.org/post")
        .header(http::header::CONTENT_TYPE, "application/json; charset=utf-8")
        .header("x-request-id", "capture-demo-1")
        .body(Some(Payload::stream(
            Cursor::new(payload.clone()),
            Some(payload.len() as u64),
        )))
        .expect("Failed to build request");

    let mut view = LoggedRequest::new(request, SystemLocalhost);
    let logger = TrafficLogger::new(LogOptions {
        body_preview_limit: Some(512),
        ..LogOptions::default()
    });
    logger.log_request(&mut view)?;

    // The transport reads the same bytes the log entry saw.
    let mut request = view.into_request();
    let mut wire = Vec::new();
    if let Some(payload) = request.body_mut() {
        payload.read_to_end(&mut wire)?;
    }
    println!(
        "{} {} carries {} bytes onto the wire",
        request.method(),
        request.uri(),
        wire.len()
    );
    Ok(())
}
