//! Request routing and JSON response shaping for the scale service.

use tiny_http::Method;

use fretwork_scale::Scale;

use super::query;
use super::types::Reply;

/// Example request shown in missing-parameter errors.
const USAGE_EXAMPLE: &str = "/scales?key=C&type=major";

/// Route a request (method + raw URL) to a status code and JSON body.
///
/// Core validation failures surface as 400 with the error's display text;
/// anything else that fails while producing a response surfaces as 500 with
/// a generic wrapped message. The boundary never repairs input.
pub fn handle(method: &Method, url: &str) -> Reply {
    let (path, raw_query) = match url.split_once('?') {
        Some((path, raw_query)) => (path, raw_query),
        None => (url, ""),
    };

    if path != "/scales" {
        return Reply::error(404, format!("Not found: {}", path));
    }
    if *method != Method::Get {
        return Reply::error(405, format!("Method {} not allowed on /scales", method));
    }

    let params = query::parse(raw_query);

    // An empty value counts as missing, matching `?key=&type=major`.
    let key = match query::first(&params, "key") {
        Some(key) if !key.is_empty() => key,
        _ => {
            return Reply::error(
                400,
                format!("Missing 'key' parameter. Example: {}", USAGE_EXAMPLE),
            )
        }
    };
    let scale_type = match query::first(&params, "type") {
        Some(scale_type) if !scale_type.is_empty() => scale_type,
        _ => {
            return Reply::error(
                400,
                format!("Missing 'type' parameter. Example: {}", USAGE_EXAMPLE),
            )
        }
    };

    match Scale::from_request(key, scale_type) {
        Ok(scale) => match serde_json::to_string(&scale) {
            Ok(body) => Reply::ok(body),
            Err(e) => Reply::error(500, format!("An unexpected error occurred: {}", e)),
        },
        Err(e) => Reply::error(400, e.to_string()),
    }
}
