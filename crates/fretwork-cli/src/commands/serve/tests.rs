//! Tests for the HTTP scale service handler.

use tiny_http::Method;

use fretwork_scale::Scale;

use super::handler::handle;
use super::types::ErrorBody;

fn get(url: &str) -> super::types::Reply {
    handle(&Method::Get, url)
}

fn error_message(body: &str) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap();
    parsed.error
}

#[test]
fn test_get_scale_success() {
    let reply = get("/scales?key=C&type=major");
    assert_eq!(reply.status, 200);

    let scale: Scale = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(scale.tonic, "C");
    assert_eq!(scale.scale_notes, ["C", "D", "E", "F", "G", "A", "B"]);
    assert_eq!(scale.blue_note, None);
}

#[test]
fn test_get_blues_scale_carries_blue_note() {
    let reply = get("/scales?key=A&type=blues");
    assert_eq!(reply.status, 200);

    let scale: Scale = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(scale.scale_notes, ["A", "C", "D", "D#", "E", "G"]);
    assert_eq!(scale.blue_note.as_deref(), Some("D#"));
    assert!(reply.body.contains("\"blueNote\""));
}

#[test]
fn test_non_blues_response_omits_blue_note_field() {
    let reply = get("/scales?key=A&type=minor");
    assert_eq!(reply.status, 200);
    assert!(!reply.body.contains("blueNote"));
}

#[test]
fn test_percent_encoded_sharp_key() {
    let reply = get("/scales?key=C%23&type=major");
    assert_eq!(reply.status, 200);

    let scale: Scale = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(scale.tonic, "C#");
    assert_eq!(scale.scale_notes, ["C#", "D#", "F", "F#", "G#", "A#", "C"]);
}

#[test]
fn test_missing_key_parameter() {
    let reply = get("/scales?type=major");
    assert_eq!(reply.status, 400);
    assert_eq!(
        error_message(&reply.body),
        "Missing 'key' parameter. Example: /scales?key=C&type=major"
    );
}

#[test]
fn test_missing_type_parameter() {
    let reply = get("/scales?key=C");
    assert_eq!(reply.status, 400);
    assert_eq!(
        error_message(&reply.body),
        "Missing 'type' parameter. Example: /scales?key=C&type=major"
    );
}

#[test]
fn test_empty_key_counts_as_missing() {
    let reply = get("/scales?key=&type=major");
    assert_eq!(reply.status, 400);
    assert!(error_message(&reply.body).starts_with("Missing 'key' parameter"));
}

#[test]
fn test_no_query_string_at_all() {
    let reply = get("/scales");
    assert_eq!(reply.status, 400);
    assert!(error_message(&reply.body).starts_with("Missing 'key' parameter"));
}

#[test]
fn test_invalid_key_is_client_error() {
    let reply = get("/scales?key=Z&type=major");
    assert_eq!(reply.status, 400);
    let message = error_message(&reply.body);
    assert!(message.contains("'Z'"), "unexpected message: {}", message);
}

#[test]
fn test_flat_spelling_is_rejected_not_normalized() {
    let reply = get("/scales?key=Db&type=major");
    assert_eq!(reply.status, 400);
    assert!(error_message(&reply.body).contains("'Db'"));
}

#[test]
fn test_unknown_scale_type_is_client_error() {
    let reply = get("/scales?key=C&type=dorian");
    assert_eq!(reply.status, 400);
    let message = error_message(&reply.body);
    assert!(message.contains("'dorian'"), "unexpected message: {}", message);
}

#[test]
fn test_unknown_path() {
    let reply = get("/chords?key=C&type=major");
    assert_eq!(reply.status, 404);
}

#[test]
fn test_method_not_allowed() {
    let reply = handle(&Method::Post, "/scales?key=C&type=major");
    assert_eq!(reply.status, 405);
}

#[test]
fn test_duplicate_parameter_first_wins() {
    let reply = get("/scales?key=C&key=D&type=major");
    assert_eq!(reply.status, 200);

    let scale: Scale = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(scale.tonic, "C");
}

#[test]
fn test_every_key_and_type_succeeds() {
    for key in fretwork_scale::NOTE_NAMES {
        for scale_type in fretwork_scale::ScaleType::all() {
            let url = format!(
                "/scales?key={}&type={}",
                key.replace('#', "%23"),
                scale_type.as_str()
            );
            let reply = get(&url);
            assert_eq!(reply.status, 200, "failed for {}", url);
        }
    }
}
