// Response interpretation shared by every operation
use bytes::Bytes;
use reqwest::StatusCode;
use serde::Deserialize;

/// Error body some failure responses carry. Used only to enrich error
/// messages, never required for correctness.
#[derive(Debug, Deserialize)]
pub struct ErrorPayload {
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
}

/// Classified outcome of one HTTP round trip, before the per-operation
/// fold. Total over all statuses; each operation recognizes a subset of
/// variants and maps the rest through [`Outcome::status`].
#[derive(Debug)]
pub enum Outcome {
    Ok(Bytes),
    Created,
    Unauthorized,
    NotFound,
    BadRequest(Option<String>),
    Other(StatusCode),
}

impl Outcome {
    /// The status code this outcome was classified from.
    pub fn status(&self) -> StatusCode {
        match self {
            Outcome::Ok(_) => StatusCode::OK,
            Outcome::Created => StatusCode::CREATED,
            Outcome::Unauthorized => StatusCode::UNAUTHORIZED,
            Outcome::NotFound => StatusCode::NOT_FOUND,
            Outcome::BadRequest(_) => StatusCode::BAD_REQUEST,
            Outcome::Other(status) => *status,
        }
    }
}

/// Classify a raw response into an [`Outcome`]. Applied identically to
/// every operation's response.
pub fn classify(status: StatusCode, body: Bytes) -> Outcome {
    if status == StatusCode::OK {
        Outcome::Ok(body)
    } else if status == StatusCode::CREATED {
        Outcome::Created
    } else if status == StatusCode::UNAUTHORIZED {
        Outcome::Unauthorized
    } else if status == StatusCode::NOT_FOUND {
        Outcome::NotFound
    } else if status == StatusCode::BAD_REQUEST {
        Outcome::BadRequest(extract_message(&body))
    } else {
        Outcome::Other(status)
    }
}

/// Best-effort message extraction from a Bad Request body. The remote API
/// inconsistently includes a body on this status; a decode failure and a
/// missing or blank message both collapse to `None`.
fn extract_message(body: &Bytes) -> Option<String> {
    serde_json::from_slice::<ErrorPayload>(body)
        .ok()
        .and_then(|payload| payload.message)
        .filter(|message| !message.trim().is_empty())
}
