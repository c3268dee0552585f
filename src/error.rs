use reqwest::StatusCode;
use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Environment variable '{key}' is required but not found"))]
    MissingEnvVar { key: String },

    #[snafu(display("No access key provided"))]
    MissingAccessKey,

    #[snafu(display("Access key does not match any known token shape"))]
    MalformedAccessKey,

    #[snafu(display("No storage zone provided"))]
    MissingZone,

    #[snafu(display("Invalid storage zone name: {zone}"))]
    MalformedZone { zone: String },

    #[snafu(display("Path must not be empty"))]
    EmptyPath,

    #[snafu(display("Remote rejected the access key"))]
    Unauthorized,

    #[snafu(display("Path not found in zone: {path}"))]
    NotFound { path: String },

    #[snafu(display("Remote rejected the request: {message}"))]
    BadRequest { message: String },

    #[snafu(display("Failed to decode response body: {source}"))]
    InvalidResponse { source: serde_json::Error },

    #[snafu(display("Unexpected/unhandled response status: {status}"))]
    UnexpectedStatus { status: StatusCode },

    #[snafu(display("Transport error: {source}"))]
    Transport { source: reqwest::Error },
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Transport { source: error }
    }
}
