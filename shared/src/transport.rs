use std::fmt::Display;

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// Raw transport-level reply: the HTTP status and the unparsed body text.
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Capability seam for performing one HTTP POST on behalf of the dispatcher.
///
/// Implementations serialize the payload themselves so serialization failures
/// surface through the same error channel as network failures. Futures are
/// `?Send`: every view layer runs the submission on a single thread.
#[async_trait::async_trait(?Send)]
pub trait ClientTransport {
    type Error: Display;

    async fn post_json<P>(&self, route: &str, payload: &P) -> Result<RawResponse, Self::Error>
    where
        P: Serialize + ?Sized;
}

#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum DispatchError {
    #[error("API error {status}")]
    HttpStatus { status: u16 },
    #[error("{message}")]
    Transport { message: String },
    #[error("{message}")]
    Decode { message: String },
}
