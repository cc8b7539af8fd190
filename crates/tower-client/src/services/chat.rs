//! HTTP relay for the chat widget.

use gloo::net::http::Request;
use tower_core::{RelayReply, RelayRequest};

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Failed to build chat request: {0}")]
    Request(gloo::net::Error),
    #[error("Chat relay unreachable: {0}")]
    Network(gloo::net::Error),
    #[error("Chat relay answered with status {0}")]
    Status(u16),
    #[error("Chat relay sent an unreadable body: {0}")]
    Decode(gloo::net::Error),
}

/// Posts `request` to `endpoint` and decodes the reply. No retries.
pub async fn send_message(endpoint: &str, request: &RelayRequest) -> Result<RelayReply, ChatError> {
    let response = Request::post(endpoint)
        .header("Accept", "application/json")
        .json(request)
        .map_err(ChatError::Request)?
        .send()
        .await
        .map_err(ChatError::Network)?;

    if !response.ok() {
        return Err(ChatError::Status(response.status()));
    }

    let reply = response
        .json::<RelayReply>()
        .await
        .map_err(ChatError::Decode)?;
    tracing::debug!(reply = reply.text(), "chat relay replied");
    Ok(reply)
}
