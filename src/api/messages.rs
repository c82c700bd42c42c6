//! `/v1/messages` protocol request helper.

use crate::error::ApiError;
use crate::types::{MessagesRequest, MessagesResponse};
use tracing::debug;

/// Send one `/v1/messages` request and return the first text block.
pub(crate) async fn request(
    http: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    version: &str,
    request: &MessagesRequest,
) -> Result<String, ApiError> {
    let url = format!("{base_url}/v1/messages");
    let response = http
        .post(&url)
        .header("x-api-key", api_key)
        .header("anthropic-version", version)
        .json(request)
        .send()
        .await?;

    let status = response.status();
    debug!(status = status.as_u16(), %url, "messages response received");
    if !status.is_success() {
        let body = response.text().await.map_err(ApiError::Connectivity)?;
        return Err(ApiError::from_status(status.as_u16(), &body));
    }

    let parsed = response.json::<MessagesResponse>().await?;
    debug!(id = %parsed.id, stop_reason = ?parsed.stop_reason, "messages response decoded");
    parsed
        .first_text()
        .map(str::to_string)
        .ok_or_else(|| ApiError::InvalidResponse("response contained no text block".into()))
}
