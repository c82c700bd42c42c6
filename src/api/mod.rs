//! HTTP client for the Anthropic Messages API.
//!
//! - `messages`: one `/v1/messages` request and its error mapping
//! - `client`: configured HTTP client and the [`AnalysisClient`] impl

use crate::error::ApiError;
use async_trait::async_trait;

mod client;
mod messages;

pub use client::ApiClient;

/// Text-generation boundary used by the analysis flow.
///
/// Tests substitute a canned implementation so the flow runs without network
/// calls while the production path uses [`ApiClient`].
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Send the whole prompt as one request and return the response text.
    async fn analyze(&self, prompt: &str) -> Result<String, ApiError>;
}
