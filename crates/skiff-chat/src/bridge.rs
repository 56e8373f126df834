//! Backend bridge — HTTP client for the chat and upload endpoints.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of prior turns sent with each chat request.
pub const HISTORY_LIMIT: usize = 32;

/// Errors surfaced by backend calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, bad body)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("backend returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Local file could not be read for upload
    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),
}

/// One prior conversation turn, as the backend expects it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryTurn {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    system_prompt: &'a str,
    history: &'a [HistoryTurn],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    reply: String,
}

/// Receipt returned by the backend after a document upload.
///
/// The backend response also carries the generated embeddings; the client
/// only keeps the fields it displays.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReceipt {
    pub filename: String,
    pub content_type: Option<String>,
    pub size_bytes: u64,
}

/// HTTP client bound to one backend endpoint and one system prompt.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    system_prompt: String,
}

impl BackendClient {
    pub fn new(api_url: &str, system_prompt: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: api_url.trim_end_matches('/').to_string(),
            system_prompt: system_prompt.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one user message with recent history, returning the reply text.
    pub async fn send_message(
        &self,
        message: &str,
        history: &[HistoryTurn],
    ) -> Result<String, ApiError> {
        let request = ChatRequest {
            message,
            system_prompt: &self.system_prompt,
            history: recent_history(history),
        };
        let response = self
            .http
            .post(format!("{}/chat", self.base_url))
            .json(&request)
            .send()
            .await?;
        let response = error_for_status(response).await?;
        Ok(response.json::<ChatResponse>().await?.reply)
    }

    /// Upload a document for the backend to extract and embed.
    pub async fn upload_document(&self, path: &Path) -> Result<UploadReceipt, ApiError> {
        let bytes = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
        let form = reqwest::multipart::Form::new().part("file", part);
        let response = self
            .http
            .post(format!("{}/upload", self.base_url))
            .multipart(form)
            .send()
            .await?;
        let response = error_for_status(response).await?;
        Ok(response.json().await?)
    }
}

/// The trailing window of history a chat request carries.
fn recent_history(history: &[HistoryTurn]) -> &[HistoryTurn] {
    let start = history.len().saturating_sub(HISTORY_LIMIT);
    &history[start..]
}

async fn error_for_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(role: &str, content: &str) -> HistoryTurn {
        HistoryTurn {
            role: role.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = BackendClient::new("http://localhost:8000/", "default");
        assert_eq!(client.base_url(), "http://localhost:8000");

        let client = BackendClient::new("http://localhost:8000", "default");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_chat_request_wire_shape() {
        let history = vec![turn("user", "hi"), turn("assistant", "hello")];
        let request = ChatRequest {
            message: "show me a page",
            system_prompt: "default",
            history: &history,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "message": "show me a page",
                "system_prompt": "default",
                "history": [
                    { "role": "user", "content": "hi" },
                    { "role": "assistant", "content": "hello" },
                ],
            })
        );
    }

    #[test]
    fn test_upload_receipt_ignores_embeddings() {
        let body = serde_json::json!({
            "filename": "notes.pdf",
            "content_type": "application/pdf",
            "size_bytes": 4096,
            "embeddings": [0.1, 0.2, 0.3],
        });
        let receipt: UploadReceipt = serde_json::from_value(body).unwrap();
        assert_eq!(receipt.filename, "notes.pdf");
        assert_eq!(receipt.content_type.as_deref(), Some("application/pdf"));
        assert_eq!(receipt.size_bytes, 4096);
    }

    #[test]
    fn test_recent_history_keeps_latest_turns() {
        let history: Vec<HistoryTurn> = (0..40)
            .map(|i| turn("user", &format!("turn {}", i)))
            .collect();
        let recent = recent_history(&history);
        assert_eq!(recent.len(), HISTORY_LIMIT);
        assert_eq!(recent.first().unwrap().content, "turn 8");
        assert_eq!(recent.last().unwrap().content, "turn 39");

        let short = vec![turn("user", "only")];
        assert_eq!(recent_history(&short).len(), 1);
    }
}
