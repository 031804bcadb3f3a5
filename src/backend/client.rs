// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ollama HTTP client.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::error::TransportError;
use crate::schema::CommandSchema;

/// Fixed system prompt sent with every chat request.
///
/// The `format` constraint does the heavy lifting; the prompt reinforces
/// that nothing but the JSON object is wanted.
pub const SYSTEM_PROMPT: &str = "\
You are a smart home control system. Convert the user's instruction into a \
single JSON object in the required format.
Output rules:
1. Output only the JSON object, with no extra text, explanation, or markup
2. Every value must conform to the schema
3. If the instruction is ambiguous, choose sensible defaults";

// Low temperature keeps the structured output stable.
const MODEL_TEMPERATURE: f64 = 0.1;
const NUM_PREDICT: u32 = 100;

/// Raw reply body from the backend, prior to interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply(String);

impl RawReply {
    /// Wraps a raw reply body.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    /// Returns the reply body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.0
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    stream: bool,
    format: serde_json::Value,
    messages: [ChatMessage<'a>; 2],
    options: ChatOptions,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatOptions {
    temperature: f64,
    num_predict: u32,
}

/// HTTP client for the Ollama backend.
///
/// The client is deliberately thin: it builds the schema-constrained chat
/// request, sends it, and hands back the raw body. It never retries — retry
/// policy belongs to the caller.
///
/// # Examples
///
/// ```no_run
/// use domvox::backend::BackendConfig;
/// use domvox::registry::DeviceRegistry;
/// use domvox::schema::CommandSchema;
///
/// # async fn example() -> domvox::Result<()> {
/// let registry = DeviceRegistry::with_default_devices();
/// let schema = CommandSchema::for_registry(&registry);
/// let client = BackendConfig::new("localhost").into_client()?;
///
/// client.probe().await?;
/// let reply = client
///     .request("qwen2.5:1.5b", &schema, "turn on the living room light")
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    client: Client,
    request_timeout: Duration,
    probe_timeout: Duration,
}

impl OllamaClient {
    pub(super) fn from_parts(
        base_url: String,
        client: Client,
        request_timeout: Duration,
        probe_timeout: Duration,
    ) -> Self {
        Self {
            base_url,
            client,
            request_timeout,
            probe_timeout,
        }
    }

    /// Returns the backend's base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Checks connectivity with `GET /api/tags`.
    ///
    /// Lets callers fail fast before entering interactive use.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Timeout` if the probe timeout elapses,
    /// `TransportError::Status` on a non-2xx answer, and
    /// `TransportError::Http` on any other transport failure.
    pub async fn probe(&self) -> Result<(), TransportError> {
        let url = format!("{}/api/tags", self.base_url);

        tracing::debug!(url = %url, "Probing backend");

        let response = self
            .client
            .get(&url)
            .timeout(self.probe_timeout)
            .send()
            .await
            .map_err(|e| map_send_error(e, self.probe_timeout))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(TransportError::Status(response.status().as_u16()))
        }
    }

    /// Sends an instruction as a schema-constrained chat request and
    /// returns the raw reply body.
    ///
    /// The body carries `POST /api/chat` with `stream: false`, the schema
    /// as the `format` constraint, the fixed system prompt, and the user's
    /// instruction. Non-2xx answers still yield a body: Ollama reports
    /// failures as a JSON envelope with an `error` field, which the
    /// interpreter surfaces with a precise diagnostic.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Timeout` if the request timeout elapses,
    /// and `TransportError::Http` on connection or protocol failure.
    pub async fn request(
        &self,
        model: &str,
        schema: &CommandSchema,
        instruction: &str,
    ) -> Result<RawReply, TransportError> {
        let url = format!("{}/api/chat", self.base_url);
        let request = ChatRequest {
            model,
            stream: false,
            format: schema.as_json(),
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: instruction,
                },
            ],
            options: ChatOptions {
                temperature: MODEL_TEMPERATURE,
                num_predict: NUM_PREDICT,
            },
        };

        tracing::debug!(url = %url, model, instruction, "Sending chat request");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| map_send_error(e, self.request_timeout))?;

        let body = response.text().await.map_err(TransportError::Http)?;

        tracing::debug!(body = %body, "Received chat reply");

        Ok(RawReply::new(body))
    }

}

#[allow(clippy::cast_possible_truncation)]
fn map_send_error(error: reqwest::Error, timeout: Duration) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout(timeout.as_millis() as u64)
    } else {
        TransportError::Http(error)
    }
}
