// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Backend connection configuration.

use std::time::Duration;

use reqwest::Client;

use crate::error::TransportError;

use super::OllamaClient;

/// Configuration for the Ollama backend connection.
///
/// # Examples
///
/// ```
/// use domvox::backend::BackendConfig;
/// use std::time::Duration;
///
/// // Local backend on the default port
/// let config = BackendConfig::new("localhost");
///
/// // With all options
/// let config = BackendConfig::new("192.168.1.10")
///     .with_port(11500)
///     .with_request_timeout(Duration::from_secs(30))
///     .with_probe_timeout(Duration::from_secs(1));
/// ```
#[derive(Debug, Clone)]
pub struct BackendConfig {
    host: String,
    port: u16,
    request_timeout: Duration,
    probe_timeout: Duration,
}

impl BackendConfig {
    /// Default Ollama port.
    pub const DEFAULT_PORT: u16 = 11434;
    /// Default chat request timeout.
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(15_000);
    /// Default connectivity-probe timeout.
    pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(3_000);

    /// Creates a configuration for the specified host.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            request_timeout: Self::DEFAULT_REQUEST_TIMEOUT,
            probe_timeout: Self::DEFAULT_PROBE_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the chat request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the connectivity-probe timeout.
    #[must_use]
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the chat request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the connectivity-probe timeout.
    #[must_use]
    pub fn probe_timeout(&self) -> Duration {
        self.probe_timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Creates an [`OllamaClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<OllamaClient, TransportError> {
        if self.host.is_empty() {
            return Err(TransportError::InvalidAddress("host is required".to_string()));
        }

        let client = Client::builder()
            .timeout(self.request_timeout)
            .build()
            .map_err(TransportError::Http)?;

        Ok(OllamaClient::from_parts(
            self.base_url(),
            client,
            self.request_timeout,
            self.probe_timeout,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = BackendConfig::new("localhost");
        assert_eq!(config.host(), "localhost");
        assert_eq!(config.port(), 11434);
        assert_eq!(config.request_timeout(), Duration::from_millis(15_000));
        assert_eq!(config.probe_timeout(), Duration::from_millis(3_000));
    }

    #[test]
    fn base_url() {
        let config = BackendConfig::new("192.168.1.10").with_port(8080);
        assert_eq!(config.base_url(), "http://192.168.1.10:8080");
    }

    #[test]
    fn builder_chain() {
        let config = BackendConfig::new("localhost")
            .with_port(11500)
            .with_request_timeout(Duration::from_secs(30))
            .with_probe_timeout(Duration::from_secs(1));
        assert_eq!(config.port(), 11500);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.probe_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn empty_host_is_rejected() {
        let result = BackendConfig::new("").into_client();
        assert!(matches!(result, Err(TransportError::InvalidAddress(_))));
    }

    #[test]
    fn into_client_builds() {
        let client = BackendConfig::new("localhost").into_client().unwrap();
        assert_eq!(client.base_url(), "http://localhost:11434");
    }
}
