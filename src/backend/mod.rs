// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structured-response client for the Ollama backend.
//!
//! The client turns a natural-language instruction into a `/api/chat`
//! request whose `format` field carries the command schema, so the model is
//! constrained to answer with a schema-conformant JSON object. It returns
//! the raw reply body; interpretation lives in
//! [`Interpreter`](crate::Interpreter).

mod client;
mod config;

pub use client::{OllamaClient, RawReply, SYSTEM_PROMPT};
pub use config::BackendConfig;
