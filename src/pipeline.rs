// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end instruction pipeline.
//!
//! Ties the backend client, interpreter, and dispatcher together: one
//! instruction is fully resolved (network call, parse, dispatch) before the
//! next is accepted. The registry is never touched until both parse layers
//! and validation have succeeded, so a failed instruction has no side
//! effects.

use crate::backend::OllamaClient;
use crate::dispatch::{DispatchReport, Dispatcher};
use crate::error::Result;
use crate::interpret::Interpreter;
use crate::schema::CommandSchema;

/// Instruction-to-mutation pipeline.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use domvox::action::TracingSink;
/// use domvox::backend::BackendConfig;
/// use domvox::dispatch::Dispatcher;
/// use domvox::pipeline::Pipeline;
/// use domvox::registry::DeviceRegistry;
/// use domvox::schema::CommandSchema;
///
/// # async fn example() -> domvox::Result<()> {
/// let registry = Arc::new(DeviceRegistry::with_default_devices());
/// let schema = CommandSchema::for_registry(&registry);
/// let client = BackendConfig::new("localhost").into_client()?;
/// let dispatcher = Dispatcher::new(registry, Arc::new(TracingSink));
///
/// let pipeline = Pipeline::new(client, schema, dispatcher);
/// let report = pipeline
///     .execute("qwen2.5:1.5b", "turn on the living room light")
///     .await?;
/// assert!(report.succeeded());
/// # Ok(())
/// # }
/// ```
pub struct Pipeline {
    client: OllamaClient,
    schema: CommandSchema,
    interpreter: Interpreter,
    dispatcher: Dispatcher,
}

impl Pipeline {
    /// Creates a pipeline; the interpreter validates against the same
    /// schema the client sends to the backend.
    #[must_use]
    pub fn new(client: OllamaClient, schema: CommandSchema, dispatcher: Dispatcher) -> Self {
        let interpreter = Interpreter::new(schema.clone());
        Self {
            client,
            schema,
            interpreter,
            dispatcher,
        }
    }

    /// Returns the dispatcher (and through it, the registry).
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Checks backend connectivity before interactive use.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` if the backend is unreachable.
    pub async fn probe(&self) -> Result<()> {
        self.client.probe().await?;
        Ok(())
    }

    /// Resolves one natural-language instruction end to end.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` if the backend is unreachable, or a
    /// `ParseError` if the reply cannot be turned into a valid command. In
    /// both cases no device state was mutated.
    pub async fn execute(&self, model: &str, instruction: &str) -> Result<DispatchReport> {
        tracing::info!(model, instruction, "resolving instruction");

        let reply = self.client.request(model, &self.schema, instruction).await?;
        let command = self.interpreter.interpret(&reply)?;

        tracing::debug!(verb = command.verb(), target = %command.target(), "dispatching");
        Ok(self.dispatcher.dispatch(&command))
    }
}
