// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `domvox` - drive smart-home devices from natural-language instructions.
//!
//! This library implements the command pipeline between a human sentence
//! and a device mutation: it builds a schema-constrained request to an
//! Ollama backend, interprets the structured reply into a typed command,
//! and dispatches that command against an in-memory device registry whose
//! state transitions stay consistent even when replies are malformed,
//! partial, or target invalid devices.
//!
//! # Pipeline
//!
//! ```text
//! instruction -> OllamaClient -> RawReply -> Interpreter -> Command
//!                                                              |
//!                                  ActionSink <- Dispatcher <--+
//!                                                   |
//!                                            DeviceRegistry
//! ```
//!
//! - **[`DeviceRegistry`]**: ordered store of device identity and state
//!   with atomic, self-validating mutators.
//! - **[`CommandSchema`]**: one declarative description of the legal
//!   command shape, shared by the request builder and the validator.
//! - **[`OllamaClient`]**: sends the instruction with the schema as
//!   Ollama's `format` constraint; no retries, explicit timeouts.
//! - **[`Interpreter`]**: two parse layers (envelope, then payload) plus
//!   field-by-field validation into a typed [`Command`].
//! - **[`Dispatcher`]**: resolves the target (including the `all_lights`
//!   broadcast), applies registry mutators, and emits one
//!   [`ActionRecord`] per mutated device.
//!
//! The interactive CLI loop, signal handling, log-file writing, and real
//! actuation are external collaborators; this crate hands them device
//! listings and action records.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use domvox::action::TracingSink;
//! use domvox::backend::BackendConfig;
//! use domvox::dispatch::Dispatcher;
//! use domvox::pipeline::Pipeline;
//! use domvox::registry::DeviceRegistry;
//! use domvox::schema::CommandSchema;
//!
//! #[tokio::main]
//! async fn main() -> domvox::Result<()> {
//!     let registry = Arc::new(DeviceRegistry::with_default_devices());
//!     let schema = CommandSchema::for_registry(&registry);
//!     let client = BackendConfig::new("localhost").into_client()?;
//!     let dispatcher = Dispatcher::new(Arc::clone(&registry), Arc::new(TracingSink));
//!
//!     let pipeline = Pipeline::new(client, schema, dispatcher);
//!     pipeline.probe().await?;
//!
//!     let report = pipeline
//!         .execute("qwen2.5:1.5b", "dim the bedroom light to 30%")
//!         .await?;
//!     for action in &report.applied {
//!         println!("applied: {} {}", action.device, action.verb);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Every failure is recoverable and precisely classified: transport
//! ([`TransportError`]), envelope vs. payload parsing and schema
//! violations ([`ParseError`]), and registry rejections
//! ([`RegistryError`]). A failed instruction leaves the registry
//! untouched and the pipeline ready for the next one.

pub mod action;
pub mod backend;
pub mod command;
pub mod dispatch;
pub mod error;
pub mod interpret;
pub mod pipeline;
pub mod registry;
pub mod schema;
pub mod types;

pub use action::{ActionRecord, ActionSink, MemorySink, TracingSink};
pub use backend::{BackendConfig, OllamaClient, RawReply};
pub use command::{Command, Target};
pub use dispatch::{AppliedAction, DeviceFailure, DispatchReport, Dispatcher};
pub use error::{Error, ParseError, RegistryError, Result, TransportError, ValueError};
pub use interpret::Interpreter;
pub use pipeline::Pipeline;
pub use registry::{DeviceClass, DeviceRegistry, DeviceSpec, DeviceState};
pub use schema::CommandSchema;
pub use types::{Brightness, RgbColor, Temperature};
