// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reply interpretation: raw backend reply to typed command.
//!
//! Two parse layers with distinct diagnostics:
//!
//! 1. The reply envelope must be valid JSON carrying `message.content`
//!    (failure: [`ParseError::Envelope`], or [`ParseError::Backend`] when
//!    the envelope reports an error instead).
//! 2. The extracted content must itself parse as the command JSON object
//!    (failure: [`ParseError::Payload`]).
//!
//! After both parses succeed, every field is checked against the schema;
//! any violation names the offending field. A [`Command`] either satisfies
//! the schema or is never constructed.

use serde::Deserialize;

use crate::backend::RawReply;
use crate::command::{Command, Target};
use crate::error::{ParseError, Result};
use crate::schema::CommandSchema;
use crate::types::{Brightness, RgbColor, Temperature};

#[derive(Deserialize)]
struct ReplyEnvelope {
    message: Option<EnvelopeMessage>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct EnvelopeMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct CommandPayload {
    command: Option<String>,
    device: Option<String>,
    value: Option<i64>,
    temperature: Option<i64>,
    color: Option<String>,
}

/// Converts raw backend replies into typed, validated commands.
///
/// # Examples
///
/// ```
/// use domvox::backend::RawReply;
/// use domvox::interpret::Interpreter;
/// use domvox::registry::DeviceRegistry;
/// use domvox::schema::CommandSchema;
///
/// let schema = CommandSchema::for_registry(&DeviceRegistry::with_default_devices());
/// let interpreter = Interpreter::new(schema);
///
/// let reply = RawReply::new(
///     r#"{"message":{"content":"{\"command\":\"turn_on\",\"device\":\"fan\"}"}}"#,
/// );
/// let command = interpreter.interpret(&reply).unwrap();
/// assert_eq!(command.verb(), "turn_on");
/// ```
#[derive(Debug, Clone)]
pub struct Interpreter {
    schema: CommandSchema,
}

impl Interpreter {
    /// Creates an interpreter validating against the given schema.
    #[must_use]
    pub fn new(schema: CommandSchema) -> Self {
        Self { schema }
    }

    /// Parses and validates a raw reply into a [`Command`].
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] naming the failing layer or field; see the
    /// module docs for the taxonomy. Never panics on malformed input.
    pub fn interpret(&self, reply: &RawReply) -> Result<Command> {
        let envelope: ReplyEnvelope = serde_json::from_str(reply.body())
            .map_err(|e| ParseError::Envelope(e.to_string()))?;

        if let Some(message) = envelope.error {
            return Err(ParseError::Backend(message).into());
        }

        let content = envelope
            .message
            .and_then(|m| m.content)
            .ok_or_else(|| ParseError::Envelope("reply has no message.content".to_string()))?;

        let payload: CommandPayload =
            serde_json::from_str(&content).map_err(|e| ParseError::Payload(e.to_string()))?;

        self.validate(payload)
    }

    fn validate(&self, payload: CommandPayload) -> Result<Command> {
        let verb = payload
            .command
            .ok_or(ParseError::MissingField("command"))?;
        let device = payload.device.ok_or(ParseError::MissingField("device"))?;

        if !self.schema.is_known_device(&device) {
            return Err(ParseError::UnknownDevice(device).into());
        }
        let target = Target::from_wire(&device);

        let command = match verb.as_str() {
            "turn_on" => Command::TurnOn { target },
            "turn_off" => Command::TurnOff { target },
            "set_brightness" => {
                let raw = payload.value.ok_or(ParseError::MissingField("value"))?;
                let brightness = Brightness::new(raw)
                    .map_err(|source| ParseError::InvalidValue { field: "value", source })?;
                Command::SetBrightness { target, brightness }
            }
            "set_temperature" => {
                let raw = payload
                    .temperature
                    .ok_or(ParseError::MissingField("temperature"))?;
                let temperature = Temperature::new(raw).map_err(|source| {
                    ParseError::InvalidValue {
                        field: "temperature",
                        source,
                    }
                })?;
                Command::SetTemperature { target, temperature }
            }
            "set_color" => {
                let raw = payload.color.ok_or(ParseError::MissingField("color"))?;
                let color = RgbColor::from_hex(&raw)
                    .map_err(|source| ParseError::InvalidValue { field: "color", source })?;
                Command::SetColor { target, color }
            }
            _ => return Err(ParseError::UnknownVerb(verb).into()),
        };

        Ok(command)
    }
}
