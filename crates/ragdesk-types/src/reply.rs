//! Classification of server replies.
//!
//! The server answers every request with a JSON object and signals the
//! result only through which fields are present. Field presence follows
//! JavaScript truthiness since the server side treats replies that way:
//! `null`, `false`, `0` and `""` count as absent.

use serde_json::Value;

use crate::error::PortalError;
use crate::message::{ChatMessage, Notice};
use crate::page::{AdminForm, Endpoint};

/// Shown in the chat log when a reply carries neither an answer nor an error.
pub const NO_RESPONSE_FALLBACK: &str = "No response from server";

const NULL_REPLY: &str = "reply body was null";

/// Every way a request/response cycle can end.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The endpoint's success field was present.
    Success {
        text: String,
        detail: Option<String>,
    },
    /// A reply arrived without the success field.
    Failure { error: Option<String> },
    /// No usable reply: transport failure, a non-JSON body, or `null`.
    Malformed(PortalError),
}

impl Outcome {
    /// Classify a decoded reply for the given endpoint.
    ///
    /// A `null` body has no fields to read at all and counts as malformed.
    /// Other non-object bodies simply lack the fields and count as failures.
    pub fn from_reply(endpoint: Endpoint, reply: &Value) -> Self {
        if reply.is_null() {
            return Outcome::Malformed(PortalError::decode(NULL_REPLY));
        }
        match truthy_field(reply, endpoint.success_field()) {
            Some(text) => Outcome::Success {
                text,
                detail: truthy_field(reply, endpoint.detail_field()),
            },
            None => Outcome::Failure {
                error: truthy_field(reply, "error"),
            },
        }
    }

    /// Classify the result of a whole request.
    pub fn from_result(endpoint: Endpoint, result: Result<Value, PortalError>) -> Self {
        match result {
            Ok(reply) => Self::from_reply(endpoint, &reply),
            Err(err) => {
                tracing::warn!(path = endpoint.path(), error = %err, "request failed");
                Outcome::Malformed(err)
            }
        }
    }

    /// Notice for an admin result area.
    pub fn into_notice(self, form: AdminForm) -> Notice {
        match self {
            Outcome::Success { text, detail } => {
                let notice = match form {
                    AdminForm::Upload => Notice::success(text),
                    AdminForm::Query => Notice::answer(text),
                };
                match detail {
                    Some(detail) => notice.with_detail(detail),
                    None => notice,
                }
            }
            Outcome::Failure { error } => Notice::error(error.unwrap_or_default()),
            Outcome::Malformed(err) => {
                Notice::error(format!("{}: {}", form.failure_prefix(), err))
            }
        }
    }

    /// Bot message for the chat log.
    pub fn into_chat_reply(self) -> ChatMessage {
        let text = match self {
            Outcome::Success { text, .. } => text,
            Outcome::Failure { error } => {
                error.unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string())
            }
            Outcome::Malformed(err) => format!("Error: {}", err),
        };
        ChatMessage::bot(text)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

/// Read `field` from a reply object if its value is truthy.
///
/// Strings come back as-is; other truthy values come back as their JSON
/// text. Non-object replies have no fields.
pub fn truthy_field(reply: &Value, field: &str) -> Option<String> {
    match reply.get(field)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
