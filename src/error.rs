// SPDX-License-Identifier: MIT

//! Typed error handling for ticket-triage
//!
//! Every failure the crate can report surfaces at the invocation boundary or
//! at the binary/server edge. The routing workflow itself never fails.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Top-level error type for ticket-triage
#[derive(Debug, Error)]
pub enum TriageError {
    /// Caller input rejected before the workflow runs
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration errors (invalid env vars, bad flags)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML serialization errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// A required request field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    TicketId,
    Issue,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::TicketId => "ticket_id",
            Field::Issue => "issue",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields were empty or blank
    #[error("missing required {}: {}", plural(.0), join(.0))]
    MissingFields(Vec<Field>),
}

impl ValidationError {
    /// Fields that failed validation
    pub fn fields(&self) -> &[Field] {
        match self {
            ValidationError::MissingFields(fields) => fields,
        }
    }
}

fn plural(fields: &[Field]) -> &'static str {
    if fields.len() == 1 {
        "field"
    } else {
        "fields"
    }
}

fn join(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl TriageError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// True when the error is a caller-input problem rather than a fault
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
