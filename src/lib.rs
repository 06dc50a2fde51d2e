// SPDX-License-Identifier: MIT

//! Ticket triage: routes a support ticket to senior or junior support by
//! keyword, recording each decision on the ticket.

pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod triage;

pub use error::{TriageError, ValidationError};
