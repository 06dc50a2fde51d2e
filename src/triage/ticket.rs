// SPDX-License-Identifier: MIT

//! Ticket record types
//!
//! `TicketRecord` is the single value threaded through the routing workflow.
//! Nodes never mutate a record in place; each `with_*` helper consumes a
//! borrowed record and returns a fresh one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ticket priority assigned by a routing node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Normal,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Normal => "Normal",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Support teams a ticket can be assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    #[serde(rename = "Senior Support Team")]
    SeniorSupport,
    #[serde(rename = "Junior Support Team")]
    JuniorSupport,
}

impl Team {
    pub fn name(&self) -> &'static str {
        match self {
            Team::SeniorSupport => "Senior Support Team",
            Team::JuniorSupport => "Junior Support Team",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Incoming ticket as submitted by a caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    #[serde(default)]
    pub ticket_id: String,
    #[serde(default)]
    pub issue: String,
}

impl TicketRequest {
    pub fn new(ticket_id: impl Into<String>, issue: impl Into<String>) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            issue: issue.into(),
        }
    }
}

/// The record threaded through the routing workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecord {
    pub ticket_id: String,
    pub issue: String,
    pub priority: Option<Priority>,
    pub assigned_to: Option<Team>,
    /// Decision trail, one entry per executed node
    pub history: Vec<String>,
}

impl TicketRecord {
    /// Fresh record with nothing assigned and an empty trail
    pub fn new(ticket_id: impl Into<String>, issue: impl Into<String>) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            issue: issue.into(),
            priority: None,
            assigned_to: None,
            history: Vec::new(),
        }
    }

    /// Copy of this record with `entry` appended to the trail
    pub fn with_step(&self, entry: &str) -> Self {
        let mut history = self.history.clone();
        history.push(entry.to_string());
        Self {
            ticket_id: self.ticket_id.clone(),
            issue: self.issue.clone(),
            priority: self.priority,
            assigned_to: self.assigned_to,
            history,
        }
    }

    /// Copy of this record with priority and assignee replaced
    pub fn with_assignment(&self, priority: Option<Priority>, team: Option<Team>) -> Self {
        Self {
            priority,
            assigned_to: team,
            ..self.clone()
        }
    }
}
