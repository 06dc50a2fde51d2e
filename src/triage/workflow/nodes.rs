// SPDX-License-Identifier: MIT

//! Node transformations of the routing workflow
//!
//! Each node borrows the current record and returns a new one with exactly
//! one history entry appended.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::triage::ticket::{Priority, Team, TicketRecord};

pub const RECEIVED: &str = "Ticket received";
pub const SENIOR_ASSIGNED: &str = "Assigned to Senior Support";
pub const JUNIOR_ASSIGNED: &str = "Assigned to Junior Support";

/// Identifier of a workflow node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeId {
    Receive,
    Senior,
    Junior,
}

impl NodeId {
    pub const ALL: [NodeId; 3] = [NodeId::Receive, NodeId::Senior, NodeId::Junior];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeId::Receive => "receive",
            NodeId::Senior => "senior",
            NodeId::Junior => "junior",
        }
    }

    /// Apply this node to a record
    pub fn apply(&self, record: &TicketRecord) -> TicketRecord {
        match self {
            NodeId::Receive => receive(record),
            NodeId::Senior => senior_support(record),
            NodeId::Junior => junior_support(record),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intake: clears any assignment and records receipt
pub fn receive(record: &TicketRecord) -> TicketRecord {
    record.with_assignment(None, None).with_step(RECEIVED)
}

pub fn senior_support(record: &TicketRecord) -> TicketRecord {
    record
        .with_assignment(Some(Priority::High), Some(Team::SeniorSupport))
        .with_step(SENIOR_ASSIGNED)
}

pub fn junior_support(record: &TicketRecord) -> TicketRecord {
    record
        .with_assignment(Some(Priority::Normal), Some(Team::JuniorSupport))
        .with_step(JUNIOR_ASSIGNED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receive_resets_assignment() {
        let stale = TicketRecord::new("TCK-1", "help")
            .with_assignment(Some(Priority::High), Some(Team::SeniorSupport));
        let out = receive(&stale);

        assert_eq!(out.priority, None);
        assert_eq!(out.assigned_to, None);
        assert_eq!(out.history, vec![RECEIVED.to_string()]);
        // input untouched
        assert_eq!(stale.priority, Some(Priority::High));
    }

    #[test]
    fn test_senior_support() {
        let out = senior_support(&TicketRecord::new("TCK-1", "crash").with_step(RECEIVED));
        assert_eq!(out.priority, Some(Priority::High));
        assert_eq!(out.assigned_to, Some(Team::SeniorSupport));
        assert_eq!(out.history, vec![RECEIVED, SENIOR_ASSIGNED]);
    }

    #[test]
    fn test_junior_support() {
        let out = junior_support(&TicketRecord::new("TCK-1", "hello").with_step(RECEIVED));
        assert_eq!(out.priority, Some(Priority::Normal));
        assert_eq!(out.assigned_to, Some(Team::JuniorSupport));
        assert_eq!(out.history, vec![RECEIVED, JUNIOR_ASSIGNED]);
    }

    #[test]
    fn test_node_apply_dispatch() {
        let record = TicketRecord::new("a", "b");
        for node in NodeId::ALL {
            assert_eq!(node.apply(&record).history.len(), 1);
        }
    }
}
