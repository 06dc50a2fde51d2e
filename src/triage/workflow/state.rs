// SPDX-License-Identifier: MIT

//! Routing state machine
//!
//! `Start -> Received -> {SeniorAssigned | JuniorAssigned} -> End`. Every input
//! takes exactly three transitions; `End` has none. Only the invocation
//! boundary starts a run, after validating the request.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::nodes::NodeId;
use crate::triage::classifier::{self, RouteLabel};
use crate::triage::ticket::TicketRecord;

/// Position in the workflow, without the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Start,
    Received,
    SeniorAssigned,
    JuniorAssigned,
    End,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Start => "Start",
            Phase::Received => "Received",
            Phase::SeniorAssigned => "SeniorAssigned",
            Phase::JuniorAssigned => "JuniorAssigned",
            Phase::End => "End",
        };
        f.write_str(name)
    }
}

/// What a transition did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum Action {
    /// A node transformation ran
    Node(NodeId),
    /// The classifier chose a branch
    Route(RouteLabel),
}

/// Workflow state carrying the current record
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WorkflowState {
    Start(TicketRecord),
    Received(TicketRecord),
    SeniorAssigned(TicketRecord),
    JuniorAssigned(TicketRecord),
    End(TicketRecord),
}

impl WorkflowState {
    pub fn phase(&self) -> Phase {
        match self {
            WorkflowState::Start(_) => Phase::Start,
            WorkflowState::Received(_) => Phase::Received,
            WorkflowState::SeniorAssigned(_) => Phase::SeniorAssigned,
            WorkflowState::JuniorAssigned(_) => Phase::JuniorAssigned,
            WorkflowState::End(_) => Phase::End,
        }
    }

    pub fn record(&self) -> &TicketRecord {
        match self {
            WorkflowState::Start(r)
            | WorkflowState::Received(r)
            | WorkflowState::SeniorAssigned(r)
            | WorkflowState::JuniorAssigned(r)
            | WorkflowState::End(r) => r,
        }
    }

    pub fn into_record(self) -> TicketRecord {
        match self {
            WorkflowState::Start(r)
            | WorkflowState::Received(r)
            | WorkflowState::SeniorAssigned(r)
            | WorkflowState::JuniorAssigned(r)
            | WorkflowState::End(r) => r,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowState::End(_))
    }

    /// The transition out of this state, or `None` at `End`
    pub fn next(&self) -> Option<(Action, WorkflowState)> {
        match self {
            WorkflowState::Start(r) => Some((
                Action::Node(NodeId::Receive),
                WorkflowState::Received(NodeId::Receive.apply(r)),
            )),
            WorkflowState::Received(r) => {
                let label = classifier::classify(&r.issue);
                let next = match label {
                    RouteLabel::Senior => WorkflowState::SeniorAssigned(r.clone()),
                    RouteLabel::Junior => WorkflowState::JuniorAssigned(r.clone()),
                };
                Some((Action::Route(label), next))
            }
            WorkflowState::SeniorAssigned(r) => Some((
                Action::Node(NodeId::Senior),
                WorkflowState::End(NodeId::Senior.apply(r)),
            )),
            WorkflowState::JuniorAssigned(r) => Some((
                Action::Node(NodeId::Junior),
                WorkflowState::End(NodeId::Junior.apply(r)),
            )),
            WorkflowState::End(_) => None,
        }
    }
}

/// One observed transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: Phase,
    pub to: Phase,
    pub action: Action,
    /// Record after the transition
    pub record: TicketRecord,
}

/// Iterator over the transitions of a single run
pub(crate) struct Transitions {
    state: WorkflowState,
}

impl Transitions {
    /// Drain the remaining transitions and return the final record
    pub fn finish(mut self) -> TicketRecord {
        for _ in self.by_ref() {}
        debug_assert!(self.state.is_terminal());
        self.state.into_record()
    }
}

impl Iterator for Transitions {
    type Item = Transition;

    fn next(&mut self) -> Option<Transition> {
        let (action, next) = self.state.next()?;
        let transition = Transition {
            from: self.state.phase(),
            to: next.phase(),
            action,
            record: next.record().clone(),
        };

        log::debug!(
            "Ticket {}: {} -> {} ({:?})",
            transition.record.ticket_id,
            transition.from,
            transition.to,
            transition.action
        );

        self.state = next;
        Some(transition)
    }
}

/// The fixed ticket routing workflow
pub(crate) struct RoutingWorkflow;

impl RoutingWorkflow {
    /// Begin a run at `Start`
    pub fn start(record: TicketRecord) -> Transitions {
        Transitions {
            state: WorkflowState::Start(record),
        }
    }

    /// Run to `End` and return the final record
    pub fn run_to_end(record: TicketRecord) -> TicketRecord {
        Self::start(record).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::ticket::{Priority, Team};
    use crate::triage::workflow::nodes::{JUNIOR_ASSIGNED, RECEIVED, SENIOR_ASSIGNED};

    #[test]
    fn test_urgent_path() {
        let phases: Vec<(Phase, Phase)> =
            RoutingWorkflow::start(TicketRecord::new("TCK-1", "server is down"))
                .map(|t| (t.from, t.to))
                .collect();

        assert_eq!(
            phases,
            vec![
                (Phase::Start, Phase::Received),
                (Phase::Received, Phase::SeniorAssigned),
                (Phase::SeniorAssigned, Phase::End),
            ]
        );
    }

    #[test]
    fn test_routine_path_actions() {
        let actions: Vec<Action> = RoutingWorkflow::start(TicketRecord::new("TCK-2", "hi"))
            .map(|t| t.action)
            .collect();

        assert_eq!(
            actions,
            vec![
                Action::Node(NodeId::Receive),
                Action::Route(RouteLabel::Junior),
                Action::Node(NodeId::Junior),
            ]
        );
    }

    fn advance(state: WorkflowState) -> WorkflowState {
        state.next().map(|(_, next)| next).unwrap()
    }

    #[test]
    fn test_branch_transition_leaves_record_unchanged() {
        let received = advance(WorkflowState::Start(TicketRecord::new("TCK-3", "payment")));
        let before = received.record().clone();
        let routed = advance(received);

        assert_eq!(routed.phase(), Phase::SeniorAssigned);
        assert_eq!(routed.record(), &before);
    }

    #[test]
    fn test_end_has_no_transition() {
        let end = WorkflowState::End(TicketRecord::new("TCK-4", "x"));
        assert!(end.is_terminal());
        assert!(end.next().is_none());
    }

    #[test]
    fn test_run_to_end() {
        let record = RoutingWorkflow::run_to_end(TicketRecord::new("TCK-5", "Security alert"));
        assert_eq!(record.priority, Some(Priority::High));
        assert_eq!(record.assigned_to, Some(Team::SeniorSupport));
        assert_eq!(record.history, vec![RECEIVED, SENIOR_ASSIGNED]);
    }

    #[test]
    fn test_stepwise_matches_iterator() {
        let mut state = WorkflowState::Start(TicketRecord::new("TCK-6", "rename account"));
        while !state.is_terminal() {
            state = advance(state);
        }
        let stepped = state.into_record();

        let iterated = RoutingWorkflow::run_to_end(TicketRecord::new("TCK-6", "rename account"));
        assert_eq!(stepped, iterated);
        assert_eq!(stepped.history, vec![RECEIVED, JUNIOR_ASSIGNED]);
    }

    #[test]
    fn test_iterator_exhausts_after_three() {
        let mut run = RoutingWorkflow::start(TicketRecord::new("TCK-7", "crash"));
        assert!(run.next().is_some());
        assert!(run.next().is_some());
        assert!(run.next().is_some());
        assert!(run.next().is_none());
        assert!(run.next().is_none());
    }

    #[test]
    fn test_action_serialization() {
        let value = serde_json::to_value(Action::Route(RouteLabel::Senior)).unwrap();
        assert_eq!(value, serde_json::json!({"kind": "route", "name": "senior"}));
    }
}
