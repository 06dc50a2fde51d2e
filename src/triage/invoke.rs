// SPDX-License-Identifier: MIT

//! Invocation boundary
//!
//! The only entry point callers use. Validates the request, then runs the
//! routing workflow to completion.

use crate::error::{Field, TriageError, ValidationError};
use crate::triage::classifier;
use crate::triage::ticket::{TicketRecord, TicketRequest};
use crate::triage::workflow::{RoutingWorkflow, Transition};

/// Every transition of a single run together with the final record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingTrace {
    pub transitions: Vec<Transition>,
    pub record: TicketRecord,
}

/// Check that both fields carry something other than whitespace.
/// Accepted values are passed on unmodified.
pub fn validate(ticket_id: &str, issue: &str) -> Result<(), ValidationError> {
    let mut missing = Vec::new();
    if ticket_id.trim().is_empty() {
        missing.push(Field::TicketId);
    }
    if issue.trim().is_empty() {
        missing.push(Field::Issue);
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

fn initial_record(ticket_id: &str, issue: &str) -> Result<TicketRecord, TriageError> {
    if let Err(e) = validate(ticket_id, issue) {
        log::warn!("Rejected ticket: {}", e);
        return Err(e.into());
    }
    Ok(TicketRecord::new(ticket_id, issue))
}

/// Route a single ticket and return the final record
pub fn run(ticket_id: &str, issue: &str) -> Result<TicketRecord, TriageError> {
    let record = initial_record(ticket_id, issue)?;

    log::info!(
        "Routing ticket {} (keywords: {:?})",
        ticket_id,
        classifier::matched_keywords(issue)
    );

    let result = RoutingWorkflow::run_to_end(record);

    if let Some(team) = result.assigned_to {
        log::info!("Ticket {} assigned to {}", result.ticket_id, team);
    }
    Ok(result)
}

pub fn run_request(request: &TicketRequest) -> Result<TicketRecord, TriageError> {
    run(&request.ticket_id, &request.issue)
}

/// Route a ticket, keeping every transition taken in order.
/// `record` equals what [`run`] returns for the same input.
pub fn trace(ticket_id: &str, issue: &str) -> Result<RoutingTrace, TriageError> {
    let record = initial_record(ticket_id, issue)?;

    let mut run = RoutingWorkflow::start(record);
    let transitions: Vec<Transition> = run.by_ref().collect();
    Ok(RoutingTrace {
        transitions,
        record: run.finish(),
    })
}
