// SPDX-License-Identifier: MIT

//! Text output of the `triage` binary

use std::fmt::Write;

use crate::error::TriageError;
use crate::triage::{self, TicketRecord};
use crate::triage::workflow::{Action, Transition};

/// Output options of `triage submit`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitOptions {
    pub json: bool,
    pub trace: bool,
}

/// Route one ticket and render what `triage submit` prints.
/// The workflow runs once; with `trace` the transition lines come first.
pub fn submit(ticket_id: &str, issue: &str, opts: SubmitOptions) -> Result<String, TriageError> {
    let mut out = String::new();

    let record = if opts.trace {
        let trace = triage::trace(ticket_id, issue)?;
        for transition in &trace.transitions {
            out.push_str(&format_transition(transition));
            out.push('\n');
        }
        trace.record
    } else {
        triage::run(ticket_id, issue)?
    };

    if opts.json {
        out.push_str(&serde_json::to_string_pretty(&record)?);
        out.push('\n');
    } else {
        out.push_str(&format_record(&record));
    }
    Ok(out)
}

pub fn format_transition(transition: &Transition) -> String {
    let action = match transition.action {
        Action::Node(node) => format!("node {}", node),
        Action::Route(label) => format!("route {}", label),
    };
    format!("{} -> {} ({})", transition.from, transition.to, action)
}

/// Human-readable summary of a routed ticket
pub fn format_record(record: &TicketRecord) -> String {
    let priority = record.priority.map(|p| p.as_str()).unwrap_or("None");
    let assigned = record.assigned_to.map(|t| t.name()).unwrap_or("None");

    let mut out = String::new();
    let _ = writeln!(out, "Ticket ID: {}", record.ticket_id);
    let _ = writeln!(out, "Priority: {}", priority);
    let _ = writeln!(out, "Assigned To: {}", assigned);
    let _ = writeln!(out);
    let _ = writeln!(out, "Decision History");
    for step in &record.history {
        let _ = writeln!(out, "- {}", step);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record() {
        let record = triage::run("TCK-101", "Payment failed").unwrap();
        let text = format_record(&record);

        assert_eq!(
            text,
            "Ticket ID: TCK-101\n\
             Priority: High\n\
             Assigned To: Senior Support Team\n\
             \n\
             Decision History\n\
             - Ticket received\n\
             - Assigned to Senior Support\n"
        );
    }

    #[test]
    fn test_format_unrouted_record() {
        let record = TicketRecord::new("TCK-9", "hello");
        let text = format_record(&record);
        assert!(text.contains("Priority: None"));
        assert!(text.contains("Assigned To: None"));
    }

    #[test]
    fn test_submit_plain() {
        let out = submit("TCK-102", "How do I change my profile picture?", SubmitOptions::default())
            .unwrap();
        assert!(out.contains("Assigned To: Junior Support Team"));
        assert!(!out.contains(" -> "));
    }

    #[test]
    fn test_submit_trace_lists_transitions_before_record() {
        let opts = SubmitOptions {
            json: false,
            trace: true,
        };
        let out = submit("TCK-103", "server down", opts).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Start -> Received (node receive)");
        assert_eq!(lines[1], "Received -> SeniorAssigned (route senior)");
        assert_eq!(lines[2], "SeniorAssigned -> End (node senior)");
        assert_eq!(lines[3], "Ticket ID: TCK-103");
    }

    #[test]
    fn test_submit_trace_record_matches_plain_run() {
        let traced = submit(
            "TCK-104",
            "invoice question",
            SubmitOptions {
                json: true,
                trace: true,
            },
        )
        .unwrap();
        let json_start = traced.find('{').unwrap();
        let record: TicketRecord = serde_json::from_str(&traced[json_start..]).unwrap();

        assert_eq!(record, triage::run("TCK-104", "invoice question").unwrap());
    }

    #[test]
    fn test_submit_rejects_blank_fields() {
        let err = submit("  ", "", SubmitOptions::default()).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "missing required fields: ticket_id, issue");
    }
}
