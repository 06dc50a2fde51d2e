// SPDX-License-Identifier: MIT

use std::process::{Command, Output};

fn triage(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_triage"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run triage binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_submit_prints_record() {
    let output = triage(&["submit", "--ticket-id", "TCK-101", "--issue", "Payment failed"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("Ticket ID: TCK-101\n"));
    assert!(out.contains("Priority: High"));
    assert!(out.contains("Assigned To: Senior Support Team"));
    assert!(out.contains("- Ticket received\n- Assigned to Senior Support\n"));
}

#[test]
fn test_submit_trace_prints_each_transition_once() {
    let output = triage(&[
        "submit",
        "--ticket-id",
        "TCK-102",
        "--issue",
        "profile picture",
        "--trace",
    ]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out.matches(" -> ").count(), 3);
    assert_eq!(out.matches("Ticket ID: TCK-102").count(), 1);
    assert!(out.contains("Received -> JuniorAssigned (route junior)"));
}

#[test]
fn test_submit_json() {
    let output = triage(&["submit", "-t", "TCK-103", "-i", "app crash", "--json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["assigned_to"], "Senior Support Team");
    assert_eq!(value["history"].as_array().unwrap().len(), 2);
}

#[test]
fn test_submit_with_blank_fields_fails() {
    let output = triage(&["submit", "--ticket-id", " ", "--issue", ""]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("Please fill all fields: missing required fields: ticket_id, issue"));
}

#[test]
fn test_graph_mermaid() {
    let output = triage(&["graph"]);

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("graph TD;"));
}
