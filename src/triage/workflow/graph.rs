// SPDX-License-Identifier: MIT

//! Static structure of the routing workflow
//!
//! Used by callers that want to show the workflow to a user. Nothing here
//! drives execution; the state machine in `state.rs` does.

use serde::{Deserialize, Serialize};

use super::nodes::NodeId;
use crate::triage::classifier::RouteLabel;

pub const START: &str = "__start__";
pub const END: &str = "__end__";

/// A vertex of the workflow graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    /// True for the synthetic start/end markers
    #[serde(default)]
    pub terminal: bool,
}

/// A directed edge, conditional when chosen by the classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<RouteLabel>,
}

impl GraphEdge {
    fn direct(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            condition: None,
        }
    }

    fn routed(source: &str, label: RouteLabel) -> Self {
        Self {
            source: source.to_string(),
            target: label.node().to_string(),
            condition: Some(label),
        }
    }

    pub fn is_conditional(&self) -> bool {
        self.condition.is_some()
    }
}

/// The workflow graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowGraph {
    pub name: String,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl WorkflowGraph {
    /// Describe the routing workflow
    pub fn routing() -> Self {
        let mut nodes = vec![GraphNode {
            id: START.to_string(),
            terminal: true,
        }];
        nodes.extend(NodeId::ALL.iter().map(|n| GraphNode {
            id: n.as_str().to_string(),
            terminal: false,
        }));
        nodes.push(GraphNode {
            id: END.to_string(),
            terminal: true,
        });

        let receive = NodeId::Receive.as_str();
        let edges = vec![
            GraphEdge::direct(START, receive),
            GraphEdge::routed(receive, RouteLabel::Senior),
            GraphEdge::routed(receive, RouteLabel::Junior),
            GraphEdge::direct(NodeId::Senior.as_str(), END),
            GraphEdge::direct(NodeId::Junior.as_str(), END),
        ];

        Self {
            name: "ticket_routing".to_string(),
            nodes,
            edges,
        }
    }

    /// Render as a Mermaid flowchart. Conditional edges are dotted.
    pub fn to_mermaid(&self) -> String {
        let mut out = String::from("graph TD;\n");
        for node in &self.nodes {
            if node.terminal {
                out.push_str(&format!("\t{}([{}])\n", node.id, node.id));
            } else {
                out.push_str(&format!("\t{}({})\n", node.id, node.id));
            }
        }
        for edge in &self.edges {
            match edge.condition {
                Some(label) => out.push_str(&format!(
                    "\t{} -.->|{}| {};\n",
                    edge.source, label, edge.target
                )),
                None => out.push_str(&format!("\t{} --> {};\n", edge.source, edge.target)),
            }
        }
        out
    }
}
