// SPDX-License-Identifier: MIT

//! Ticket routing workflow
//!
//! This module provides:
//! - `RoutingWorkflow` - the explicit state machine that routes a ticket
//! - node transformations (`receive`, `senior_support`, `junior_support`)
//! - `WorkflowGraph` - static structure for display

pub mod graph;
pub mod nodes;
mod state;

pub use graph::{GraphEdge, GraphNode, WorkflowGraph};
pub use nodes::NodeId;
pub use state::{Action, Phase, Transition};
pub(crate) use state::RoutingWorkflow;
