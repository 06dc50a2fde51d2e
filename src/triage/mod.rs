// SPDX-License-Identifier: MIT

pub mod classifier;
pub mod invoke;
pub mod ticket;
pub mod workflow;

pub use classifier::{classify, RouteLabel};
pub use invoke::{run, run_request, trace, RoutingTrace};
pub use ticket::{Priority, Team, TicketRecord, TicketRequest};
