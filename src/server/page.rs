// SPDX-License-Identifier: MIT

//! HTML rendering for the triage form
//!
//! The page is a pure function of `PageView`. Whatever the previous submission
//! produced is handed in by the caller; nothing is remembered between requests.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::triage::ticket::{TicketRecord, TicketRequest};
use crate::triage::workflow::WorkflowGraph;

pub const TITLE: &str = "Customer Support Ticket Triage System";
pub const SUCCESS_MESSAGE: &str = "Ticket processed successfully";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill all fields";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Warning(String),
}

/// Everything the page shows
#[derive(Debug, Clone, Default)]
pub struct PageView {
    /// Values to prefill the form with
    pub form: TicketRequest,
    pub notice: Option<Notice>,
    pub result: Option<TicketRecord>,
}

impl PageView {
    pub fn processed(record: TicketRecord) -> Self {
        Self {
            form: TicketRequest::default(),
            notice: Some(Notice::Success(SUCCESS_MESSAGE.to_string())),
            result: Some(record),
        }
    }

    /// Rejected submission; keep what the user typed and any earlier result
    pub fn rejected(form: TicketRequest, previous: Option<TicketRecord>) -> Self {
        Self {
            form,
            notice: Some(Notice::Warning(MISSING_FIELDS_MESSAGE.to_string())),
            result: previous,
        }
    }
}

pub fn render_page(view: &PageView, graph: &WorkflowGraph) -> String {
    let mut body = String::new();

    body.push_str(&format!("<h1>{}</h1>\n", TITLE));
    body.push_str("<p>Automatically routes tickets by urgency</p>\n");
    body.push_str(&render_form(view));

    match &view.notice {
        Some(Notice::Success(msg)) => {
            body.push_str(&format!(
                "<div class=\"notice success\">{}</div>\n",
                encode_text(msg)
            ));
        }
        Some(Notice::Warning(msg)) => {
            body.push_str(&format!(
                "<div class=\"notice warning\">{}</div>\n",
                encode_text(msg)
            ));
        }
        None => {}
    }

    if let Some(record) = &view.result {
        body.push_str(&render_result(record));
    }

    body.push_str("<h2>Workflow Graph</h2>\n");
    body.push_str(&format!(
        "<pre class=\"mermaid\">\n{}</pre>\n",
        encode_text(&graph.to_mermaid())
    ));

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n{style}</head>\n<body>\n{body}<script type=\"module\">import mermaid from 'https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.esm.min.mjs'; mermaid.initialize({{ startOnLoad: true }});</script>\n</body>\n</html>\n",
        title = TITLE,
        style = STYLE,
        body = body
    )
}

fn render_form(view: &PageView) -> String {
    // The last result travels with the form so the next render can show it
    let previous = view
        .result
        .as_ref()
        .and_then(|r| serde_json::to_string(r).ok())
        .unwrap_or_default();

    format!(
        concat!(
            "<form method=\"post\" action=\"/\">\n",
            "<input type=\"hidden\" name=\"previous\" value=\"{}\">\n",
            "<label>Ticket ID<input name=\"ticket_id\" placeholder=\"TCK-101\" value=\"{}\"></label>\n",
            "<label>Describe the Issue<textarea name=\"issue\" placeholder=\"Payment failed and app crashed\">{}</textarea></label>\n",
            "<button type=\"submit\">Submit Ticket</button>\n",
            "</form>\n"
        ),
        encode_double_quoted_attribute(&previous),
        encode_double_quoted_attribute(&view.form.ticket_id),
        encode_text(&view.form.issue)
    )
}

fn render_result(record: &TicketRecord) -> String {
    let priority = record.priority.map(|p| p.as_str()).unwrap_or("None");
    let assigned = record.assigned_to.map(|t| t.name()).unwrap_or("None");

    let mut out = String::from("<h2>Ticket Details</h2>\n");
    out.push_str(&format!(
        "<p><strong>Ticket ID:</strong> {}</p>\n",
        encode_text(&record.ticket_id)
    ));
    out.push_str(&format!("<p><strong>Priority:</strong> {}</p>\n", priority));
    out.push_str(&format!(
        "<p><strong>Assigned To:</strong> {}</p>\n",
        assigned
    ));

    out.push_str("<h2>Decision History</h2>\n<ul>\n");
    for step in &record.history {
        out.push_str(&format!("<li>{}</li>\n", encode_text(step)));
    }
    out.push_str("</ul>\n");
    out
}

const STYLE: &str = "<style>\nbody { font-family: sans-serif; max-width: 720px; margin: 2rem auto; }\nlabel { display: block; margin-bottom: 1rem; }\ninput, textarea { display: block; width: 100%; }\n.notice { padding: .5rem; margin: 1rem 0; }\n.success { background: #e6f4ea; }\n.warning { background: #fef7e0; }\n</style>\n";
