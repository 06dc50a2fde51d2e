// SPDX-License-Identifier: MIT

//! HTTP front end for the triage workflow
//!
//! Serves the ticket form, a JSON API, and an SSE stream of workflow
//! transitions. Handlers call the synchronous core directly; the only shared
//! value is the immutable workflow graph.

pub mod page;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::sse::{Event, KeepAlive, Sse},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use futures::stream::Stream;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::StreamExt;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::ServerConfig;
use crate::error::TriageError;
use crate::triage::{self, TicketRecord, TicketRequest};
use crate::triage::workflow::{Transition, WorkflowGraph};
use page::{render_page, PageView};

/// Read-only state shared by handlers
pub struct AppState {
    pub graph: WorkflowGraph,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            graph: WorkflowGraph::routing(),
        }
    }
}

pub fn build_router() -> Router {
    let state = Arc::new(AppState::default());

    Router::new()
        .route("/", get(index).post(submit_form))
        .route("/api/health", get(health_check))
        .route("/api/graph", get(get_graph))
        .route("/api/graph/mermaid", get(get_graph_mermaid))
        .route("/api/tickets", post(create_ticket))
        .route("/api/tickets/stream", post(stream_ticket))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
}

pub async fn serve(config: ServerConfig) -> Result<(), TriageError> {
    let app = build_router();

    let addr = config.addr();
    log::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn json_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

impl IntoResponse for TriageError {
    fn into_response(self) -> Response {
        match &self {
            TriageError::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": e.to_string(), "fields": e.fields() })),
            )
                .into_response(),
            _ => json_error(StatusCode::INTERNAL_SERVER_ERROR, &self.to_string()),
        }
    }
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(&PageView::default(), &state.graph))
}

/// Form body of the HTML page. `previous` carries the last record shown so a
/// rejected submission can keep displaying it.
#[derive(Debug, Deserialize)]
struct SubmitForm {
    #[serde(default)]
    ticket_id: String,
    #[serde(default)]
    issue: String,
    #[serde(default)]
    previous: Option<String>,
}

async fn submit_form(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SubmitForm>,
) -> Html<String> {
    let previous = form
        .previous
        .as_deref()
        .filter(|p| !p.is_empty())
        .and_then(|p| serde_json::from_str::<TicketRecord>(p).ok());

    let request = TicketRequest::new(form.ticket_id, form.issue);
    let view = match triage::run_request(&request) {
        Ok(record) => PageView::processed(record),
        Err(_) => PageView::rejected(request, previous),
    };

    Html(render_page(&view, &state.graph))
}

async fn get_graph(State(state): State<Arc<AppState>>) -> Json<WorkflowGraph> {
    Json(state.graph.clone())
}

async fn get_graph_mermaid(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.graph.to_mermaid(),
    )
}

async fn create_ticket(
    Json(payload): Json<TicketRequest>,
) -> Result<Json<TicketRecord>, TriageError> {
    let record = triage::run_request(&payload)?;
    Ok(Json(record))
}

/// Events emitted on the ticket stream
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    Transition(Transition),
    Completed { record: TicketRecord },
    Error { message: String },
}

impl StreamEvent {
    fn name(&self) -> &'static str {
        match self {
            StreamEvent::Transition(_) => "transition",
            StreamEvent::Completed { .. } => "completed",
            StreamEvent::Error { .. } => "error",
        }
    }
}

async fn stream_ticket(
    Json(payload): Json<TicketRequest>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let (tx, rx) = mpsc::channel(16);

    tokio::spawn(async move {
        log::info!("Starting streaming run for ticket: {}", payload.ticket_id);

        match triage::trace(&payload.ticket_id, &payload.issue) {
            Ok(trace) => {
                for transition in trace.transitions {
                    if tx.send(StreamEvent::Transition(transition)).await.is_err() {
                        log::debug!("Stream client went away");
                        return;
                    }
                }
                let _ = tx
                    .send(StreamEvent::Completed {
                        record: trace.record,
                    })
                    .await;
            }
            Err(e) => {
                let _ = tx
                    .send(StreamEvent::Error {
                        message: e.to_string(),
                    })
                    .await;
            }
        }
    });

    let stream = ReceiverStream::new(rx).map(|event| {
        let sse = Event::default()
            .event(event.name())
            .json_data(&event)
            .unwrap_or_else(|e| Event::default().event("error").data(e.to_string()));
        Ok(sse)
    });

    Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(1)))
}
