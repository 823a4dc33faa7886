//! Mock command dispatch.
//!
//! # Responsibilities
//! - Resolve a request path against the route table
//! - Record exactly one event per recognized request
//! - Hand back the path's canned response
//!
//! # Design Decisions
//! - Memoryless: the answer depends on the path alone, never on history
//! - Method, headers and body are ignored
//! - Unrecognized paths produce no event and no response

use std::sync::Arc;

use axum::http::Method;

use crate::observability::metrics;
use crate::observability::sink::{CommandEvent, EventSink};
use crate::routing::{CannedResponse, RouteTable};

#[derive(Debug, Clone)]
pub struct Dispatcher {
    table: Arc<RouteTable>,
    sink: Arc<dyn EventSink>,
}

impl Dispatcher {
    pub fn new(table: Arc<RouteTable>, sink: Arc<dyn EventSink>) -> Self {
        Self { table, sink }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Answer a request on `path`, or `None` if no route matches.
    pub fn dispatch(
        &self,
        path: &str,
        method: &Method,
        request_id: Option<&str>,
    ) -> Option<CannedResponse> {
        let route = self.table.lookup(path)?;

        self.sink.record(&CommandEvent {
            path: route.path().to_string(),
            method: method.clone(),
            description: route.description().to_string(),
            request_id: request_id.map(str::to_string),
        });
        metrics::record_command(route.path());

        Some(route.response().clone())
    }
}
