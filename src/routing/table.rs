//! Route table: ordered, immutable, exact-match lookup.
//!
//! # Responsibilities
//! - Store routes in declaration order
//! - Reject duplicate or unroutable paths at construction
//! - Look up a route by exact path
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) lookup via HashMap index into the ordered Vec
//! - No fallback route: a miss is `None`, the transport decides what to send

use std::collections::HashMap;

use axum::http::StatusCode;
use thiserror::Error;

use crate::config::RouteConfig;
use crate::routing::route::{CannedResponse, Route};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("duplicate route path `{0}`")]
    DuplicatePath(String),

    #[error("invalid route path `{path}`: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("route `{path}` has invalid status code {status}: {reason}")]
    InvalidStatus {
        path: String,
        status: u16,
        reason: &'static str,
    },

    #[error("route `{path}` has invalid body: {reason}")]
    InvalidBody { path: String, reason: &'static str },
}

/// Check that a path can be registered as a literal, exact-match route.
pub fn check_path(path: &str) -> Result<(), &'static str> {
    if !path.starts_with('/') {
        return Err("must start with '/'");
    }
    if path.contains(['{', '}', '*']) {
        return Err("wildcard and capture syntax is not allowed");
    }
    if path.split('/').any(|segment| segment.starts_with(':')) {
        return Err("segments must not start with ':'");
    }
    Ok(())
}

/// Check that a status is a success code that carries a body.
pub fn check_status(status: u16) -> Result<StatusCode, &'static str> {
    let code = StatusCode::from_u16(status).map_err(|_| "not an HTTP status code")?;
    if !code.is_success() {
        return Err("must be a 2xx success code");
    }
    if code == StatusCode::NO_CONTENT || code == StatusCode::RESET_CONTENT {
        return Err("must allow a response body");
    }
    Ok(code)
}

/// Check that a body line is non-empty and fits on one line.
pub fn check_body(text: &str) -> Result<(), &'static str> {
    if text.is_empty() {
        return Err("must not be empty");
    }
    if text.contains(['\n', '\r']) {
        return Err("must be a single line");
    }
    Ok(())
}

/// The fixed mapping from request path to canned response.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    index: HashMap<String, usize>,
}

impl RouteTable {
    /// Build a table from routes in the given order.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        let mut index = HashMap::with_capacity(routes.len());

        for (i, route) in routes.iter().enumerate() {
            check_path(route.path()).map_err(|reason| RouteError::InvalidPath {
                path: route.path().to_string(),
                reason,
            })?;
            let response = route.response();
            check_status(response.status().as_u16()).map_err(|reason| RouteError::InvalidStatus {
                path: route.path().to_string(),
                status: response.status().as_u16(),
                reason,
            })?;
            let line = response.body().strip_suffix('\n').unwrap_or(response.body());
            check_body(line).map_err(|reason| RouteError::InvalidBody {
                path: route.path().to_string(),
                reason,
            })?;
            if index.insert(route.path().to_string(), i).is_some() {
                return Err(RouteError::DuplicatePath(route.path().to_string()));
            }
        }

        Ok(Self { routes, index })
    }

    /// The robotic vacuum command set.
    pub fn vacuum() -> Self {
        let routes = default_routes()
            .into_iter()
            .map(|(path, body, description)| Route::new(path, CannedResponse::ok(body), description))
            .collect::<Vec<_>>();

        let index = routes
            .iter()
            .enumerate()
            .map(|(i, route)| (route.path().to_string(), i))
            .collect();

        Self { routes, index }
    }

    /// Compile route definitions loaded from configuration.
    pub fn from_config(configs: &[RouteConfig]) -> Result<Self, RouteError> {
        let mut routes = Vec::with_capacity(configs.len());

        for cfg in configs {
            let status = check_status(cfg.status).map_err(|reason| RouteError::InvalidStatus {
                path: cfg.path.clone(),
                status: cfg.status,
                reason,
            })?;
            check_body(&cfg.body).map_err(|reason| RouteError::InvalidBody {
                path: cfg.path.clone(),
                reason,
            })?;
            routes.push(Route::new(
                cfg.path.clone(),
                CannedResponse::line(status, cfg.body.clone()),
                cfg.description.clone(),
            ));
        }

        Self::new(routes)
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, path: &str) -> Option<&Route> {
        self.index.get(path).map(|&i| &self.routes[i])
    }

    /// Routes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::vacuum()
    }
}

/// `(path, body, description)` for every vacuum endpoint.
pub fn default_routes() -> [(&'static str, &'static str, &'static str); 5] {
    [
        ("/", "OK", "Request received"),
        ("/api/vacuum/start", "vacuum activated", "Start Request received"),
        ("/api/vacuum/pause", "vacuum paused", "Pause Request received"),
        ("/api/vacuum/return", "vacuum returning to dock", "Return Request received"),
        ("/api/vacuum/status", "vacuum status: cleaning", "Status Request received"),
    ]
}
