//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse, status codes exist)
//! - Detect duplicate or unroutable paths
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MockConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;
use tracing::Level;

use crate::config::schema::MockConfig;
use crate::routing::table::{check_body, check_path, check_status};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: `{value}` is not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("at least one route is required")]
    NoRoutes,

    #[error("duplicate route path `{0}`")]
    DuplicatePath(String),

    #[error("route `{path}`: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("route `{path}`: status {status} {reason}")]
    InvalidStatus {
        path: String,
        status: u16,
        reason: &'static str,
    },

    #[error("observability.log_level: `{0}` is not a log level")]
    InvalidLogLevel(String),

    #[error("route `{path}`: body {reason}")]
    InvalidBody { path: String, reason: &'static str },
}

pub fn validate_config(config: &MockConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(
        "listener.bind_address",
        &config.listener.bind_address,
        &mut errors,
    );
    if config.observability.metrics_enabled {
        check_address(
            "observability.metrics_address",
            &config.observability.metrics_address,
            &mut errors,
        );
    }

    if config.observability.log_level.parse::<Level>().is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }

    let mut seen = HashSet::new();
    for route in &config.routes {
        if let Err(reason) = check_path(&route.path) {
            errors.push(ValidationError::InvalidPath {
                path: route.path.clone(),
                reason,
            });
        }
        if !seen.insert(route.path.as_str()) {
            errors.push(ValidationError::DuplicatePath(route.path.clone()));
        }
        if let Err(reason) = check_status(route.status) {
            errors.push(ValidationError::InvalidStatus {
                path: route.path.clone(),
                status: route.status,
                reason,
            });
        }
        if let Err(reason) = check_body(&route.body) {
            errors.push(ValidationError::InvalidBody {
                path: route.path.clone(),
                reason,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;

    fn route(path: &str, status: u16, body: &str) -> RouteConfig {
        RouteConfig {
            path: path.into(),
            status,
            body: body.into(),
            description: "test".into(),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&MockConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_route_errors() {
        let mut config = MockConfig::default();
        config.routes = vec![
            route("/a", 200, "a"),
            route("/a", 200, "again"),
            route("no-slash", 200, "x"),
            route("/b", 1000, "x"),
            route("/c", 200, ""),
        ];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::DuplicatePath("/a".into())));
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::InvalidStatus { status: 1000, .. }
        )));
    }

    #[test]
    fn test_only_success_statuses_with_body_accepted() {
        for status in [101, 204, 205, 500, 999] {
            let mut config = MockConfig::default();
            config.routes = vec![route("/x", status, "vacuum activated")];
            let errors = validate_config(&config).unwrap_err();
            assert!(
                matches!(errors[..], [ValidationError::InvalidStatus { .. }]),
                "status {status} should be rejected"
            );
        }

        let mut config = MockConfig::default();
        config.routes = vec![route("/x", 201, "vacuum activated")];
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_log_level_checked() {
        let mut config = MockConfig::default();
        config.observability.log_level = "verbose".into();
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::InvalidLogLevel("verbose".into())])
        );

        for level in ["trace", "debug", "INFO", "warn", "error"] {
            config.observability.log_level = level.into();
            assert_eq!(validate_config(&config), Ok(()), "{level}");
        }
    }

    #[test]
    fn test_empty_routes_rejected() {
        let mut config = MockConfig::default();
        config.routes.clear();
        assert_eq!(validate_config(&config), Err(vec![ValidationError::NoRoutes]));
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = MockConfig::default();
        config.observability.metrics_address = "bogus".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::InvalidAddress { field: "observability.metrics_address", .. }
        ));
    }
}
