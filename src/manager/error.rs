//! Error types for adapter configuration operations.

use std::fmt;

use thiserror::Error;

use crate::form::FormField;
use crate::network::{AdapterDescriptor, ConfigStep, ProviderError, StatusCode};

/// A required static-mode field was left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The named field is empty after trimming whitespace.
    #[error("The {0} field cannot be empty")]
    EmptyField(FormField),
}

/// Why a single change request failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureCause {
    /// The collaborator answered with a non-zero status.
    Status(StatusCode),
    /// The request could not be issued.
    Unavailable(String),
}

/// A change request that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    /// Which request failed.
    pub step: ConfigStep,
    /// How it failed.
    pub cause: FailureCause,
}

impl fmt::Display for StepFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            FailureCause::Status(status) => write!(f, "{} (status {status})", self.step),
            FailureCause::Unavailable(reason) => write!(f, "{} ({reason})", self.step),
        }
    }
}

/// Error type for [`AdapterManager`](super::AdapterManager) operations.
///
/// Every variant is meant to be shown to the user; none is fatal.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// The adapter list could not be obtained.
    #[error("Unable to list network adapters: {0}")]
    Unavailable(#[source] ProviderError),

    /// The descriptor no longer points at the adapter it was created for.
    #[error(
        "Adapter '{}' (#{}) is no longer available; refresh the adapter list",
        .descriptor.description,
        .descriptor.index
    )]
    Lookup {
        /// The stale descriptor
        descriptor: AdapterDescriptor,
    },

    /// A required static-mode field was empty.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Apply was requested with no adapter selected.
    #[error("No network adapter selected")]
    NoSelection,

    /// One or more change requests failed. Earlier successful requests stay applied.
    #[error("Configuration failed: {}", summarize(.failures))]
    Configuration {
        /// Failed requests, in the order they were issued
        failures: Vec<StepFailure>,
    },
}

impl ManagerError {
    /// Returns `true` for errors raised before the collaborator was contacted.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NoSelection)
    }
}

fn summarize(failures: &[StepFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
