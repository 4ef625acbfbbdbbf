//! Remote module system traits and interfaces
//!
//! Defines the ports the orchestrator talks to: the external loader that
//! fetches and evaluates a remote bundle, and the two fire-and-forget
//! reporting channels (events and log lines).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::remote::request::RemoteRequest;

/// External loader that fetches a remote entry bundle and resolves named
/// exports from it
///
/// The outcome is all-or-nothing for the full module list: either every
/// requested export resolves, in request order, or the call fails.
#[async_trait]
pub trait RemoteLoader: Send + Sync {
    /// Value produced for one resolved export
    type Export: Send;

    /// Failure reported by the loader; passed through to callers untouched
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the remote container and resolve `request.module_paths`
    async fn load(&self, request: &RemoteRequest) -> Result<Vec<Self::Export>, Self::Error>;
}

/// Lifecycle events emitted for a load attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemoteEventType {
    /// All requested exports resolved
    Imported,
    /// The loader rejected the request
    FailedToImport,
}

impl fmt::Display for RemoteEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteEventType::Imported => write!(f, "Imported"),
            RemoteEventType::FailedToImport => write!(f, "FailedToImport"),
        }
    }
}

/// Severity of a verbose log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemoteLogLevel {
    Information,
    Error,
}

impl fmt::Display for RemoteLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteLogLevel::Information => write!(f, "Information"),
            RemoteLogLevel::Error => write!(f, "Error"),
        }
    }
}

/// Payload attached to every event emitted for one load attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEventDetails {
    /// Grouping qualifier used for namespace derivation
    pub scope: String,
    /// Requested exports, in request order
    pub modules: Vec<String>,
    /// Base url of the remote as given by the caller
    pub url: String,
    /// Namespace label of the attempt
    pub detail: String,
}

/// Receives structured lifecycle events
pub trait EventSink: Send + Sync {
    fn emit(&self, event_type: RemoteEventType, details: &RemoteEventDetails);
}

/// Receives human-readable log lines
pub trait LogSink: Send + Sync {
    fn log(
        &self,
        level: RemoteLogLevel,
        message: &str,
        error: Option<&(dyn std::error::Error + 'static)>,
    );
}

/// Errors produced by the loaders shipped with this crate
///
/// The orchestrator itself never produces or converts errors; this type only
/// exists for [`RemoteLoader`] implementations such as the in-memory loader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteLoadError {
    #[error("Remote container not found: {0}")]
    RemoteNotFound(String),

    #[error("Export '{module}' not exposed by remote {remote}")]
    ExportNotFound { remote: String, module: String },

    #[error("Remote load failed: {0}")]
    LoadFailed(String),
}
