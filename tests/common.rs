//! Shared test helpers: a scripted loader and recording sinks

#![allow(dead_code)]

use async_trait::async_trait;
use remote_modules::{
    EventSink, LogSink, RemoteEventDetails, RemoteEventType, RemoteLoader, RemoteLogLevel,
    RemoteRequest,
};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Opaque loader failure used by the scenarios
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct BoomError(pub String);

/// Loader that answers every request with a fixed outcome
pub struct ScriptedLoader {
    outcome: Result<Vec<String>, BoomError>,
    requests: Mutex<Vec<RemoteRequest>>,
}

impl ScriptedLoader {
    pub fn resolving(values: &[&str]) -> Self {
        Self {
            outcome: Ok(values.iter().map(|v| v.to_string()).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(message: &str) -> Self {
        Self {
            outcome: Err(BoomError(message.to_string())),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<RemoteRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteLoader for ScriptedLoader {
    type Export = String;
    type Error = BoomError;

    async fn load(&self, request: &RemoteRequest) -> Result<Vec<String>, BoomError> {
        self.requests.lock().unwrap().push(request.clone());
        tokio::task::yield_now().await;
        self.outcome.clone()
    }
}

/// One reporting action, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Event {
        event_type: RemoteEventType,
        details: RemoteEventDetails,
    },
    Log {
        level: RemoteLogLevel,
        message: String,
        error: Option<String>,
    },
}

/// Records events and log lines into one shared, ordered list
#[derive(Default, Clone)]
pub struct Recorder {
    reports: Arc<Mutex<Vec<Report>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<(RemoteEventType, RemoteEventDetails)> {
        self.reports()
            .into_iter()
            .filter_map(|r| match r {
                Report::Event { event_type, details } => Some((event_type, details)),
                Report::Log { .. } => None,
            })
            .collect()
    }

    pub fn logs(&self) -> Vec<(RemoteLogLevel, String, Option<String>)> {
        self.reports()
            .into_iter()
            .filter_map(|r| match r {
                Report::Log { level, message, error } => Some((level, message, error)),
                Report::Event { .. } => None,
            })
            .collect()
    }
}

impl EventSink for Recorder {
    fn emit(&self, event_type: RemoteEventType, details: &RemoteEventDetails) {
        self.reports.lock().unwrap().push(Report::Event {
            event_type,
            details: details.clone(),
        });
    }
}

impl LogSink for Recorder {
    fn log(
        &self,
        level: RemoteLogLevel,
        message: &str,
        error: Option<&(dyn std::error::Error + 'static)>,
    ) {
        self.reports.lock().unwrap().push(Report::Log {
            level,
            message: message.to_string(),
            error: error.map(|e| e.to_string()),
        });
    }
}

pub fn modules(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}
