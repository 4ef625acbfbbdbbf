//! Load requests
//!
//! Turns a remote url, entry-file name and module list into the request the
//! external loader consumes.

use serde::{Deserialize, Serialize};

use crate::remote::url::remote_full_url;

/// Default entry-file name of a remote
pub const DEFAULT_REMOTE_ENTRY: &str = "remoteEntry.js";

/// Scope used for namespace derivation; callers cannot pick one
pub const DEFAULT_NO_SCOPE: &str = "default";

/// Identifies which remote and which exports to retrieve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadRequest {
    /// Base url the remote is served from
    pub url: String,
    /// Entry file within the remote
    pub entry_file_name: String,
    /// Exports to resolve, in order
    pub modules: Vec<String>,
}

impl LoadRequest {
    pub fn new(url: impl Into<String>, entry_file_name: impl Into<String>, modules: Vec<String>) -> Self {
        Self {
            url: url.into(),
            entry_file_name: entry_file_name.into(),
            modules,
        }
    }

    /// Full address of the remote entry bundle
    pub fn remote_container(&self) -> String {
        remote_full_url(&self.url, &self.entry_file_name)
    }

    /// Build the request handed to the external loader
    pub fn to_remote_request(&self) -> RemoteRequest {
        RemoteRequest {
            remote_container: self.remote_container(),
            module_paths: self.modules.clone(),
        }
    }
}

/// Request shape understood by a [`RemoteLoader`](crate::remote::RemoteLoader)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRequest {
    /// Resolvable address of the remote entry bundle
    pub remote_container: String,
    /// Exports to resolve from the container
    pub module_paths: Vec<String>,
}
