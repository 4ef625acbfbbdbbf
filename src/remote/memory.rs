//! In-memory remote loader
//!
//! Resolves exports from remotes registered up front, keyed by their full
//! container address. Useful for hosts that embed remotes statically and for
//! exercising the orchestrator without a network.

use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

use crate::remote::request::RemoteRequest;
use crate::remote::traits::{RemoteLoadError, RemoteLoader};

/// Loader over a fixed table of remotes and their exports
#[derive(Debug, Clone)]
pub struct InMemoryRemoteLoader<T> {
    /// Container address -> export name -> value
    remotes: HashMap<String, HashMap<String, T>>,
}

impl<T> InMemoryRemoteLoader<T> {
    pub fn new() -> Self {
        Self {
            remotes: HashMap::new(),
        }
    }

    /// Register (or replace) a remote with its exports
    pub fn register_remote(
        &mut self,
        remote_container: impl Into<String>,
        exports: HashMap<String, T>,
    ) -> &mut Self {
        self.remotes.insert(remote_container.into(), exports);
        self
    }

    /// Builder form of [`register_remote`](Self::register_remote)
    pub fn with_remote(mut self, remote_container: impl Into<String>, exports: HashMap<String, T>) -> Self {
        self.register_remote(remote_container, exports);
        self
    }

    /// Add a single export to a remote, creating the remote if needed
    pub fn expose(
        &mut self,
        remote_container: impl Into<String>,
        module: impl Into<String>,
        value: T,
    ) -> &mut Self {
        self.remotes
            .entry(remote_container.into())
            .or_default()
            .insert(module.into(), value);
        self
    }

    pub fn has_remote(&self, remote_container: &str) -> bool {
        self.remotes.contains_key(remote_container)
    }
}

impl<T> Default for InMemoryRemoteLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> RemoteLoader for InMemoryRemoteLoader<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Export = T;
    type Error = RemoteLoadError;

    async fn load(&self, request: &RemoteRequest) -> Result<Vec<T>, RemoteLoadError> {
        let exports = self
            .remotes
            .get(&request.remote_container)
            .ok_or_else(|| RemoteLoadError::RemoteNotFound(request.remote_container.clone()))?;

        let resolved = request
            .module_paths
            .iter()
            .map(|module| {
                exports
                    .get(module)
                    .cloned()
                    .ok_or_else(|| RemoteLoadError::ExportNotFound {
                        remote: request.remote_container.clone(),
                        module: module.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Resolved {} export(s) from {}",
            resolved.len(),
            request.remote_container
        );
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: &str = "https://host/app/remoteEntry.js";

    fn request(modules: &[&str]) -> RemoteRequest {
        RemoteRequest {
            remote_container: CONTAINER.to_string(),
            module_paths: modules.iter().map(|m| m.to_string()).collect(),
        }
    }

    fn loader() -> InMemoryRemoteLoader<&'static str> {
        let mut loader = InMemoryRemoteLoader::new();
        loader.expose(CONTAINER, "Button", "button").expose(CONTAINER, "Card", "card");
        loader
    }

    #[tokio::test]
    async fn test_resolves_in_request_order() {
        let values = loader().load(&request(&["Card", "Button"])).await.unwrap();
        assert_eq!(values, vec!["card", "button"]);
    }

    #[tokio::test]
    async fn test_unknown_remote() {
        let loader = InMemoryRemoteLoader::<&str>::new();
        let err = loader.load(&request(&["Button"])).await.unwrap_err();
        assert_eq!(err, RemoteLoadError::RemoteNotFound(CONTAINER.to_string()));
    }

    #[tokio::test]
    async fn test_missing_export_fails_whole_request() {
        let err = loader().load(&request(&["Button", "Missing"])).await.unwrap_err();
        assert_eq!(
            err,
            RemoteLoadError::ExportNotFound {
                remote: CONTAINER.to_string(),
                module: "Missing".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_empty_module_list() {
        let values = loader().load(&request(&[])).await.unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_register_remote_replaces_exports() {
        let mut loader = loader();
        loader.register_remote(CONTAINER, HashMap::from([("Only".to_string(), "only")]));
        assert!(loader.has_remote(CONTAINER));
        assert_eq!(loader.remotes[CONTAINER].len(), 1);
    }
}
