//! Remote Modules - runtime loading of named exports from remote bundles
//!
//! Given a remote's base url and entry-file name, this crate asks an external
//! [`RemoteLoader`] for a list of named exports and reports the outcome
//! through optional lifecycle events and optional verbose log lines.
//!
//! ## Design Principles
//!
//! 1. **Thin orchestration**: fetching and evaluating a remote is the loader's job
//! 2. **Injected ports**: loader, event sink and log sink are traits
//! 3. **No shared state**: every load builds its own request and event payload
//! 4. **Opaque failures**: loader errors reach the caller unmodified
//!
//! ## Example
//!
//! ```no_run
//! use remote_modules::{DynamicModules, DynamicModulesProps, InMemoryRemoteLoader};
//!
//! # async fn run() {
//! let mut loader = InMemoryRemoteLoader::new();
//! loader.expose("https://cdn.example.com/app/remoteEntry.js", "Button", "button");
//!
//! let modules = DynamicModules::new(loader);
//! let exports = modules
//!     .load(DynamicModulesProps::new("https://cdn.example.com/app/", ["Button"]))
//!     .await;
//! assert_eq!(exports.unwrap(), Some(vec!["button"]));
//! # }
//! ```

pub mod config;
pub mod remote;
pub mod utils;

pub use config::{EventBusConfig, LoadOptions, LoaderConfig, LoggingConfig};
pub use remote::{
    get_remote_namespace, remote_full_url, DynamicModuleProps, DynamicModules,
    DynamicModulesProps, EventBus, EventSink, InMemoryRemoteLoader, LoadRequest, LogSink,
    RemoteEvent, RemoteEventDetails, RemoteEventType, RemoteLoadError, RemoteLoader,
    RemoteLogLevel, RemoteRequest, ResolvedLoadOptions, TracingLogSink, DEFAULT_NO_SCOPE,
    DEFAULT_REMOTE_ENTRY,
};
