//! Remote module loading
//!
//! Loads named exports from independently deployed remotes at runtime.
//!
//! ## Architecture
//!
//! - **Namespace**: derives the diagnostic label of a load attempt
//! - **Request**: joins url and entry file into the loader request
//! - **Loader**: the orchestrator; dispatches to the external [`RemoteLoader`]
//!   and reports through the [`EventSink`] and [`LogSink`] ports
//! - **Failure propagation**: with events enabled, failures are reported as a
//!   `FailedToImport` event and the call resolves to `None`; otherwise the
//!   loader's error is returned to the caller

pub mod events;
pub mod loader;
pub mod logger;
pub mod memory;
pub mod namespace;
pub mod request;
pub mod traits;
pub mod url;

pub use events::{EventBus, RemoteEvent};
pub use loader::{DynamicModuleProps, DynamicModules, DynamicModulesProps, ResolvedLoadOptions};
pub use logger::TracingLogSink;
pub use memory::InMemoryRemoteLoader;
pub use namespace::get_remote_namespace;
pub use request::{LoadRequest, RemoteRequest, DEFAULT_NO_SCOPE, DEFAULT_REMOTE_ENTRY};
pub use traits::{
    EventSink, LogSink, RemoteEventDetails, RemoteEventType, RemoteLoadError, RemoteLoader,
    RemoteLogLevel,
};
pub use url::remote_full_url;
