//! Dynamic module loading
//!
//! Runs one load attempt against a remote: applies defaults, builds the
//! request, awaits the external loader and reports the outcome on the
//! configured channels.

use std::sync::Arc;
use tracing::debug;

use crate::config::{LoadOptions, LoaderConfig};
use crate::remote::events::EventBus;
use crate::remote::logger::TracingLogSink;
use crate::remote::namespace::get_remote_namespace;
use crate::remote::request::{LoadRequest, DEFAULT_NO_SCOPE, DEFAULT_REMOTE_ENTRY};
use crate::remote::traits::{
    EventSink, LogSink, RemoteEventDetails, RemoteEventType, RemoteLoader, RemoteLogLevel,
};

/// Parameters of a multi-export load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicModulesProps {
    /// Url of the remote
    pub url: String,
    /// Exports to return, in order
    pub modules: Vec<String>,
    /// Entry file of the remote; defaults to `remoteEntry.js`
    pub remote_entry_file_name: Option<String>,
    /// Log activity through the log sink
    pub verbose: Option<bool>,
    /// Emit lifecycle events through the event sink
    pub use_events: Option<bool>,
}

impl DynamicModulesProps {
    pub fn new<I, S>(url: impl Into<String>, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            url: url.into(),
            modules: modules.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn remote_entry_file_name(mut self, name: impl Into<String>) -> Self {
        self.remote_entry_file_name = Some(name.into());
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    pub fn use_events(mut self, use_events: bool) -> Self {
        self.use_events = Some(use_events);
        self
    }
}

/// Parameters of a single-export load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicModuleProps {
    pub url: String,
    pub module: String,
    pub remote_entry_file_name: Option<String>,
    pub verbose: Option<bool>,
    pub use_events: Option<bool>,
}

impl From<DynamicModuleProps> for DynamicModulesProps {
    fn from(props: DynamicModuleProps) -> Self {
        Self {
            url: props.url,
            modules: vec![props.module],
            remote_entry_file_name: props.remote_entry_file_name,
            verbose: props.verbose,
            use_events: props.use_events,
        }
    }
}

/// Reporting switches after defaults are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedLoadOptions {
    pub verbose: bool,
    pub use_events: bool,
}

/// Loads named exports from remotes and reports each outcome
///
/// The orchestrator keeps no state between calls. Every call builds its own
/// request and event payload.
pub struct DynamicModules<L: RemoteLoader> {
    loader: L,
    event_sink: Arc<dyn EventSink>,
    log_sink: Arc<dyn LogSink>,
    /// Fallbacks for options a call leaves unset
    defaults: LoadOptions,
    /// Set when the event sink is the crate's own bus
    event_bus: Option<Arc<EventBus>>,
}

impl<L: RemoteLoader> DynamicModules<L> {
    /// Create an orchestrator with a `tracing` log sink and a fresh event bus
    pub fn new(loader: L) -> Self {
        let event_bus = Arc::new(EventBus::default());
        Self {
            loader,
            event_sink: event_bus.clone(),
            log_sink: Arc::new(TracingLogSink),
            defaults: LoadOptions::default(),
            event_bus: Some(event_bus),
        }
    }

    /// Create an orchestrator from loader configuration
    pub fn from_config(loader: L, config: &LoaderConfig) -> Self {
        let event_bus = Arc::new(EventBus::new(config.events.capacity));
        Self {
            loader,
            event_sink: event_bus.clone(),
            log_sink: Arc::new(TracingLogSink),
            defaults: config.loading.clone(),
            event_bus: Some(event_bus),
        }
    }

    /// Replace the event sink
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.event_sink = sink;
        self.event_bus = None;
        self
    }

    /// Replace the log sink
    pub fn with_log_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.log_sink = sink;
        self
    }

    /// Replace the option fallbacks
    pub fn with_defaults(mut self, defaults: LoadOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Event bus the orchestrator publishes to, unless a custom sink was set
    pub fn event_bus(&self) -> Option<&Arc<EventBus>> {
        self.event_bus.as_ref()
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Fill in whatever the caller left unset
    ///
    /// A missing or empty entry-file name falls back to the configured one,
    /// then to [`DEFAULT_REMOTE_ENTRY`]. Missing switches fall back to the
    /// configured values, which are off unless configured otherwise.
    pub fn set_defaults(&self, props: DynamicModulesProps) -> (LoadRequest, ResolvedLoadOptions) {
        let entry_file_name = props
            .remote_entry_file_name
            .filter(|name| !name.is_empty())
            .or_else(|| {
                self.defaults
                    .remote_entry_file_name
                    .clone()
                    .filter(|name| !name.is_empty())
            })
            .unwrap_or_else(|| DEFAULT_REMOTE_ENTRY.to_string());

        let options = ResolvedLoadOptions {
            verbose: props.verbose.unwrap_or(self.defaults.verbose),
            use_events: props.use_events.unwrap_or(self.defaults.use_events),
        };

        (LoadRequest::new(props.url, entry_file_name, props.modules), options)
    }

    /// Load every export named in `props.modules`
    ///
    /// Returns `Ok(Some(values))` on success. On failure the loader's error is
    /// returned as-is when events are off; when events are on the failure is
    /// reported only through the `FailedToImport` event and `Ok(None)` is
    /// returned.
    pub async fn load(
        &self,
        props: DynamicModulesProps,
    ) -> Result<Option<Vec<L::Export>>, L::Error> {
        let (request, options) = self.set_defaults(props);
        self.execute(request, options).await
    }

    /// Load a single export; same reporting rules as [`load`](Self::load)
    pub async fn load_one(&self, props: DynamicModuleProps) -> Result<Option<L::Export>, L::Error> {
        let modules = self.load(props.into()).await?;
        Ok(modules.and_then(|values| values.into_iter().next()))
    }

    async fn execute(
        &self,
        request: LoadRequest,
        options: ResolvedLoadOptions,
    ) -> Result<Option<Vec<L::Export>>, L::Error> {
        let remote_full_name = get_remote_namespace(
            DEFAULT_NO_SCOPE,
            &request.modules,
            &request.url,
            &request.entry_file_name,
        );
        let event_details = RemoteEventDetails {
            scope: DEFAULT_NO_SCOPE.to_string(),
            modules: request.modules.clone(),
            url: request.url.clone(),
            detail: remote_full_name.clone(),
        };
        let remote_request = request.to_remote_request();

        debug!("Dispatching remote load: {}", remote_full_name);

        match self.loader.load(&remote_request).await {
            Ok(modules) => {
                if options.use_events {
                    self.event_sink.emit(RemoteEventType::Imported, &event_details);
                }
                if options.verbose {
                    self.log_sink.log(
                        RemoteLogLevel::Information,
                        &format!("Imported dynamic module: {}", remote_full_name),
                        None,
                    );
                }
                Ok(Some(modules))
            }
            Err(error) => {
                if options.use_events {
                    self.event_sink
                        .emit(RemoteEventType::FailedToImport, &event_details);
                }
                if options.verbose {
                    self.log_sink.log(
                        RemoteLogLevel::Error,
                        &format!("Error importing dynamic module: {}", remote_full_name),
                        Some(&error),
                    );
                }

                // The event is the failure signal when events are on
                if !options.use_events {
                    return Err(error);
                }
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::memory::InMemoryRemoteLoader;

    fn orchestrator() -> DynamicModules<InMemoryRemoteLoader<u32>> {
        DynamicModules::new(InMemoryRemoteLoader::new())
    }

    #[test]
    fn test_set_defaults_fills_missing_values() {
        let (request, options) =
            orchestrator().set_defaults(DynamicModulesProps::new("https://host", ["A"]));

        assert_eq!(request.entry_file_name, DEFAULT_REMOTE_ENTRY);
        assert_eq!(options, ResolvedLoadOptions::default());
    }

    #[test]
    fn test_set_defaults_treats_empty_entry_as_missing() {
        let props = DynamicModulesProps::new("https://host", ["A"]).remote_entry_file_name("");
        let (request, _) = orchestrator().set_defaults(props);
        assert_eq!(request.entry_file_name, DEFAULT_REMOTE_ENTRY);
    }

    #[test]
    fn test_set_defaults_keeps_caller_values() {
        let props = DynamicModulesProps::new("https://host", ["A"])
            .remote_entry_file_name("remote.js")
            .verbose(true)
            .use_events(true);
        let (request, options) = orchestrator().set_defaults(props);

        assert_eq!(request.entry_file_name, "remote.js");
        assert!(options.verbose);
        assert!(options.use_events);
    }

    #[test]
    fn test_set_defaults_uses_configured_fallbacks() {
        let orchestrator = orchestrator().with_defaults(LoadOptions {
            verbose: true,
            use_events: false,
            remote_entry_file_name: Some("remote.js".to_string()),
        });

        let (request, options) = orchestrator
            .set_defaults(DynamicModulesProps::new("https://host", ["A"]).use_events(true));

        assert_eq!(request.entry_file_name, "remote.js");
        assert!(options.verbose);
        assert!(options.use_events);
    }

    #[test]
    fn test_custom_event_sink_detaches_bus() {
        struct Discard;
        impl EventSink for Discard {
            fn emit(&self, _: RemoteEventType, _: &RemoteEventDetails) {}
        }

        let orchestrator = orchestrator();
        assert!(orchestrator.event_bus().is_some());

        let orchestrator = orchestrator.with_event_sink(Arc::new(Discard));
        assert!(orchestrator.event_bus().is_none());
    }

    #[test]
    fn test_single_module_props_conversion() {
        let props: DynamicModulesProps = DynamicModuleProps {
            url: "https://host".to_string(),
            module: "Button".to_string(),
            verbose: Some(true),
            ..Default::default()
        }
        .into();

        assert_eq!(props.modules, vec!["Button"]);
        assert_eq!(props.verbose, Some(true));
        assert_eq!(props.use_events, None);
    }
}
