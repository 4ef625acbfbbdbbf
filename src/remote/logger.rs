//! `tracing`-backed log sink

use tracing::{error, info};

use crate::remote::traits::{LogSink, RemoteLogLevel};

/// Writes verbose load activity through `tracing`
///
/// Information lines go to `info!`, errors to `error!` with the underlying
/// error attached as a field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn log(
        &self,
        level: RemoteLogLevel,
        message: &str,
        error: Option<&(dyn std::error::Error + 'static)>,
    ) {
        match (level, error) {
            (RemoteLogLevel::Information, None) => info!("{}", message),
            (RemoteLogLevel::Information, Some(e)) => info!(error = %e, "{}", message),
            (RemoteLogLevel::Error, None) => error!("{}", message),
            (RemoteLogLevel::Error, Some(e)) => error!(error = %e, "{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::traits::RemoteLoadError;

    #[test]
    fn test_tracing_sink_accepts_all_levels() {
        // No subscriber installed; just exercises each branch
        let sink = TracingLogSink;
        let err = RemoteLoadError::LoadFailed("boom".to_string());

        sink.log(RemoteLogLevel::Information, "Imported dynamic module: x", None);
        sink.log(RemoteLogLevel::Error, "Error importing dynamic module: x", Some(&err));
    }
}
