//! Namespace labels for load attempts
//!
//! A namespace label identifies one (scope, modules, remote) combination in
//! log lines and events. It is a label only and is never parsed back.

use crate::remote::url::remote_full_url;

/// Derive the namespace label for a load attempt
///
/// Format: `{scope}:{remote container}[{module},{module},...]`. The brackets
/// are always present, so the label is non-empty even for an empty module
/// list.
pub fn get_remote_namespace(
    scope: &str,
    modules: &[String],
    url: &str,
    entry_file_name: &str,
) -> String {
    format!(
        "{}:{}[{}]",
        scope,
        remote_full_url(url, entry_file_name),
        modules.join(",")
    )
}
