//! Remote container address joining

/// Join a remote base url and an entry-file name with exactly one `/`
///
/// Trailing slashes of `url` and leading slashes of `entry_file_name` are
/// dropped before joining. When either side is empty after trimming the other
/// side is returned as-is.
pub fn remote_full_url(url: &str, entry_file_name: &str) -> String {
    let base = url.trim_end_matches('/');
    let entry = entry_file_name.trim_start_matches('/');

    match (base.is_empty(), entry.is_empty()) {
        (true, _) => entry.to_string(),
        (false, true) => base.to_string(),
        (false, false) => format!("{}/{}", base, entry),
    }
}
