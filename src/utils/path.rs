use std::path::PathBuf;

/// Resolve a configured data path. A leading `~` (alone or followed by `/`)
/// stands for the home directory; anything else is taken as is.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => Some(""),
        Some(r) => r.strip_prefix('/'),
        None => None,
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

