use std::path::{Path, PathBuf};
use uzers::os::unix::UserExt;

/// Expand a leading tilde against an explicit home directory.
///
/// Only bare `~` and `~/...` are handled here; `~user` forms need a
/// passwd lookup and go through [`expand_tilde`]. Paths without a
/// leading tilde pass through unchanged. Layout resolution uses this
/// variant so tests can pin the home directory without touching the
/// environment.
pub fn expand_tilde_with(path: &str, home: &Path) -> PathBuf {
    match path.strip_prefix('~') {
        None => PathBuf::from(path),
        Some("") => home.to_path_buf(),
        Some(rest) if rest.starts_with('/') => home.join(rest.trim_start_matches('/')),
        // ~user form: not resolvable against a fixed home
        Some(_) => PathBuf::from(path),
    }
}

/// Expand `~`, `~/...` and `~user/...` using the environment.
///
/// Returns None when HOME is unset (for `~`) or the named user does not
/// exist (for `~user`).
pub fn expand_tilde(path: &str) -> Option<PathBuf> {
    let Some(rest) = path.strip_prefix('~') else {
        return Some(PathBuf::from(path));
    };

    if rest.is_empty() || rest.starts_with('/') {
        let home = std::env::var("HOME").ok()?;
        return Some(expand_tilde_with(path, Path::new(&home)));
    }

    let (username, tail) = match rest.find('/') {
        Some(idx) => (&rest[..idx], rest[idx..].trim_start_matches('/')),
        None => (rest, ""),
    };

    let user = uzers::get_user_by_name(username)?;
    Some(user.home_dir().join(tail))
}
