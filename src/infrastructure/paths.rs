//! Path helpers for user-supplied file locations.

use std::path::PathBuf;

/// Expands a leading `~` to the user's home directory.
///
/// The home directory is read from `HOME`. Paths without a leading tilde,
/// and every path when `HOME` is unset, are returned unchanged.
///
/// # Examples
///
/// ```
/// use get_my_books::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/books.json"), PathBuf::from("/absolute/books.json"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, std::env::var_os("HOME").map(PathBuf::from))
}

fn expand_tilde_with(path: &str, home: Option<PathBuf>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_home_prefix() {
        let home = Some(PathBuf::from("/home/reader"));
        assert_eq!(expand_tilde_with("~/books.json", home.clone()), PathBuf::from("/home/reader/books.json"));
        assert_eq!(expand_tilde_with("~", home.clone()), PathBuf::from("/home/reader"));
        assert_eq!(expand_tilde_with("~other/x", home), PathBuf::from("~other/x"));
    }

    #[test]
    fn leaves_path_alone_without_home() {
        assert_eq!(expand_tilde_with("~/books.json", None), PathBuf::from("~/books.json"));
    }
}
