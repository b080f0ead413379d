use anyhow::{Result, anyhow};
use log::trace;
use path_clean::PathClean;
use std::path::{Path, PathBuf};

/// Express `path` relative to `base`.
///
/// Relative inputs are anchored at `base` first. Both sides are lexically
/// cleaned, so `pkg/../pkg/mod.py` and `pkg/mod.py` relativize the same way.
/// Fails when the path does not live under `base`.
pub fn relative_to(path: &Path, base: &Path) -> Result<PathBuf> {
    let base = base.clean();
    let abs_path = if path.is_absolute() { path.clean() } else { base.join(path).clean() };
    trace!("Relativizing {:?} against {:?}", abs_path, base);

    abs_path.strip_prefix(&base).map(Path::to_path_buf).map_err(|_| {
        anyhow!("{} is not under the base directory {}", abs_path.display(), base.display())
    })
}

/// Render a relative path for report output, always with `/` separators.
pub fn display_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_to_child() {
        let result = relative_to(Path::new("/project/src/pkg/mod.py"), Path::new("/project"));
        assert_eq!(result.unwrap(), PathBuf::from("src/pkg/mod.py"));
    }

    #[test]
    fn test_relative_input_is_anchored_at_base() {
        let result = relative_to(Path::new("src/mod.py"), Path::new("/project"));
        assert_eq!(result.unwrap(), PathBuf::from("src/mod.py"));
    }

    #[test]
    fn test_parent_components_are_cleaned() {
        let result = relative_to(Path::new("/project/src/../lib/./mod.py"), Path::new("/project"));
        assert_eq!(result.unwrap(), PathBuf::from("lib/mod.py"));
    }

    #[test]
    fn test_sibling_directory_is_rejected() {
        let result = relative_to(Path::new("/other/mod.py"), Path::new("/project"));
        assert!(result.is_err());
    }

    #[test]
    fn test_escaping_via_parent_is_rejected() {
        let result = relative_to(Path::new("../outside/mod.py"), Path::new("/project/src"));
        assert!(result.is_err());
    }

    #[test]
    fn test_shared_name_prefix_is_not_a_parent() {
        let result = relative_to(Path::new("/project-extra/mod.py"), Path::new("/project"));
        assert!(result.is_err());
    }

    #[test]
    fn test_display_path_uses_forward_slashes() {
        let path: PathBuf = ["src", "pkg", "mod.py"].iter().collect();
        assert_eq!(display_path(&path), "src/pkg/mod.py");
    }
}
