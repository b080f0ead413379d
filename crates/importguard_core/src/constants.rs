//! Constants describing which files are scanned.

/// File-name suffix identifying a Python source file.
pub const SOURCE_FILE_SUFFIX: &str = ".py";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_includes_separator_dot() {
        assert!(SOURCE_FILE_SUFFIX.starts_with('.'));
        assert!("module.py".ends_with(SOURCE_FILE_SUFFIX));
        assert!(!"module.pyc".ends_with(SOURCE_FILE_SUFFIX));
    }
}
