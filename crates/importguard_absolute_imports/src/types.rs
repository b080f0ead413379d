#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path of the offending file, relative to the directory the scan ran from
    pub file_path: String,
    /// 1-based line number within the file
    pub line_number: usize,
    /// The offending line with surrounding whitespace trimmed
    pub line_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub violations: Vec<Violation>,
    pub files_analyzed: usize,
}

impl ScanResult {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Process exit status for this result: 0 when clean, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_clean() { 0 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_reflects_violations() {
        let clean = ScanResult { violations: vec![], files_analyzed: 3 };
        assert!(clean.is_clean());
        assert_eq!(clean.exit_code(), 0);

        let dirty = ScanResult {
            violations: vec![Violation {
                file_path: "pkg/mod.py".to_string(),
                line_number: 1,
                line_text: "import mylib".to_string(),
            }],
            files_analyzed: 3,
        };
        assert!(!dirty.is_clean());
        assert_eq!(dirty.exit_code(), 1);
    }
}
