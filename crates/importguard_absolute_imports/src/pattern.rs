use anyhow::{Context, Result};
use log::trace;
use regex::Regex;

/// Matches statement-initial absolute imports of a single library.
///
/// A line matches when, after leading whitespace, it starts with `import` or
/// `from`, whitespace, and the exact library name, followed by end of line,
/// whitespace or a `.`. Anything else after the name means a different
/// identifier (`mylib2`, `mylib-extra`) and is not a match.
#[derive(Debug, Clone)]
pub struct AbsoluteImportPattern {
    regex: Regex,
}

impl AbsoluteImportPattern {
    pub fn new(library_name: &str) -> Result<Self> {
        let source = format!(r"^\s*(?:from|import)\s+{}(?:\.|\s|$)", regex::escape(library_name));
        trace!("Compiled absolute import pattern: {}", source);
        let regex = Regex::new(&source)
            .with_context(|| format!("Invalid import pattern for library {library_name:?}"))?;
        Ok(Self { regex })
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// One-off form of [`AbsoluteImportPattern::is_match`].
pub fn is_absolute_import(line: &str, library_name: &str) -> bool {
    AbsoluteImportPattern::new(library_name).is_ok_and(|p| p.is_match(line))
}
