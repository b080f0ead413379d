//! Absolute import detection for Python projects.
//!
//! This crate scans Python source trees for statement-initial absolute imports
//! of a given library (`import mylib`, `from mylib.sub import x`). Packages
//! that should only import themselves relatively run it as a CI gate over
//! their non-test directories.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use importguard_absolute_imports::{Config, scan};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     library_name: "mylib".to_string(),
//!     roots: vec![std::path::PathBuf::from("src/mylib")],
//! };
//!
//! let result = scan(&cfg)?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! if result.is_clean() {
//!     importguard_absolute_imports::print_no_violations_message(&mut stdout)?;
//! } else {
//!     importguard_absolute_imports::print_violations(
//!         &mut stdout,
//!         &result.violations,
//!         &cfg.library_name,
//!     )?;
//! }
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod pattern;
mod reporter;
mod types;

// Re-export public API
pub use checker::{scan, scan_relative_to};
pub use config::{Config, USAGE};
pub use pattern::{AbsoluteImportPattern, is_absolute_import};
pub use reporter::{print_no_violations_message, print_violations};
pub use types::{ScanResult, Violation};
