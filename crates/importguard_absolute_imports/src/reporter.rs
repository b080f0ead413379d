use std::io::{self, Write};

use colored::Colorize;
use log::debug;

use crate::types::Violation;

pub fn print_no_violations_message<W: Write>(writer: &mut W) -> io::Result<()> {
    debug!("No absolute imports detected");
    writeln!(writer, "{} No forbidden absolute imports found.", "✅".green().bold())?;
    writer.flush()?;
    Ok(())
}

/// Print the violation header followed by one `path:line: text` entry per violation.
pub fn print_violations<W: Write>(
    writer: &mut W,
    violations: &[Violation],
    library_name: &str,
) -> io::Result<()> {
    debug!("Printing {} violations", violations.len());
    writeln!(
        writer,
        "{} Absolute imports of {} found outside tests:",
        "❌".red().bold(),
        library_name
    )?;

    // Locations stay uncolored so editors and CI can parse them
    for v in violations {
        writeln!(writer, "{}:{}: {}", v.file_path, v.line_number, v.line_text)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn violation(file_path: &str, line_number: usize, line_text: &str) -> Violation {
        Violation {
            file_path: file_path.to_string(),
            line_number,
            line_text: line_text.to_string(),
        }
    }

    #[test]
    fn test_no_violations_message_is_a_single_line() {
        let out = render(|w| print_no_violations_message(w));
        assert_eq!(out, "✅ No forbidden absolute imports found.\n");
    }

    #[test]
    fn test_violations_are_listed_in_order_after_header() {
        let violations = vec![
            violation("src/pkg/a.py", 3, "import mylib"),
            violation("src/pkg/b.py", 12, "from mylib.sub import x"),
        ];

        let out = render(|w| print_violations(w, &violations, "mylib"));

        assert_eq!(
            out,
            "❌ Absolute imports of mylib found outside tests:\n\
             src/pkg/a.py:3: import mylib\n\
             src/pkg/b.py:12: from mylib.sub import x\n"
        );
    }
}
