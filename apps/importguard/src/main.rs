use anyhow::Result;
use importguard_absolute_imports::{Config, USAGE};
use log::{debug, info};
use std::ffi::OsString;
use std::io::{BufWriter, Write};
use std::process;
use std::time::Instant;

/// Exit status for a usage error; shared with "violations found".
const USAGE_EXIT_CODE: i32 = 1;

/// Exit status for scans that could not complete (unreadable files, bad roots).
const FATAL_EXIT_CODE: i32 = 2;

fn main() {
    env_logger::init();

    let cfg = match parse_invocation(std::env::args_os()) {
        Ok(cfg) => cfg,
        Err(code) => {
            println!("{}", USAGE);
            process::exit(code);
        }
    };
    debug!("Parsed CLI arguments: {:?}", cfg);

    match run(&cfg) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(FATAL_EXIT_CODE);
        }
    }
}

/// Parse process arguments, mapping any failure to the usage exit status.
fn parse_invocation<I, T>(args: I) -> Result<Config, i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Config::try_from_args(args).map_err(|e| {
        debug!("Argument parsing failed: {}", e);
        USAGE_EXIT_CODE
    })
}

fn run(cfg: &Config) -> Result<i32> {
    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    let mut stdout = BufWriter::new(std::io::stdout());
    let start = Instant::now();

    let result = importguard_absolute_imports::scan(cfg)?;
    debug!("Found {} violations", result.violations.len());

    if result.is_clean() {
        importguard_absolute_imports::print_no_violations_message(&mut stdout)?;
    } else {
        importguard_absolute_imports::print_violations(
            &mut stdout,
            &result.violations,
            &cfg.library_name,
        )?;
    }
    stdout.flush()?;

    info!(
        "Finished in {}ms on {} files.",
        start.elapsed().as_millis(),
        result.files_analyzed
    );

    // Non-zero exit to fail CI
    Ok(result.exit_code())
}
