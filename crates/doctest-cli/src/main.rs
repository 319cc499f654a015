//! Doctest builder CLI
//!
//! Reads one rustdoc-generated kernel doctest stub from standard input
//! and persists its `{body, name}` JSON record into the build tree.

use clap::Command;
use doctest_record::TESTS_DIR;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    Command::new("doctest-builder")
        .version("0.1.0")
        .about("Test builder for rustdoc-generated kernel doctests")
        .get_matches();

    match run() {
        Ok(_) => process::exit(0),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn run() -> Result<PathBuf, anyhow::Error> {
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;
    build_record_file(&content, Path::new(TESTS_DIR))
}

/// Build the record for `content` and persist it under `dir`
///
/// Extraction failures abort before anything is written; the output is
/// all-or-nothing.
fn build_record_file(content: &str, dir: &Path) -> Result<PathBuf, anyhow::Error> {
    let record = doctest_extract::build_record(content)?;
    let path = record.write_to(dir)?;
    Ok(path)
}
