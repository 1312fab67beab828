pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod record;

use crate::error::CleanError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open a line-delimited JSON file and yield its raw lines.
///
/// Lines are returned as bytes so that invalid UTF-8 on one line can be
/// skipped like any other malformed record.
pub fn stream_lines(path: &Path) -> Result<impl Iterator<Item = io::Result<Vec<u8>>>, CleanError> {
    let file = File::open(path)?;
    Ok(BufReader::new(file).split(b'\n'))
}
