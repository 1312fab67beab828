use crate::config::Config;
use crate::error::{CleanError, SkipReason};
use crate::extract::extract_record;
use crate::output::{save_csv, save_jsonl};
use crate::record::CleanRecord;
use crate::stream_lines;

use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub processed: usize,
    pub clean: usize,
    pub skipped: usize,
    pub malformed: usize,
    pub unparseable_amount: usize,
    pub missing_identifiers: usize,
    pub test_records: usize,
}

impl RunStats {
    fn record_skip(&mut self, reason: SkipReason) {
        self.skipped += 1;
        match reason {
            SkipReason::Malformed => self.malformed += 1,
            SkipReason::UnparseableAmount => self.unparseable_amount += 1,
            SkipReason::MissingIdentifiers => self.missing_identifiers += 1,
            SkipReason::TestRecord => self.test_records += 1,
        }
    }
}

/// Kept records in input order plus the counters for the pass that made them.
#[derive(Debug, Default)]
pub struct Batch {
    pub records: Vec<CleanRecord>,
    pub stats: RunStats,
}

#[derive(Debug)]
pub struct RunSummary {
    pub stats: RunStats,
    pub written: Vec<PathBuf>,
}

/// Run every non-blank line through the extractor.
///
/// Blank lines are not counted. A progress line goes to `progress` every
/// `interval` processed lines.
pub fn process_lines<I, W>(lines: I, mut progress: W, interval: usize) -> Result<Batch, CleanError>
where
    I: IntoIterator<Item = io::Result<Vec<u8>>>,
    W: Write,
{
    let mut batch = Batch::default();

    for line in lines {
        let line = line?;
        if is_blank(&line) {
            continue;
        }

        batch.stats.processed += 1;
        match extract_record(&line) {
            Ok(record) => {
                batch.records.push(record);
                batch.stats.clean += 1;
            }
            Err(reason) => {
                tracing::trace!(line = batch.stats.processed, %reason, "skipping line");
                batch.stats.record_skip(reason);
            }
        }

        if interval > 0 && batch.stats.processed % interval == 0 {
            writeln!(
                progress,
                "Processed {} lines | Clean: {} | Skipped: {}",
                batch.stats.processed, batch.stats.clean, batch.stats.skipped
            )?;
        }
    }

    Ok(batch)
}

/// Read the input, report progress to `out`, and write both outputs when at
/// least one record survived.
pub fn run<W: Write>(config: &Config, mut out: W) -> Result<RunSummary, CleanError> {
    writeln!(out, "Processing {}...", config.input_path.display())?;

    let lines = stream_lines(&config.input_path)?;
    let Batch { records, stats } = process_lines(lines, &mut out, config.progress_interval)?;

    writeln!(
        out,
        "\nDone! Clean records: {} | Skipped: {}",
        stats.clean, stats.skipped
    )?;
    tracing::info!(
        processed = stats.processed,
        malformed = stats.malformed,
        unparseable_amount = stats.unparseable_amount,
        missing_identifiers = stats.missing_identifiers,
        test_records = stats.test_records,
        "skip breakdown"
    );

    let mut written = Vec::new();
    if records.is_empty() {
        tracing::warn!("no clean records, outputs not written");
        return Ok(RunSummary { stats, written });
    }

    save_csv(&records, &config.csv_path)?;
    writeln!(out, "Saved to {}", config.csv_path.display())?;
    written.push(config.csv_path.clone());

    save_jsonl(&records, &config.jsonl_path)?;
    writeln!(out, "Also saved to {}", config.jsonl_path.display())?;
    written.push(config.jsonl_path.clone());

    Ok(RunSummary { stats, written })
}

fn is_blank(line: &[u8]) -> bool {
    match std::str::from_utf8(line) {
        Ok(text) => text.trim().is_empty(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &str) -> Vec<io::Result<Vec<u8>>> {
        input.lines().map(|l| Ok(l.as_bytes().to_vec())).collect()
    }

    const VALID: &str = r#"{"payload":{"id":"pay_1","amount":"10.00"}}"#;

    #[test]
    fn test_blank_lines_not_counted() {
        let input = format!("\n{}\n   \n\t\n{}\n", VALID, VALID);
        let batch = process_lines(lines(&input), io::sink(), 5000).unwrap();

        assert_eq!(batch.stats.processed, 2);
        assert_eq!(batch.stats.clean, 2);
        assert_eq!(batch.stats.skipped, 0);
    }

    #[test]
    fn test_skip_counters_add_up() {
        let input = [
            VALID,
            "not json",
            r#"{"payload":{"id":"p","amount":"abc"}}"#,
            r#"{"payload":{"amount":"1.00"}}"#,
            r#"{"flags":["test"],"payload":{"id":"p","amount":"1.00"}}"#,
            "[]",
        ]
        .join("\n");
        let batch = process_lines(lines(&input), io::sink(), 5000).unwrap();
        let stats = &batch.stats;

        assert_eq!(stats.processed, 6);
        assert_eq!(stats.clean, 1);
        assert_eq!(stats.skipped, 5);
        assert_eq!(stats.malformed, 2);
        assert_eq!(stats.unparseable_amount, 1);
        assert_eq!(stats.missing_identifiers, 1);
        assert_eq!(stats.test_records, 1);
        let by_reason = stats.malformed + stats.unparseable_amount + stats.missing_identifiers;
        assert_eq!(by_reason + stats.test_records, stats.skipped);
    }

    #[test]
    fn test_progress_every_interval() {
        let mut input = String::new();
        for i in 0..7 {
            if i == 3 {
                input.push_str("bad\n\n");
            } else {
                input.push_str(VALID);
                input.push('\n');
            }
        }

        let mut buf = Vec::new();
        process_lines(lines(&input), &mut buf, 3).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert_eq!(
            output,
            "Processed 3 lines | Clean: 3 | Skipped: 0\nProcessed 6 lines | Clean: 5 | Skipped: 1\n"
        );
    }

    #[test]
    fn test_records_keep_input_order() {
        let input = (1..=4)
            .map(|i| format!(r#"{{"payload":{{"id":"pay_{}","amount":"{}.00"}}}}"#, i, i))
            .collect::<Vec<_>>()
            .join("\n");
        let batch = process_lines(lines(&input), io::sink(), 5000).unwrap();

        let amounts: Vec<f64> = batch.records.iter().map(|r| r.amount_usd).collect();
        assert_eq!(amounts, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_read_error_is_fatal() {
        let input: Vec<io::Result<Vec<u8>>> = vec![
            Ok(VALID.as_bytes().to_vec()),
            Err(io::Error::new(io::ErrorKind::Other, "disk gone")),
        ];
        let result = process_lines(input, io::sink(), 5000);

        assert!(matches!(result, Err(CleanError::Io(_))));
    }
}
