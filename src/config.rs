use std::path::PathBuf;

pub const INPUT_FILE: &str = "raw_data.jsonl";
pub const OUTPUT_CSV: &str = "clean_transactions.csv";
pub const OUTPUT_JSONL: &str = "clean_transactions.jsonl";
pub const PROGRESS_INTERVAL: usize = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub csv_path: PathBuf,
    pub jsonl_path: PathBuf,
    /// Print a progress line every this many processed lines.
    pub progress_interval: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(INPUT_FILE),
            csv_path: PathBuf::from(OUTPUT_CSV),
            jsonl_path: PathBuf::from(OUTPUT_JSONL),
            progress_interval: PROGRESS_INTERVAL,
        }
    }
}
