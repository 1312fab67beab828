pub mod amount;
pub mod classify;
pub mod extractor;
pub mod fields;


pub use amount::{normalize_amount, parse_amount};
pub use classify::is_test_record;
pub use extractor::extract_record;
