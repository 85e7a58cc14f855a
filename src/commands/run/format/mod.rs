//! Output formatting for the run command

mod human;
mod json;
mod records;

pub use human::{human_lines, output_human};
pub use json::{output_json, report_json};
pub use records::{output_records, records_lines};
