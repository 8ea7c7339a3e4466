mod log_file;

pub use log_file::{log_date, parse_log_filename};
