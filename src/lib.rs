pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod input_file;
pub mod process;
pub mod report;
pub mod submission;
