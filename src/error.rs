use crate::form::Field;
use std::io;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Server(String),
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Parse(String),
    #[error("Row {0}: {1} is required.")]
    MissingField(usize, Field),
    #[error("Row {0}: {1} must be a whole number, got '{2}'.")]
    NotANumber(usize, Field, String),
    #[error("File select dialog closed.")]
    DialogClosed,
    #[error("IO Error")]
    IO(io::ErrorKind),
    #[error("The given path does not contain a file name.")]
    NotFile,
    #[error("File should contain valid utf8")]
    Utf8Error,
    #[error("Expected 'pid burst arrival' on line {0}, got '{1}'.")]
    MalformedLine(usize, String),
    #[error("There is no output to save yet.")]
    NoOutput,
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Error::Parse(error.to_string())
        } else {
            Error::Transport(error.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Parse(error.to_string())
    }
}
