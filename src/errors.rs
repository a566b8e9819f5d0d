use std::error::Error as _;
use std::io;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Invalid PORT value '{value}'")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid WORKERS value '{value}': expected a positive integer")]
    InvalidWorkers { value: String },

    #[error("Could not bind to {address}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("HTTP server stopped with an error")]
    Server(#[source] io::Error),
}

impl StartupError {
    /// One-line description including the underlying cause, for stderr and logs.
    pub fn report(&self) -> String {
        match self.source() {
            Some(cause) => format!("{self}: {cause}"),
            None => self.to_string(),
        }
    }
}
