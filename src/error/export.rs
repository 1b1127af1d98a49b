use std::error::Error as StdError;
use std::fmt;

use crate::error::validation::ValidationError;

#[derive(Debug)]
pub struct ExportError {
    pub message: String,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl ExportError {
    pub fn new(message: &str) -> Self {
        ExportError {
            message: message.to_string(),
            source: None,
        }
    }

    /// Prefix the message, e.g. with the path being read or written.
    pub fn context(mut self, context: impl fmt::Display) -> Self {
        self.message = format!("{}: {}", context, self.message);
        self
    }

    pub fn source_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// The rule the course broke, if the export was refused by validation.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.source_error()?.downcast_ref::<ValidationError>()
    }

    pub fn io_error(&self) -> Option<&std::io::Error> {
        self.source_error()?.downcast_ref::<std::io::Error>()
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExportError: {}", self.message)
    }
}

// Lifts io, serde_json and validation errors through `?`.
impl<E: StdError + Send + Sync + 'static> From<E> for ExportError {
    fn from(err: E) -> Self {
        ExportError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
