//! Errors raised around the prefix trie.
//!
//! Lookups never fail: a missing match is `None` or an empty list. What can
//! fail is everything that feeds a trie, so each of those areas has its own
//! enum and they meet in [`NiihauError`]:
//!
//! - [`config::ConfigError`] for configuration files and environment
//! - [`vocabulary::VocabularyError`] for vocabulary files
//! - [`CipherError`] for a plugged-in cipher
//!
//! Failures that end a command are handed to the global [`ErrorReporter`],
//! which logs them through `tracing` once logging is up.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::{RwLock, RwLockReadGuard};
use thiserror::Error;

use crate::cipher::CipherError;

pub mod config;
pub mod vocabulary;

/// Process exit status when a lookup finds nothing.
pub const EXIT_NO_MATCH: u8 = 1;

/// Process exit status when a command fails with a [`NiihauError`].
pub const EXIT_ERROR: u8 = 2;

/// Result type alias used throughout Niihau.
pub type NiihauResult<T> = Result<T, NiihauError>;

/// Any failure outside the trie itself.
#[derive(Error, Debug)]
pub enum NiihauError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A vocabulary file could not be turned into a trie.
    #[error("Vocabulary error: {0}")]
    Vocabulary(#[from] vocabulary::VocabularyError),

    /// A cipher rejected a key or token.
    #[error("Cipher error: {0}")]
    Cipher(#[from] CipherError),

    /// Writing generated files failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else, such as a command run without a vocabulary.
    #[error("{0}")]
    Custom(String),
}

/// An error together with where it surfaced.
#[derive(Debug)]
pub struct ErrorContext {
    /// The error being reported.
    pub error: NiihauError,

    /// Component or command that hit the error.
    pub component: String,

    /// Free-form detail, such as the input being processed.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Wraps `error` as raised by `component`.
    pub fn new<S: Into<String>>(error: NiihauError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Attaches free-form detail.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Sink for errors that end a command.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Consumes one report.
    fn report(&self, context: ErrorContext);
}

/// Emits each report as a `tracing` error event.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Slot holding the process-wide reporter.
#[derive(Debug, Default)]
pub struct ErrorReporting {
    reporter: Option<Arc<dyn ErrorReporter>>,
}

impl ErrorReporting {
    /// Installs `reporter`, replacing any previous one.
    pub fn set_reporter(&mut self, reporter: Arc<dyn ErrorReporter>) {
        self.reporter = Some(reporter);
    }

    /// Hands `context` to the installed reporter, or prints it to stderr
    /// when none is installed (errors raised before logging starts).
    pub fn report(&self, context: ErrorContext) {
        match &self.reporter {
            Some(reporter) => reporter.report(context),
            None => eprintln!("Error: {context}"),
        }
    }
}

static ERROR_REPORTING: Lazy<RwLock<ErrorReporting>> =
    Lazy::new(|| RwLock::new(ErrorReporting::default()));

/// Read access to the global reporter slot.
pub fn get_error_reporting() -> RwLockReadGuard<'static, ErrorReporting> {
    ERROR_REPORTING.read()
}

/// Installs the global reporter.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    ERROR_REPORTING.write().set_reporter(reporter);
}
