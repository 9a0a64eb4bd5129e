//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::cipher::CipherError;
use crate::error::config::ConfigError;
use crate::error::vocabulary::VocabularyError;
use crate::error::{
    get_error_reporting, set_error_reporter, ErrorContext, ErrorReporter, NiihauError,
    TracingErrorReporter,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = NiihauError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component")
        .with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that area errors convert into the top-level error.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: NiihauError = io_error.into();
    assert!(format!("{error}").contains("file not found"));

    let error: NiihauError = ConfigError::ValidationError("bad level".into()).into();
    assert_eq!(
        error.to_string(),
        "Configuration error: Configuration validation error: bad level"
    );

    let error: NiihauError = VocabularyError::NotAMapping(PathBuf::from("v.json")).into();
    assert!(matches!(error, NiihauError::Vocabulary(_)));

    let error: NiihauError = CipherError::WrongKey.into();
    assert!(matches!(error, NiihauError::Cipher(ref e) if e.is_wrong_key()));
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter works correctly.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::default());
    set_error_reporter(reporter.clone());

    let error = NiihauError::Custom("test error".to_string());
    get_error_reporting().report(ErrorContext::new(error, "test_component"));

    assert!(reporter.reported_count.load(Ordering::SeqCst) >= 1);
}

/// Test that the default tracing error reporter can be used.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = NiihauError::Custom("test error".to_string());

    // Just make sure this doesn't panic
    reporter.report(ErrorContext::new(error, "test_component"));
}


/// Test that malformed JSON surfaces as a vocabulary error, not a bare parse error.
#[test]
fn test_json_parse_failure_is_a_vocabulary_error() {
    let loader = crate::vocabulary::VocabularyLoader::new();
    let result: crate::error::NiihauResult<_> = loader
        .parse(
            &PathBuf::from("routes.json"),
            crate::vocabulary::VocabularyFormat::Json,
            "{ \"/a\": ",
        )
        .map_err(NiihauError::from);

    let err = result.unwrap_err();
    assert!(matches!(err, NiihauError::Vocabulary(VocabularyError::Parse { .. })));
    assert!(err.to_string().starts_with("Vocabulary error: Failed to parse vocabulary"));
}
